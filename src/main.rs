#![forbid(unsafe_code)]

use std::{
    io::{self, BufRead, Write},
    process::exit,
};

use indoc::indoc;
use serde::Deserialize;
use slugify_charmap::{CharMap, Options, OptionsConfig, SlugifyError};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = indoc! {"
    Usage: slugify [TEXT]...

    Prints a slug for every TEXT argument, or for every line of standard input
    when no arguments are given.

    Configuration is read from the environment (and a .env file, if present):
      SLUGIFY_REPLACEMENT  separator placed between words (default: -)
      SLUGIFY_REMOVE       regex of characters to remove instead of the default set
      SLUGIFY_LOWER        lowercase the result (true/false)
      SLUGIFY_STRICT       keep only ASCII letters and digits (true/false)
      SLUGIFY_TRIM         strip separators from both ends (default: true)
      SLUGIFY_EXTEND       extra mappings separated by `;`: ☢=radioactive;♣=clubs
"};

#[derive(Debug, Deserialize)]
struct AppConfig {
    replacement: Option<String>,
    remove: Option<String>,
    lower: Option<bool>,
    strict: Option<bool>,
    trim: Option<bool>,
    extend: Option<String>,
}

impl AppConfig {
    fn options(&self) -> Result<Options, SlugifyError> {
        Options::try_from(OptionsConfig {
            replacement: self.replacement.clone(),
            remove: self.remove.clone(),
            lower: self.lower,
            strict: self.strict,
            trim: self.trim,
        })
    }

    fn extensions(&self) -> Result<Vec<(String, String)>, SlugifyError> {
        self.extend
            .iter()
            .flat_map(|entries| entries.split(';'))
            .filter(|entry| !entry.is_empty())
            .map(|entry| parse_extension(entry))
            .collect()
    }
}

fn parse_extension(entry: &str) -> Result<(String, String), SlugifyError> {
    match entry.split_once('=') {
        Some((key, replacement)) => Ok((key.to_owned(), replacement.to_owned())),
        None => Err(SlugifyError::InvalidExtension {
            entry: entry.to_owned(),
        }),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print!("{USAGE}");
        return;
    }

    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "slugify_charmap=info"
                        .parse()
                        .expect("Hard-coded default directive should be correct"),
                )
                .from_env_lossy(),
        )
        .init();

    if let Err(err) = dotenv {
        warn!("Could not load config from .env file: {err}");
    }

    let app_config = match envy::prefixed("SLUGIFY_").from_env::<AppConfig>() {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load app config: {err}");
            exit(255);
        }
    };

    let options = match app_config.options() {
        Ok(options) => options,
        Err(err) => {
            error!("Invalid slug options: {err}");
            exit(255);
        }
    };

    let extensions = match app_config.extensions() {
        Ok(extensions) => extensions,
        Err(err) => {
            error!("Invalid char map extensions: {err}");
            exit(255);
        }
    };

    if let Err(err) = run(&args, &options, extensions) {
        error!("{err:#}");
        exit(1);
    }
}

fn run(
    args: &[String],
    options: &Options,
    extensions: Vec<(String, String)>,
) -> anyhow::Result<()> {
    let char_map = CharMap::global();

    if !extensions.is_empty() {
        info!("Extending char map with {} entries", extensions.len());
        char_map.try_extend(extensions)?;
    }

    let mut out = io::stdout().lock();

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", char_map.slugify(&line?, options.clone()))?;
        }
    } else {
        for arg in args {
            writeln!(out, "{}", char_map.slugify(arg, options.clone()))?;
        }
    }

    Ok(())
}
