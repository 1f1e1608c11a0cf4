use regex::Regex;
use serde::Deserialize;

use crate::error::SlugifyError;

pub const DEFAULT_REPLACEMENT: &str = "-";

/// Settings for a single [`slugify`](crate::slugify_with) call.
///
/// A bare string converts into options with that string as the replacement:
///
/// ```
/// use slugify_charmap::slugify_with;
///
/// assert_eq!(slugify_with("foo bar baz", "_"), "foo_bar_baz");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) replacement: String,
    pub(crate) remove: Option<Regex>,
    pub(crate) lower: bool,
    pub(crate) strict: bool,
    pub(crate) trim: bool,
}

impl Options {
    pub fn new() -> Self {
        Options {
            replacement: DEFAULT_REPLACEMENT.to_owned(),
            remove: None,
            lower: false,
            strict: false,
            trim: true,
        }
    }

    /// Text placed between words. Inserted as is, without any further processing.
    pub fn replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// Characters to delete instead of the default set.
    pub fn remove(mut self, remove: Regex) -> Self {
        self.remove = Some(remove);
        self
    }

    pub fn remove_pattern(self, pattern: &str) -> Result<Self, SlugifyError> {
        let remove = Regex::new(pattern).map_err(|source| SlugifyError::InvalidRemovePattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        Ok(self.remove(remove))
    }

    pub fn lower(mut self, lower: bool) -> Self {
        self.lower = lower;
        self
    }

    /// Only keep ASCII letters and digits between separators.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether to strip separators from both ends of the slug.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}

impl From<&str> for Options {
    fn from(replacement: &str) -> Self {
        Options::new().replacement(replacement)
    }
}

impl From<String> for Options {
    fn from(replacement: String) -> Self {
        Options::new().replacement(replacement)
    }
}

impl From<Option<Options>> for Options {
    fn from(options: Option<Options>) -> Self {
        options.unwrap_or_default()
    }
}

/// Deserializable form of [`Options`]. Missing fields fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct OptionsConfig {
    pub replacement: Option<String>,
    pub remove: Option<String>,
    pub lower: Option<bool>,
    pub strict: Option<bool>,
    pub trim: Option<bool>,
}

impl TryFrom<OptionsConfig> for Options {
    type Error = SlugifyError;

    fn try_from(config: OptionsConfig) -> Result<Self, Self::Error> {
        let mut options = Options::new();

        if let Some(replacement) = config.replacement {
            options = options.replacement(replacement);
        }

        if let Some(pattern) = config.remove {
            options = options.remove_pattern(&pattern)?;
        }

        Ok(options
            .lower(config.lower.unwrap_or(false))
            .strict(config.strict.unwrap_or(false))
            .trim(config.trim.unwrap_or(true)))
    }
}
