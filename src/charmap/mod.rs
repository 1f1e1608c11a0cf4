mod tables;

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use lazy_regex::Lazy;
use tracing::debug;

use crate::{
    error::{invalid_key, SlugifyError},
    options::Options,
    transform,
};

pub(crate) use tables::DEFAULT_BLOCKS;

static GLOBAL: Lazy<CharMap> = Lazy::new(CharMap::new);

/// Character transliteration table driving [`slugify`](crate::slugify).
///
/// Maps a single `char` to its replacement, which may be several characters long
/// or empty (the character is then dropped). Entries can be added or overridden
/// with [`CharMap::extend`] but never removed.
///
/// Lookups and extensions go through a read/write lock, so a transform never
/// sees a partially merged extension.
#[derive(Debug)]
pub struct CharMap {
    entries: RwLock<HashMap<char, String>>,
}

impl CharMap {
    /// Creates a table seeded with the default entries.
    pub fn new() -> Self {
        let entries = DEFAULT_BLOCKS
            .iter()
            .flat_map(|block| block.iter())
            .map(|&(ch, replacement)| (ch, replacement.to_owned()))
            .collect();

        CharMap {
            entries: RwLock::new(entries),
        }
    }

    /// Creates a table without any entries.
    pub fn empty() -> Self {
        CharMap {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide table used by the crate-level functions.
    ///
    /// Created on first use and lives until the process exits.
    pub fn global() -> &'static CharMap {
        &GLOBAL
    }

    pub fn get(&self, ch: char) -> Option<String> {
        self.read().get(&ch).cloned()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.read().contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copies the current state of the table.
    pub fn snapshot(&self) -> HashMap<char, String> {
        self.read().clone()
    }

    /// Merges `entries` into the table, overriding existing keys.
    ///
    /// All entries are inserted under a single write lock.
    pub fn extend<I, S>(&self, entries: I)
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let entries: Vec<(char, String)> = entries
            .into_iter()
            .map(|(ch, replacement)| (ch, replacement.into()))
            .collect();

        self.merge(entries);
    }

    /// Like [`CharMap::extend`], but with string keys.
    ///
    /// Every key must be exactly one character. Keys are checked before anything is
    /// merged, so on error the table is left untouched.
    pub fn try_extend<I, K, S>(&self, entries: I) -> Result<(), SlugifyError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, replacement)| {
                let key = key.as_ref();
                let mut chars = key.chars();

                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok((ch, replacement.into())),
                    _ => Err(invalid_key(key)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.merge(entries);
        Ok(())
    }

    /// Slugifies `input` against this table.
    pub fn slugify(&self, input: &str, options: impl Into<Options>) -> String {
        transform::slugify(self, input, &options.into())
    }

    #[tracing::instrument(skip_all, fields(count = entries.len()))]
    fn merge(&self, entries: Vec<(char, String)>) {
        let mut table = self.write();
        let before = table.len();
        table.extend(entries);

        debug!("Char map extended, {} new keys", table.len() - before);
    }

    // Entries are only ever inserted, so a poisoned table is still consistent.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<char, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<char, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CharMap {
    fn default() -> Self {
        CharMap::new()
    }
}
