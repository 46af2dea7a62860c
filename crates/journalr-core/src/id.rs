//! Human-memorable entry identifiers.
//!
//! An id is two words drawn uniformly (with replacement) from a word list
//! plus a number in `1..99`, e.g. `amber-falcon-42`. Uniqueness is not
//! checked by default; the store reports a collision on insert as
//! `JournalError::DuplicateId`.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{JournalError, Result};

/// Word list compiled into the crate, used when no file is configured.
const BUNDLED_WORDS: &str = include_str!("../resources/words.txt");

/// Lowest numeric suffix (inclusive).
pub const ID_NUMBER_MIN: u32 = 1;

/// Numeric suffix upper bound (exclusive; 99 is never produced).
pub const ID_NUMBER_MAX: u32 = 99;

/// Redraw limit for `IdGenerator::generate_unique`.
const MAX_UNIQUE_ATTEMPTS: usize = 16;

/// Where the word list is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list shipped with the crate
    #[default]
    Bundled,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl WordSource {
    /// Load the word list.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::ResourceUnavailable` if the file cannot be read
    /// or contains no words.
    pub fn load(&self) -> Result<WordList> {
        match self {
            WordSource::Bundled => WordList::parse(BUNDLED_WORDS),
            WordSource::File(path) => WordList::read(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Bundled => write!(f, "bundled"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A non-empty list of words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a newline-delimited list. Lines are trimmed and blank lines skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let list = Self { words };
        if list.is_empty() {
            return Err(JournalError::ResourceUnavailable(
                "Word list is empty".to_string(),
            ));
        }
        Ok(list)
    }

    /// Read and parse a word list file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            JournalError::ResourceUnavailable(format!(
                "Cannot read word list {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

/// Draws identifiers from a loaded word list.
pub struct IdGenerator<R = ThreadRng> {
    words: WordList,
    rng: R,
}

impl IdGenerator<ThreadRng> {
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, rand::thread_rng())
    }
}

impl<R: Rng> IdGenerator<R> {
    /// Create a generator with a caller-supplied RNG (seeded RNGs make tests deterministic).
    pub fn with_rng(words: WordList, rng: R) -> Self {
        Self { words, rng }
    }

    /// Draw one identifier. No uniqueness check is performed.
    pub fn generate(&mut self) -> String {
        let first = self.words.pick(&mut self.rng);
        let second = self.words.pick(&mut self.rng);
        let number = self.rng.gen_range(ID_NUMBER_MIN..ID_NUMBER_MAX);
        format!("{}-{}-{}", first, second, number)
    }

    /// Draw identifiers until `is_taken` reports a free one.
    ///
    /// # Errors
    ///
    /// Propagates errors from `is_taken`, and returns
    /// `JournalError::DuplicateId` with the last candidate once the attempt
    /// limit is reached.
    pub fn generate_unique<F>(&mut self, mut is_taken: F) -> Result<String>
    where
        F: FnMut(&str) -> Result<bool>,
    {
        let mut candidate = self.generate();
        for attempt in 1..=MAX_UNIQUE_ATTEMPTS {
            if !is_taken(&candidate)? {
                return Ok(candidate);
            }
            debug!(
                "event=id_generate module=id status=collision attempt={} id={}",
                attempt, candidate
            );
            candidate = self.generate();
        }
        Err(JournalError::DuplicateId(candidate))
    }
}

/// Load the word list from `source` and draw a single identifier.
pub fn generate_id(source: &WordSource) -> Result<String> {
    let words = source.load()?;
    let word_count = words.len();
    let id = IdGenerator::new(words).generate();
    debug!(
        "event=id_generate module=id status=ok source={} words={} id={}",
        source, word_count, id
    );
    Ok(id)
}
