use super::CITIES;
use crate::SOFT_TERMINAL;
use std::collections::HashSet;
use std::path::Path;

/// Static set of words a player may name, plus the chaining rule
/// that links each accepted word to the next.
///
/// All lookups normalize their input (trim, lowercase), so callers
/// may pass raw client text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gazetteer {
    words: HashSet<String>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::from_iter(CITIES)
    }
}

impl<S> FromIterator<S> for Gazetteer
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| Self::normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

impl Gazetteer {
    /// Load a newline-separated word list.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read word list {}: {}", path.display(), e))?;
        let gazetteer = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .collect::<Self>();
        match gazetteer.len() {
            0 => Err(anyhow::anyhow!("word list {} is empty", path.display())),
            n => Ok(gazetteer).inspect(|_| log::info!("loaded {} words from {}", n, path.display())),
        }
    }

    /// Trim surrounding whitespace and lowercase.
    pub fn normalize(word: &str) -> String {
        word.trim().to_lowercase()
    }

    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&Self::normalize(word))
    }

    /// The letter the next word must start with.
    /// Falls back past a trailing soft terminal when there is a letter before it.
    /// None only for empty input.
    pub fn chaining_letter(word: &str) -> Option<char> {
        let word = Self::normalize(word);
        let mut tail = word.chars().rev();
        match (tail.next(), tail.next()) {
            (Some(SOFT_TERMINAL), Some(prev)) => Some(prev),
            (last, _) => last,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
