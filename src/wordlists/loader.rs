//! File loading utilities
//!
//! Custom pools and story templates read from disk.

use crate::core::{Category, LetterPool, Lexicon};
use crate::scoring::MIN_WORD_LENGTH;
use anyhow::{Context, Result, bail};
use log::warn;
use std::fs;
use std::path::Path;

/// A pool read from disk along with the category tags of its words
#[derive(Debug, Clone)]
pub struct CustomPool {
    pub pool: LetterPool,
    pub tags: Lexicon,
}

/// Load a pool from a file
///
/// The first non-empty line is the pool key. Each following non-empty line is
/// a word, optionally tagged the same way as the embedded lexicon:
/// `blend: noun, verb`. Untagged words stay in the corpus but cannot be
/// scored. Unlike embedded data, file words are checked: entries shorter than
/// the minimum length or not drawable from the key are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has no key line, the key is
/// not 7 distinct lowercase letters, or a tag names an unknown category.
///
/// # Examples
/// ```no_run
/// use letterpot::wordlists::loader::load_pool_from_file;
///
/// let custom = load_pool_from_file("my_pool.txt").unwrap();
/// println!("Loaded {} words for {}", custom.pool.len(), custom.pool.key());
/// ```
pub fn load_pool_from_file<P: AsRef<Path>>(path: P) -> Result<CustomPool> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read pool file {}", path.display()))?;

    pool_from_str(&content).with_context(|| format!("invalid pool file {}", path.display()))
}

/// Parse pool file contents, see [`load_pool_from_file`]
///
/// # Errors
///
/// Returns an error if there is no key line, the key is malformed, or a tag
/// names an unknown category.
pub fn pool_from_str(content: &str) -> Result<CustomPool> {
    let mut lines = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty());

    let Some(key) = lines.next() else {
        bail!("missing pool key");
    };

    let empty = LetterPool::new(key.clone(), Vec::<String>::new())?;
    let mut words = Vec::new();
    let mut tags = Lexicon::new();

    for line in lines {
        let (word, names) = match line.split_once(':') {
            Some((word, names)) => (word.trim(), names),
            None => (line.as_str(), ""),
        };

        if word.chars().count() < MIN_WORD_LENGTH || !empty.can_draw(word) {
            warn!("skipping \"{word}\": not a valid word for {key}");
            continue;
        }

        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let category: Category = name
                .parse()
                .with_context(|| format!("bad tag for \"{word}\""))?;
            tags.tag(word, category);
        }
        words.push(word.to_string());
    }

    Ok(CustomPool {
        pool: LetterPool::new(key, words)?,
        tags,
    })
}

/// Read a story template
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("failed to read story {}", path.display()))
}
