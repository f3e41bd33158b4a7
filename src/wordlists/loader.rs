//! Word list loading utilities
//!
//! Provides functions to load target words from files or use embedded constants.

use crate::core::TargetWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load target words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped;
/// entries that are not valid words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use assembly_endgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<TargetWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<TargetWord> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match TargetWord::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                tracing::warn!("Skipping word list entry {line:?}: {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to target words
///
/// # Examples
/// ```
/// use assembly_endgame::wordlists::loader::words_from_slice;
/// use assembly_endgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<TargetWord> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["react", "closure", "go"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "CLOSURE");
        assert_eq!(words[2].text(), "GO");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["react", "node.js", "", "c++", "stack"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "STACK");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header").unwrap();
        writeln!(file, "heap").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Queue  ").unwrap();
        writeln!(file, "bad word").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();

        let texts: Vec<&str> = words.iter().map(TargetWord::text).collect();
        assert_eq!(texts, vec!["HEAP", "QUEUE"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
