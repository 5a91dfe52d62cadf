//! Training corpus loading
//!
//! Reads the password list the Markov model is trained on.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the corpus location.
pub const CORPUS_PATH_ENV: &str = "PWD_CORPUS_PATH";
const DEFAULT_CORPUS_PATH: &str = "./assets/training-corpus.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_CORPUS_PATH`
/// 2. Default path `./assets/training-corpus.txt`
pub fn corpus_path() -> PathBuf {
    std::env::var(CORPUS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH))
}

/// Loads the corpus from [`corpus_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no non-blank lines
pub fn load_corpus() -> Result<Vec<String>, CorpusError> {
    load_corpus_from_path(corpus_path())
}

/// Loads one password per line, trimmed, skipping blank lines. Order is kept.
pub fn load_corpus_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus loading FAILED: FileNotFound {:?}", path);
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let passwords: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if passwords.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus loading FAILED: Empty file {:?}", path);
        return Err(CorpusError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Corpus loaded: {} passwords from {:?}", passwords.len(), path);

    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_corpus_path_default() {
        remove_env(CORPUS_PATH_ENV);
        assert_eq!(corpus_path(), PathBuf::from("./assets/training-corpus.txt"));
    }

    #[test]
    #[serial]
    fn test_corpus_path_from_env() {
        set_env(CORPUS_PATH_ENV, "/custom/path/rockyou.txt");
        assert_eq!(corpus_path(), PathBuf::from("/custom/path/rockyou.txt"));
        remove_env(CORPUS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_corpus_file_not_found() {
        set_env(CORPUS_PATH_ENV, "/nonexistent/path/corpus.txt");
        let result = load_corpus();
        assert!(matches!(result, Err(CorpusError::FileNotFound(_))));
        remove_env(CORPUS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_corpus_from_env() {
        let temp_file = setup_with_tempfile(&["password123", "letmein42", "dragon99"]);
        set_env(CORPUS_PATH_ENV, temp_file.path().to_str().unwrap());

        let corpus = load_corpus().unwrap();
        assert_eq!(corpus, vec!["password123", "letmein42", "dragon99"]);

        remove_env(CORPUS_PATH_ENV);
    }

    #[test]
    fn test_load_corpus_trims_and_skips_blank() {
        let temp_file = setup_with_tempfile(&["  Secret1 ", "", "   ", "Dragon\r", "abc"]);
        let corpus = load_corpus_from_path(temp_file.path()).unwrap();
        assert_eq!(corpus, vec!["Secret1", "Dragon", "abc"]);
    }

    #[test]
    fn test_load_corpus_keeps_case_and_duplicates() {
        let temp_file = setup_with_tempfile(&["Password", "password", "password"]);
        let corpus = load_corpus_from_path(temp_file.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus[0], "Password");
    }

    #[test]
    fn test_load_corpus_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "\n  \n").expect("Failed to write blank content");
        let result = load_corpus_from_path(temp_file.path());
        assert!(matches!(result, Err(CorpusError::EmptyFile)));
    }
}
