//! Local puzzle input store

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only view of a directory of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Fails if the input directory exists but is a file. A missing
    /// directory is fine; every input is then reported missing.
    pub fn check_dir(&self) -> Result<(), InputError> {
        if self.input_dir.exists() && !self.input_dir.is_dir() {
            return Err(InputError::NotADirectory(self.input_dir.clone()));
        }
        Ok(())
    }

    /// Path of the input file for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing { year, day, path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Read { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new("/inputs");

        assert_eq!(
            store.input_path(2024, 1),
            PathBuf::from("/inputs/2024_day01.txt")
        );
        assert_eq!(
            store.input_path(2023, 17),
            PathBuf::from("/inputs/2023_day17.txt")
        );
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let input = "#####\n#S.E#\n#####\n";
        fs::write(temp.path().join("2024_day16.txt"), input).unwrap();

        let store = InputStore::new(temp.path());
        assert!(store.contains(2024, 16));
        assert_eq!(store.get(2024, 16).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path());

        assert!(!store.contains(2024, 18));
        match store.get(2024, 18) {
            Err(InputError::Missing { year, day, path }) => {
                assert_eq!((year, day), (2024, 18));
                assert!(path.ends_with("2024_day18.txt"));
            }
            other => panic!("expected missing input, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_named_like_input_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2023_day17.txt")).unwrap();

        let store = InputStore::new(temp.path());
        assert!(!store.contains(2023, 17));
        assert!(matches!(store.get(2023, 17), Err(InputError::Missing { .. })));
    }

    #[test]
    fn test_check_dir() {
        let temp = TempDir::new().unwrap();
        assert!(InputStore::new(temp.path()).check_dir().is_ok());
        assert!(InputStore::new(temp.path().join("not-yet")).check_dir().is_ok());

        let file = temp.path().join("file.txt");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            InputStore::new(&file).check_dir(),
            Err(InputError::NotADirectory(_))
        ));
    }
}
