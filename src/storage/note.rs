//! Story notes: free-form text saved under the text category.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use super::{Category, UploadRoot, NOTE_EXTENSION, NOTE_PREFIX};
use crate::datetime::note_timestamp;
use crate::{KathaError, Result};

/// Build the file name for a note written at `at`.
///
/// The name is `story_YYYYMMDD_HHMMSS.txt` in the given timezone. Two notes
/// written within the same second share a name.
pub fn note_file_name(at: &DateTime<Utc>, timezone: &str) -> String {
    format!(
        "{NOTE_PREFIX}{}.{NOTE_EXTENSION}",
        note_timestamp(at, timezone)
    )
}

impl UploadRoot {
    /// Save a story note written at `at`.
    ///
    /// Text that is empty after trimming is rejected with a validation error
    /// and nothing is written. Otherwise the text is stored as-is; an
    /// existing note with the same timestamp is overwritten.
    pub fn persist_note(&self, text: &str, at: DateTime<Utc>) -> Result<PathBuf> {
        if text.trim().is_empty() {
            return Err(KathaError::Validation("story text is empty".to_string()));
        }

        let dir = self.category_dir(Category::Text);
        fs::create_dir_all(&dir)?;

        let path = dir.join(note_file_name(&at, self.timezone()));
        fs::write(&path, text)?;

        info!(path = %path.display(), chars = text.chars().count(), "Stored story note");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn setup_root() -> (TempDir, UploadRoot) {
        let temp_dir = TempDir::new().unwrap();
        let root = UploadRoot::open(temp_dir.path()).unwrap().with_timezone("UTC");
        (temp_dir, root)
    }

    fn text_files(root: &UploadRoot) -> Vec<String> {
        fs::read_dir(root.category_dir(Category::Text))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect()
    }

    fn is_note_name(name: &str) -> bool {
        let Some(stamp) = name
            .strip_prefix(NOTE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".txt"))
        else {
            return false;
        };
        let (date, time) = match stamp.split_once('_') {
            Some(parts) => parts,
            None => return false,
        };
        date.len() == 8
            && time.len() == 6
            && date.chars().chain(time.chars()).all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_note_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 5).unwrap();
        assert_eq!(note_file_name(&at, "UTC"), "story_20240115_103005.txt");
    }

    #[test]
    fn test_persist_note() {
        let (_temp_dir, root) = setup_root();
        let text = "ఒకప్పుడు ఒక అడవిలో...\n  with trailing space  ";

        let path = root.persist_note(text, Utc::now()).unwrap();

        let files = text_files(&root);
        assert_eq!(files.len(), 1);
        assert!(is_note_name(&files[0]), "unexpected name {}", files[0]);
        assert_eq!(fs::read_to_string(path).unwrap(), text);
    }

    #[test]
    fn test_persist_note_rejects_blank() {
        let (_temp_dir, root) = setup_root();

        for text in ["", "   ", "\n\t  \n"] {
            let result = root.persist_note(text, Utc::now());
            assert!(matches!(result, Err(KathaError::Validation(_))));
        }

        assert!(text_files(&root).is_empty());
    }

    #[test]
    fn test_same_second_overwrites() {
        let (_temp_dir, root) = setup_root();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

        root.persist_note("first story", at).unwrap();
        let path = root
            .persist_note("second story", at + Duration::milliseconds(400))
            .unwrap();

        assert_eq!(text_files(&root), vec!["story_20240301_080000.txt"]);
        assert_eq!(fs::read_to_string(path).unwrap(), "second story");
    }

    #[test]
    fn test_different_seconds_keep_both() {
        let (_temp_dir, root) = setup_root();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

        root.persist_note("first story", at).unwrap();
        root.persist_note("second story", at + Duration::seconds(1)).unwrap();

        assert_eq!(text_files(&root).len(), 2);
    }

    #[test]
    fn test_note_uses_configured_timezone() {
        let temp_dir = TempDir::new().unwrap();
        let root = UploadRoot::open(temp_dir.path())
            .unwrap()
            .with_timezone("Asia/Kolkata");
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 5).unwrap();

        let path = root.persist_note("కథ", at).unwrap();

        assert!(path.ends_with("text/story_20240115_160005.txt"));
    }
}
