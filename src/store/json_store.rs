use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

use crate::store::ProgressStore;

pub const MASTERED_FILE: &str = "correct_verbs.json";

pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.file_path(name);
        if !path.exists() {
            return T::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "discarding unreadable data");
                T::default()
            }),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read data file");
                T::default()
            }
        }
    }

    /// Write to a sibling `.tmp` file, fsync, then rename over the target.
    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl ProgressStore for JsonStore {
    fn load_mastered(&self) -> Vec<String> {
        self.load(MASTERED_FILE)
    }

    fn save_mastered(&self, bases: &[String]) -> Result<()> {
        self.save(MASTERED_FILE, &bases)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verbdrill")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = make_test_store();
        assert!(store.load_mastered().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let (_dir, store) = make_test_store();
        let bases = vec!["go".to_string(), "be".to_string(), "eat".to_string()];
        store.save_mastered(&bases).unwrap();
        assert_eq!(store.load_mastered(), bases);

        let raw = fs::read_to_string(store.file_path(MASTERED_FILE)).unwrap();
        assert_eq!(raw, r#"["go","be","eat"]"#);
    }

    #[test]
    fn test_empty_list_is_written_as_empty_array() {
        let (_dir, store) = make_test_store();
        store.save_mastered(&["go".to_string()]).unwrap();
        store.save_mastered(&[]).unwrap();
        let raw = fs::read_to_string(store.file_path(MASTERED_FILE)).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        let (_dir, store) = make_test_store();
        for payload in ["not json", "{\"go\": true}", "[1, 2]", "null", ""] {
            fs::write(store.file_path(MASTERED_FILE), payload).unwrap();
            assert!(store.load_mastered().is_empty(), "payload {payload:?}");
        }
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.save_mastered(&["go".to_string()]).unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let (dir, _store) = make_test_store();
        let bad_store = JsonStore {
            base_dir: dir.path().join("nonexistent_subdir"),
        };
        assert!(bad_store.save_mastered(&["go".to_string()]).is_err());
        assert!(bad_store.load_mastered().is_empty());
    }
}
