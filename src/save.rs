//! High-score persistence: a single-field JSON file.
//!
//! All failures degrade silently; a missing or garbled file reads as zero
//! and a failed write is dropped on the floor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    high_score: u32,
}

pub fn load_high_score(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str::<SaveData>(&text)
            .unwrap_or_default()
            .high_score,
        Err(_) => 0,
    }
}

pub fn write_high_score(path: &Path, high_score: u32) {
    if let Ok(text) = serde_json::to_string_pretty(&SaveData { high_score }) {
        let _ = fs::write(path, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("neon_snake_save_{name}.json"))
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round_trip");
        write_high_score(&path, 1230);
        assert_eq!(load_high_score(&path), 1230);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        assert_eq!(load_high_score(&path), 0);
    }

    #[test]
    fn malformed_file_reads_as_zero() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_high_score(&path), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn rewrite_overwrites_previous_value() {
        let path = temp_path("rewrite");
        write_high_score(&path, 10);
        write_high_score(&path, 250);
        assert_eq!(load_high_score(&path), 250);
        let _ = fs::remove_file(&path);
    }
}
