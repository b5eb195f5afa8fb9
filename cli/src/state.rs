//! State file handling on the host side
//!
//! The widget never touches the filesystem; the host reads the saved blob
//! before `deserialize` and writes `serialize()` back after each change.

use links_widget::error::Result;
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the saved widget state; a missing or blank file is an empty object
pub fn load_state(path: &Path) -> Result<Value> {
    if !path.exists() {
        debug!("No state file at {:?}, starting empty", path);
        return Ok(Value::Object(Map::new()));
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_str(&contents)?)
}

/// Write the widget state atomically next to its final location
pub fn save_state(path: &Path, state: &Value, pretty: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let text = if pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!("Saved state to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use links_widget::error::LinksError;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_object() {
        let dir = tempdir().unwrap();
        let state = load_state(&dir.path().join("absent.json")).unwrap();
        assert_eq!(state, json!({}));
    }

    #[test]
    fn test_blank_file_is_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(load_state(&path).unwrap(), json!({}));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("links.json");
        let state = json!({ "bookmarks": [{ "title": "GitHub", "url": "https://github.com" }] });

        save_state(&path, &state, true).unwrap();

        assert_eq!(load_state(&path).unwrap(), state);
    }

    #[test]
    fn test_compact_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");

        save_state(&path, &json!({ "bookmarks": [] }), false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"bookmarks\":[]}\n");
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_state(&path), Err(LinksError::Json(_))));
    }
}
