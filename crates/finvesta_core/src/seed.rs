//! Bundled seed dataset.
//!
//! The seed file is an optional JSON collection consulted only when the
//! durable slot is empty or unreadable at startup. It is never written.

use std::path::Path;

use log::debug;

use crate::model::record::RecordCollection;

/// Reads a seed collection from `path`.
///
/// Absence or unparseable content yields `None`; neither is an error at
/// this layer, the store simply starts empty.
pub fn load_seed_file(path: &Path) -> Option<RecordCollection> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!("event=seed_load status=absent path={} error={err}", path.display());
            return None;
        }
    };

    match serde_json::from_str::<RecordCollection>(&text) {
        Ok(collection) => {
            debug!(
                "event=seed_load status=ok path={} records={}",
                path.display(),
                collection.len()
            );
            Some(collection)
        }
        Err(err) => {
            debug!(
                "event=seed_load status=unparseable path={} error={err}",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::load_seed_file;

    #[test]
    fn missing_seed_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_seed_file(&dir.path().join("seed.json")).is_none());
    }

    #[test]
    fn unparseable_seed_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "not json at all {{{").unwrap();
        assert!(load_seed_file(&path).is_none());
    }

    #[test]
    fn valid_seed_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Asha","amount":5000,"date":"2026-08-01"}]"#,
        )
        .unwrap();

        let collection = load_seed_file(&path).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.as_slice()[0].name, "Asha");
    }
}
