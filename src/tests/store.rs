#[cfg(test)]
mod tests {
    use std::{env, fs};

    use serde_json::json;
    use uuid::Uuid;

    use crate::store::{StateStore, json_store::JsonFileStore, memory_store::MemoryStore};

    fn temp_store_path() -> std::path::PathBuf {
        env::temp_dir().join(format!("quizdeck-store-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();

        assert!(store.get("missing").unwrap().is_none());

        store.set("theme", json!("dark")).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some(json!("dark")));
    }

    #[test]
    fn json_store_survives_a_reopen() {
        let path = temp_store_path();

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("quiz_questions", json!([{"id": 1}])).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("quiz_questions").unwrap(),
            Some(json!([{"id": 1}]))
        );

        fs::remove_file(&path).ok();
    }

    #[test]
    fn json_store_treats_malformed_content_as_absent() {
        let path = temp_store_path();
        fs::write(&path, "{ this is not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("quiz_questions").unwrap().is_none());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn json_store_overwrites_an_existing_key() {
        let path = temp_store_path();

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", json!("light")).unwrap();
        store.set("theme", json!("dark")).unwrap();

        assert_eq!(store.get("theme").unwrap(), Some(json!("dark")));

        fs::remove_file(&path).ok();
    }
}
