//! Authoritative-from-last-fetch view of the server's configuration.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::api::{ConfigApi, RequestError};
use crate::models::ConfigEntry;

/// Owns the loaded entries and the last load error.
///
/// The only writer is [`StateStore::reload`] (or its two halves, used when
/// several loads are in flight at once).
#[derive(Debug, Default)]
pub struct StateStore {
    entries: Vec<ConfigEntry>,
    load_error: Option<String>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigEntry> {
        self.entries
            .binary_search_by(|e| e.key.as_str().cmp(key))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Fetch everything and replace the snapshot.
    pub async fn reload<A: ConfigApi + ?Sized>(&mut self, api: &A) {
        self.begin_reload();
        let result = api.list_entries().await;
        self.finish_reload(result);
    }

    pub fn begin_reload(&mut self) {
        self.load_error = None;
    }

    /// Apply a load result. Failure keeps the previous entries visible.
    pub fn finish_reload(&mut self, result: Result<Vec<ConfigEntry>, RequestError>) {
        match result {
            Ok(entries) => {
                self.entries = normalize(entries);
                self.load_error = None;
                info!(count = self.entries.len(), "configs loaded");
            }
            Err(e) => {
                warn!(error = %e, "config load failed");
                self.load_error = Some(e.to_string());
            }
        }
    }
}

/// Sort by key; on a repeated key the first one in server order wins.
fn normalize(entries: Vec<ConfigEntry>) -> Vec<ConfigEntry> {
    let mut seen = HashSet::new();
    let mut out: Vec<ConfigEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.key.clone()) {
            out.push(entry);
        } else {
            warn!(key = %entry.key, "duplicate key in server response, ignored");
        }
    }
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Operation;
    use crate::models::Acknowledgement;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::Mutex;

    fn entry(key: &str, value: serde_json::Value) -> ConfigEntry {
        ConfigEntry {
            key: key.into(),
            value,
            description: None,
            updated_at: None,
        }
    }

    fn failure(detail: &str) -> RequestError {
        RequestError::Protocol {
            op: Operation::List,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    struct Scripted {
        responses: Mutex<Vec<Result<Vec<ConfigEntry>, RequestError>>>,
    }

    #[async_trait]
    impl ConfigApi for Scripted {
        async fn list_entries(&self) -> Result<Vec<ConfigEntry>, RequestError> {
            self.responses.lock().unwrap().remove(0)
        }
        async fn write_entry(&self, _: &str, _: &str, _: &str) -> Result<ConfigEntry, RequestError> {
            unreachable!()
        }
        async fn clear_cache(&self, _: &str) -> Result<Acknowledgement, RequestError> {
            unreachable!()
        }
    }

    #[test]
    fn successful_load_is_sorted_and_unique() {
        let mut store = StateStore::new();
        store.finish_reload(Ok(vec![
            entry("b", json!(1)),
            entry("a", json!(2)),
            entry("c", json!(3)),
            entry("a", json!(4)),
        ]));

        let keys: Vec<&str> = store.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(store.get("a").unwrap().value, json!(2));
        assert!(store.load_error().is_none());
    }

    #[test]
    fn sort_is_bytewise() {
        let mut store = StateStore::new();
        store.finish_reload(Ok(vec![
            entry("b", json!(1)),
            entry("B", json!(1)),
            entry("a/z", json!(1)),
            entry("a.z", json!(1)),
        ]));
        let keys: Vec<&str> = store.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["B", "a.z", "a/z", "b"]);
    }

    #[test]
    fn failed_load_keeps_stale_entries() {
        let mut store = StateStore::new();
        store.finish_reload(Ok(vec![entry("a", json!(1))]));

        store.begin_reload();
        store.finish_reload(Err(failure("db unreachable")));

        assert_eq!(store.entries().len(), 1);
        assert_eq!(
            store.load_error(),
            Some("Failed to fetch configs: db unreachable")
        );
    }

    #[test]
    fn begin_reload_clears_previous_error() {
        let mut store = StateStore::new();
        store.finish_reload(Err(failure("boom")));
        assert!(store.load_error().is_some());

        store.begin_reload();
        assert!(store.load_error().is_none());
    }

    #[tokio::test]
    async fn reload_round_trip() {
        let api = Scripted {
            responses: Mutex::new(vec![
                Err(failure("down")),
                Ok(vec![entry("z", json!(null)), entry("m", json!("x"))]),
            ]),
        };
        let mut store = StateStore::new();

        store.reload(&api).await;
        assert!(store.entries().is_empty());
        assert!(store.load_error().unwrap().contains("down"));

        store.reload(&api).await;
        assert!(store.load_error().is_none());
        assert_eq!(store.entries()[0].key, "m");
        assert_eq!(store.entries()[1].key, "z");
    }
}
