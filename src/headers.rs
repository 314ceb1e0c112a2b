//! Mutable header store applied to every outgoing call

use std::collections::HashMap;

const CONTENT_TYPE: &str = "Content-Type";
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Instance-scoped mapping of HTTP header name to value.
///
/// Created with a single default entry (`Content-Type: application/json`)
/// and mutated in place between calls. Each outgoing call copies the current
/// contents via [`HeaderStore::snapshot`] when it begins building its
/// request, so a mutation never affects a request that is already in flight.
#[derive(Debug, Clone)]
pub struct HeaderStore {
    headers: HashMap<String, String>,
}

impl Default for HeaderStore {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), DEFAULT_CONTENT_TYPE.to_string());
        Self { headers }
    }
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`; a `None` value removes the entry
    /// (no-op if absent). Never fails.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match value {
            Some(value) => {
                self.headers.insert(name, value);
            }
            None => {
                self.headers.remove(&name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Copies the current contents for one outgoing call.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.headers.clone()
    }
}
