use crate::domain::model::SessionEntry;
use crate::domain::ports::SessionStore;
use std::collections::HashMap;

/// Process-lifetime session map keyed by user id. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: HashMap<String, SessionEntry>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn set_home_airport(&mut self, user_id: &str, code: &str) {
        let code = code.to_uppercase();
        tracing::info!("Remembering home airport {} for user {}", code, user_id);
        self.entries.insert(
            user_id.to_string(),
            SessionEntry {
                home_airport: Some(code),
            },
        );
    }

    fn get_home_airport(&self, user_id: &str) -> Option<String> {
        self.entries
            .get(user_id)
            .and_then(|entry| entry.home_airport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_uppercases() {
        let mut store = InMemorySessionStore::new();
        store.set_home_airport("u1", "den");
        assert_eq!(store.get_home_airport("u1").as_deref(), Some("DEN"));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut store = InMemorySessionStore::new();
        store.set_home_airport("u1", "DEN");
        store.set_home_airport("u1", "slc");
        assert_eq!(store.get_home_airport("u1").as_deref(), Some("SLC"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_user_is_absent() {
        let mut store = InMemorySessionStore::new();
        assert!(store.is_empty());
        store.set_home_airport("u1", "DEN");
        assert_eq!(store.get_home_airport("u2"), None);
    }
}
