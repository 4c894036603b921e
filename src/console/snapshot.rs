use crate::core::domain::error::{GridError, GridResult};
use serde::Serialize;

/// The last thing a panel showed, kept only to skip identical redraws.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    last: Option<String>,
}

impl Snapshot {
    /// Records `data` and returns true if it differs from what was last
    /// rendered.
    pub fn update<T>(&mut self, data: &T) -> GridResult<bool>
    where
        T: Serialize + ?Sized,
    {
        let serialized = serde_json::to_string(data)
            .map_err(|e| GridError::Payload(format!("Failed to serialize snapshot: {}", e)))?;
        Ok(self.replace(serialized))
    }

    /// Records a failure placeholder; repeating the same failure is not a
    /// change, and the next successful payload always is.
    pub fn update_failure(&mut self, reason: &str) -> bool {
        // JSON never starts with '!', so this cannot collide with a payload
        self.replace(format!("!{}", reason))
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    fn replace(&mut self, next: String) -> bool {
        if self.last.as_deref() == Some(next.as_str()) {
            return false;
        }
        self.last = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_payloads_are_not_changes() {
        let mut snapshot = Snapshot::default();
        let data = vec!["a", "b"];
        assert!(snapshot.update(&data).unwrap());
        assert!(!snapshot.update(&data).unwrap());
        assert!(snapshot.update(&vec!["b", "a"]).unwrap());
        assert_eq!(snapshot.last(), Some(r#"["b","a"]"#));
    }

    #[test]
    fn test_failure_then_success_redraws() {
        let mut snapshot = Snapshot::default();
        let data: Vec<u8> = Vec::new();
        assert!(snapshot.update(&data).unwrap());
        assert!(snapshot.update_failure("timeout"));
        assert!(!snapshot.update_failure("timeout"));
        assert!(snapshot.update(&data).unwrap());
    }
}
