#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available: {0}")]
    Unavailable(String),
    #[error("Failed to read `{key}` from storage: {message}")]
    Read { key: String, message: String },
    #[error("Failed to write `{key}` to storage: {message}")]
    Write { key: String, message: String },
}

#[derive(thiserror::Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to persist preference `{key}`")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("Failed to serialize preference `{key}`")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_unavailable_storage_message() {
        assert_eq!(
            StorageError::Unavailable("No local storage available".to_string()).to_string(),
            "Storage is not available: No local storage available"
        );
    }
}
