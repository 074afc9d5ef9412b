use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown pattern: '{name}'{}", suggestion_hint(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Unknown category: '{0}' (expected behavioral, creational or structural)")]
    UnknownCategory(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pattern_with_suggestion() {
        let err = CatalogError::unknown_pattern("obsrver", Some("observer".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown pattern: 'obsrver' (did you mean 'observer'?)"
        );
    }

    #[test]
    fn test_unknown_pattern_without_suggestion() {
        let err = CatalogError::unknown_pattern("zzz", None);
        assert_eq!(err.to_string(), "Unknown pattern: 'zzz'");
    }
}
