use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid seed data in {file}: {source}")]
    Seed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldbookError {
    pub fn not_found(kind: &'static str, id: u32) -> Self {
        FieldbookError::NotFound { kind, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FieldbookError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FieldbookError>;
