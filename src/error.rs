use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocNavError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Collection already defined: {0}")]
    DuplicateCollection(String),

    #[error("Document {collection}/{id} is missing a string 'title' field")]
    MissingTitle { collection: String, id: String },

    #[error("Document not found at given path: {suffix}")]
    NotFound { suffix: String },

    #[error("Empty title for {0}")]
    EmptyTitle(&'static str),

    #[error("Invalid field in document {collection}/{id}: {message}")]
    InvalidField {
        collection: String,
        id: String,
        message: String,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DocNavError>;
