use thiserror::Error;

#[derive(Error, Debug)]
pub enum WakeyError {
    /// Carries the display (uppercase) title.
    #[error("No entry for {title}.")]
    NotFound { title: String },

    /// Carries the title exactly as the caller supplied it.
    #[error("Created no entry for {title}.")]
    WriteFailed {
        title: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] wakey_pages::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, WakeyError>;
