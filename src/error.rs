use thiserror::Error;

#[derive(Debug, Error)]
pub enum GencommitError {
   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("Error reading file {path}: {source}")]
   FileReadError {
      path:   String,
      #[source]
      source: std::io::Error,
   },

   #[error("No staged changes found. Use 'git add' first")]
   NoStagedChanges,

   #[error("ANTHROPIC_API_KEY not set. Export it or use --mock for offline testing")]
   MissingApiKey,

   #[error("API request failed (HTTP {status}): {body}")]
   ApiError { status: u16, body: String },

   #[error("Network/API error: {0}")]
   HttpError(#[from] reqwest::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("Error parsing API response: {0}")]
   InvalidResponse(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("Config error: {0}")]
   ConfigError(String),
}

pub type Result<T> = std::result::Result<T, GencommitError>;
