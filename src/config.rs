use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GencommitError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GencommitConfig {
   /// Base URL of the Anthropic API
   pub api_base_url: String,

   /// API key, taken from the `ANTHROPIC_API_KEY` environment variable only
   /// (never stored in the config file)
   #[serde(skip)]
   pub api_key: Option<String>,

   /// Fallback model id when discovery finds nothing usable
   pub default_model: String,

   /// Response size cap for the generation call
   pub max_tokens: u32,

   /// HTTP request timeout for the generation call, in seconds
   pub request_timeout_secs: u64,

   /// HTTP connection timeout in seconds
   pub connect_timeout_secs: u64,

   /// HTTP request timeout for the model listing call, in seconds
   pub models_timeout_secs: u64,

   /// How many recent commit messages to include as style context
   pub recent_commit_count: usize,

   /// Editor binary used when $EDITOR is unset
   pub editor_fallback: String,

   /// Verbose diagnostics on stderr (CLI flag, not a config file key)
   #[serde(skip)]
   pub debug: bool,
}

impl Default for GencommitConfig {
   fn default() -> Self {
      Self {
         api_base_url:         "https://api.anthropic.com".to_string(),
         api_key:              None,
         default_model:        "claude-sonnet-4-5-20250929".to_string(),
         max_tokens:           300,
         request_timeout_secs: 30,
         connect_timeout_secs: 10,
         models_timeout_secs:  10,
         recent_commit_count:  3,
         editor_fallback:      "vim".to_string(),
         debug:                false,
      }
   }
}

impl GencommitConfig {
   /// Load config from the default location
   /// (~/.config/gencommit/config.toml). Falls back to `Default` if the file
   /// doesn't exist or no home directory can be determined.
   /// `GENCOMMIT_CONFIG` overrides the path; `ANTHROPIC_API_KEY` supplies the
   /// key.
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("GENCOMMIT_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_else(|_| PathBuf::new())
      };

      let mut config = if config_path.exists() {
         Self::from_file(&config_path)?
      } else {
         Self::default()
      };

      Self::apply_env_overrides(&mut config);
      Ok(config)
   }

   /// Load config from a specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path)
         .map_err(|e| GencommitError::ConfigError(format!("Failed to read config: {e}")))?;
      let mut config = Self::from_toml_str(&contents)?;

      Self::apply_env_overrides(&mut config);
      Ok(config)
   }

   fn from_toml_str(contents: &str) -> Result<Self> {
      toml::from_str(contents)
         .map_err(|e| GencommitError::ConfigError(format!("Failed to parse config: {e}")))
   }

   /// Apply environment variable overrides to config
   fn apply_env_overrides(config: &mut Self) {
      if let Ok(api_key) = std::env::var("ANTHROPIC_API_KEY")
         && !api_key.is_empty()
      {
         config.api_key = Some(api_key);
      }
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      if let Ok(home) = std::env::var("HOME") {
         return Ok(PathBuf::from(home).join(".config/gencommit/config.toml"));
      }

      if let Ok(home) = std::env::var("USERPROFILE") {
         return Ok(PathBuf::from(home).join(".config/gencommit/config.toml"));
      }

      Err(GencommitError::ConfigError(
         "No home directory found (tried HOME and USERPROFILE)".to_string(),
      ))
   }

   /// Emit a diagnostic on stderr when --debug is set
   pub fn debug_log(&self, msg: &str) {
      if self.debug {
         eprintln!("DEBUG: {msg}");
      }
   }
}
