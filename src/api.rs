//! Live model client for the Anthropic HTTP API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
   config::GencommitConfig,
   error::{GencommitError, Result},
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct Message {
   role:    String,
   content: String,
}

#[derive(Debug, Serialize)]
struct ApiRequest {
   model:      String,
   max_tokens: u32,
   messages:   Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
   #[serde(default)]
   text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
   #[serde(default)]
   content: Vec<ContentBlock>,
}

/// One entry of the model listing. The identifier has been exposed under
/// different field names over time.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
   #[serde(default)]
   pub id:    Option<String>,
   #[serde(default)]
   pub name:  Option<String>,
   #[serde(default)]
   pub model: Option<String>,
}

impl ModelEntry {
   pub fn identifier(&self) -> Option<&str> {
      self
         .id
         .as_deref()
         .or(self.name.as_deref())
         .or(self.model.as_deref())
   }
}

/// The listing payload carries the collection under either key
#[derive(Debug, Deserialize)]
struct ModelsResponse {
   #[serde(default)]
   models: Vec<ModelEntry>,
   #[serde(default)]
   data:   Vec<ModelEntry>,
}

impl ModelsResponse {
   fn into_entries(self) -> Vec<ModelEntry> {
      if self.models.is_empty() { self.data } else { self.models }
   }
}

/// Build HTTP client with timeouts from config
fn build_client(
   timeout_secs: u64,
   config: &GencommitConfig,
) -> Result<reqwest::blocking::Client> {
   reqwest::blocking::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
      .build()
      .map_err(GencommitError::HttpError)
}

/// Fetch the models available to this key. Non-fatal: every failure yields an
/// empty list and the caller falls back to the default model.
pub fn list_models(config: &GencommitConfig, api_key: &str) -> Vec<ModelEntry> {
   let client = match build_client(config.models_timeout_secs, config) {
      Ok(client) => client,
      Err(e) => {
         config.debug_log(&format!("cannot build HTTP client: {e}"));
         return Vec::new();
      },
   };

   let response = client
      .get(format!("{}/v1/models", config.api_base_url))
      .header("x-api-key", api_key)
      .header("anthropic-version", ANTHROPIC_VERSION)
      .send();

   let response = match response {
      Ok(response) => response,
      Err(e) => {
         config.debug_log(&format!("error fetching models: {e}"));
         return Vec::new();
      },
   };

   if !response.status().is_success() {
      config.debug_log(&format!("/v1/models returned {}", response.status()));
      return Vec::new();
   }

   match response.json::<ModelsResponse>() {
      Ok(payload) => payload.into_entries(),
      Err(e) => {
         config.debug_log(&format!("error parsing model listing: {e}"));
         Vec::new()
      },
   }
}

/// Pick a preferred model from the listing: sonnet, then opus, then haiku,
/// each restricted to claude-branded ids; any claude id as a last resort.
pub fn pick_preferred_model(models: &[ModelEntry]) -> Option<String> {
   let names: Vec<&str> = models.iter().filter_map(ModelEntry::identifier).collect();

   for pref in ["sonnet", "opus", "haiku"] {
      for name in &names {
         let lower = name.to_lowercase();
         if lower.contains(pref) && lower.contains("claude") {
            return Some((*name).to_string());
         }
      }
   }

   names
      .iter()
      .find(|name| name.to_lowercase().contains("claude"))
      .map(|name| (*name).to_string())
}

/// Resolve the model id to use: explicit choice, else discovery, else the
/// configured default.
pub fn select_model(
   explicit: Option<&str>,
   config: &GencommitConfig,
   api_key: &str,
) -> String {
   if let Some(model) = explicit {
      return model.to_string();
   }

   let models = list_models(config, api_key);
   pick_preferred_model(&models).unwrap_or_else(|| config.default_model.clone())
}

/// Send the prompt as a single user message and return the completion text.
/// Any transport error, non-success status, or missing content block is
/// fatal; there are no retries.
pub fn generate_message(
   prompt: &str,
   model: &str,
   config: &GencommitConfig,
   api_key: &str,
) -> Result<String> {
   let client = build_client(config.request_timeout_secs, config)?;

   let request = ApiRequest {
      model:      model.to_string(),
      max_tokens: config.max_tokens,
      messages:   vec![Message {
         role:    "user".to_string(),
         content: prompt.to_string(),
      }],
   };

   config.debug_log(&format!("sending request to Claude API with model={model}"));

   let response = client
      .post(format!("{}/v1/messages", config.api_base_url))
      .header("x-api-key", api_key)
      .header("anthropic-version", ANTHROPIC_VERSION)
      .header("content-type", "application/json")
      .json(&request)
      .send()
      .map_err(GencommitError::HttpError)?;

   let status = response.status();
   if !status.is_success() {
      let body = response
         .text()
         .unwrap_or_else(|_| "Unknown error".to_string());
      return Err(GencommitError::ApiError { status: status.as_u16(), body });
   }

   let api_response: ApiResponse = response.json().map_err(GencommitError::HttpError)?;

   let block = api_response.content.first().ok_or_else(|| {
      GencommitError::InvalidResponse("no content blocks in response".to_string())
   })?;

   Ok(block.text.trim().to_string())
}

#[cfg(test)]
mod tests {
   use super::*;

   fn entry(id: &str) -> ModelEntry {
      ModelEntry { id: Some(id.to_string()), name: None, model: None }
   }

   // ========== Model Picker Tests ==========

   #[test]
   fn test_pick_prefers_sonnet_over_listing_order() {
      let models = vec![
         entry("claude-haiku-4-5"),
         entry("claude-opus-4-5"),
         entry("claude-sonnet-4-5"),
      ];
      assert_eq!(pick_preferred_model(&models).as_deref(), Some("claude-sonnet-4-5"));
   }

   #[test]
   fn test_pick_falls_back_to_opus_then_haiku() {
      let models = vec![entry("claude-haiku-4-5"), entry("claude-opus-4-5")];
      assert_eq!(pick_preferred_model(&models).as_deref(), Some("claude-opus-4-5"));

      let models = vec![entry("claude-haiku-4-5")];
      assert_eq!(pick_preferred_model(&models).as_deref(), Some("claude-haiku-4-5"));
   }

   #[test]
   fn test_pick_requires_claude_brand_for_tier_match() {
      // "sonnet" without "claude" anywhere must not win the tier pass
      let models = vec![entry("sonnet-lookalike"), entry("claude-3-5-whatever")];
      assert_eq!(pick_preferred_model(&models).as_deref(), Some("claude-3-5-whatever"));
   }

   #[test]
   fn test_pick_is_case_insensitive() {
      let models = vec![entry("Claude-Sonnet-4-5")];
      assert_eq!(pick_preferred_model(&models).as_deref(), Some("Claude-Sonnet-4-5"));
   }

   #[test]
   fn test_pick_returns_none_without_claude_models() {
      let models = vec![entry("gpt-5"), entry("gemini-2.5-pro")];
      assert_eq!(pick_preferred_model(&models), None);
      assert_eq!(pick_preferred_model(&[]), None);
   }

   // ========== Model Entry Tests ==========

   #[test]
   fn test_identifier_field_fallback_order() {
      let by_id = ModelEntry {
         id:    Some("id-1".to_string()),
         name:  Some("name-1".to_string()),
         model: Some("model-1".to_string()),
      };
      assert_eq!(by_id.identifier(), Some("id-1"));

      let by_name = ModelEntry {
         id:    None,
         name:  Some("name-1".to_string()),
         model: Some("model-1".to_string()),
      };
      assert_eq!(by_name.identifier(), Some("name-1"));

      let by_model = ModelEntry { id: None, name: None, model: Some("model-1".to_string()) };
      assert_eq!(by_model.identifier(), Some("model-1"));

      let empty = ModelEntry { id: None, name: None, model: None };
      assert_eq!(empty.identifier(), None);
   }

   // ========== Listing Payload Tests ==========

   #[test]
   fn test_models_response_under_models_key() {
      let payload: ModelsResponse =
         serde_json::from_str(r#"{"models": [{"id": "claude-sonnet-4-5"}]}"#).unwrap();
      let entries = payload.into_entries();
      assert_eq!(entries.len(), 1);
      assert_eq!(entries[0].identifier(), Some("claude-sonnet-4-5"));
   }

   #[test]
   fn test_models_response_under_data_key() {
      let payload: ModelsResponse =
         serde_json::from_str(r#"{"data": [{"id": "claude-opus-4-5"}]}"#).unwrap();
      let entries = payload.into_entries();
      assert_eq!(entries.len(), 1);
      assert_eq!(entries[0].identifier(), Some("claude-opus-4-5"));
   }

   #[test]
   fn test_models_response_empty_payload() {
      let payload: ModelsResponse = serde_json::from_str("{}").unwrap();
      assert!(payload.into_entries().is_empty());
   }

   #[test]
   fn test_select_model_explicit_wins() {
      let config = GencommitConfig::default();
      assert_eq!(
         select_model(Some("claude-opus-4-5"), &config, "unused-key"),
         "claude-opus-4-5"
      );
   }

   // ========== Response Shape Tests ==========

   #[test]
   fn test_api_response_first_text_block() {
      let response: ApiResponse = serde_json::from_str(
         r#"{"content": [{"type": "text", "text": "feat: add thing"}, {"type": "text", "text": "ignored"}]}"#,
      )
      .unwrap();
      assert_eq!(response.content.first().map(|b| b.text.as_str()), Some("feat: add thing"));
   }

   #[test]
   fn test_api_response_empty_content() {
      let response: ApiResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
      assert!(response.content.is_empty());
   }
}
