//! Offline mock backend for testing without credentials or connectivity.

/// Derive a plausible commit message from the prompt text alone. No network
/// call; identical prompts always yield identical output.
///
/// Signals are checked in priority order across the whole prompt, so a
/// new-file marker in the diff wins even though the instruction header
/// itself contains the word "fix".
pub fn generate_message(prompt: &str) -> String {
   let summary = summary_for(prompt);

   let mut bullets: Vec<&str> = Vec::new();
   if prompt.to_uppercase().contains("TODO") {
      bullets.push("- Add TODO items");
   }
   if prompt.contains("print(") {
      bullets.push("- Adjust debugging prints");
   }
   if bullets.is_empty() {
      bullets.push("- See diff for details");
   }

   format!("{summary}\n\n{}", bullets.join("\n"))
}

fn summary_for(prompt: &str) -> String {
   for line in prompt.lines() {
      if let Some(path) = line.trim().strip_prefix("+++ b/") {
         return format!("feat: update {path}");
      }
   }

   for line in prompt.lines() {
      let trimmed = line.trim();
      if trimmed.contains("def ") && trimmed.contains('(') {
         return "feat: add/modify function".to_string();
      }
   }

   for line in prompt.lines() {
      if line.trim().to_lowercase().contains("fix") {
         return "fix: address bug found in diff".to_string();
      }
   }

   "chore: update files".to_string()
}
