//! Normalization and cleanup of model output.

use unicode_normalization::UnicodeNormalization;

/// Normalize AI-style typography to plain ASCII: smart quotes, dashes,
/// ellipsis, non-breaking and zero-width characters.
pub fn normalize_unicode(text: &str) -> String {
   let normalized: String = text.nfkd().collect();

   normalized
      // Smart quotes to straight quotes
      .replace(['\u{2018}', '\u{2019}', '\u{201A}'], "'")
      .replace(['\u{201C}', '\u{201D}', '\u{201E}'], "\"")
      // Dashes and hyphens
      .replace(['\u{2010}', '\u{2011}', '\u{2012}'], "-")
      .replace(['\u{2013}', '\u{2014}', '\u{2015}'], "--")
      .replace('\u{2212}', "-")
      // Ellipsis
      .replace('\u{2026}', "...")
      // Special spaces to regular space
      .replace(['\u{00A0}', '\u{2009}', '\u{202F}', '\u{3000}'], " ")
      // Zero-width characters (remove)
      .replace(['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'], "")
}

/// Clean up model output: normalize typography, remove every code-fence
/// marker, then strip surrounding whitespace and quote characters.
///
/// Idempotent: `clean_commit_message(clean_commit_message(x))` equals
/// `clean_commit_message(x)`. The result never starts or ends with a quote
/// character and contains no ``` marker.
pub fn clean_commit_message(msg: &str) -> String {
   let normalized = normalize_unicode(msg);
   let without_fences = normalized.replace("```", "");

   without_fences
      .trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'')
      .to_string()
}

#[cfg(test)]
mod tests {
   use super::*;

   // ========== Cleaning Tests ==========

   #[test]
   fn test_clean_trims_whitespace() {
      assert_eq!(clean_commit_message("  feat: add thing  \n"), "feat: add thing");
   }

   #[test]
   fn test_clean_removes_code_fences() {
      assert_eq!(clean_commit_message("```\nfeat: add thing\n```"), "feat: add thing");
      assert!(!clean_commit_message("a ``` b ``` c").contains("```"));
   }

   #[test]
   fn test_clean_strips_surrounding_quotes() {
      assert_eq!(clean_commit_message("\"feat: add thing\""), "feat: add thing");
      assert_eq!(clean_commit_message("'feat: add thing'"), "feat: add thing");
   }

   #[test]
   fn test_clean_strips_nested_quotes_and_spaces() {
      assert_eq!(clean_commit_message("\"  'feat: add thing'  \""), "feat: add thing");
   }

   #[test]
   fn test_clean_preserves_interior_quotes() {
      assert_eq!(
         clean_commit_message("fix: handle \"quoted\" paths"),
         "fix: handle \"quoted\" paths"
      );
   }

   #[test]
   fn test_clean_preserves_multiline_body() {
      let msg = "feat: add thing\n\n- detail one\n- detail two";
      assert_eq!(clean_commit_message(msg), msg);
   }

   // ========== Idempotence Tests ==========

   #[test]
   fn test_clean_is_idempotent() {
      let samples = [
         "  feat: x  ",
         "```\nfeat: x\n```",
         "\"'feat: x'\"",
         "\u{201C}feat: curly quoted\u{201D}",
         "plain message",
         "",
         "'''",
         "``` ```",
      ];
      for sample in samples {
         let once = clean_commit_message(sample);
         let twice = clean_commit_message(&once);
         assert_eq!(once, twice, "not idempotent for {sample:?}");
      }
   }

   #[test]
   fn test_clean_never_leaves_boundary_quotes_or_fences() {
      let samples = ["\"\"msg\"\"", "'\"msg\"'", "``` \"msg\" ```", "  ' msg ' "];
      for sample in samples {
         let cleaned = clean_commit_message(sample);
         assert!(!cleaned.starts_with(['"', '\'']), "leading quote in {cleaned:?}");
         assert!(!cleaned.ends_with(['"', '\'']), "trailing quote in {cleaned:?}");
         assert!(!cleaned.contains("```"), "fence left in {cleaned:?}");
      }
   }

   // ========== Unicode Tests ==========

   #[test]
   fn test_normalize_smart_quotes() {
      assert_eq!(normalize_unicode("\u{2018}hi\u{2019}"), "'hi'");
      assert_eq!(normalize_unicode("\u{201C}hi\u{201D}"), "\"hi\"");
   }

   #[test]
   fn test_normalize_dashes_and_ellipsis() {
      assert_eq!(normalize_unicode("a\u{2014}b"), "a--b");
      assert_eq!(normalize_unicode("wait\u{2026}"), "wait...");
   }

   #[test]
   fn test_normalize_removes_zero_width() {
      assert_eq!(normalize_unicode("a\u{200B}b\u{FEFF}"), "ab");
   }

   #[test]
   fn test_clean_strips_normalized_smart_quotes_at_boundaries() {
      assert_eq!(
         clean_commit_message("\u{201C}feat: add thing\u{201D}"),
         "feat: add thing"
      );
   }
}
