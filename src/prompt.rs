//! Prompt assembly for the generation request.

/// Build the instruction string sent to the model. Pure: identical inputs
/// produce identical output. The diff and commit history are interpolated
/// verbatim, with no escaping.
pub fn build_prompt(diff: &str, recent_commits: &str) -> String {
   format!(
      "Generate a git commit message following this structure:
1. First line: conventional commit format (type: concise description)
   (use types like feat, fix, docs, style, refactor, perf, test, chore, etc.)
2. Optional bullet points for context:
   - Keep second line blank
   - Be concise and clear
   - Avoid long explanations
   - No fluff or quotes

Recent commits from this repo (for style reference):
{recent_commits}

Here's the current diff:
{diff}
"
   )
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_prompt_contains_both_blocks_verbatim() {
      let diff = "diff --git a/x b/x\n+line one\n+line two";
      let commits = "feat: earlier change\n\nfix: another one";

      let prompt = build_prompt(diff, commits);
      assert!(prompt.contains(diff));
      assert!(prompt.contains(commits));
   }

   #[test]
   fn test_prompt_contains_instruction_text() {
      let prompt = build_prompt("", "");
      assert!(prompt.contains("conventional commit format"));
      assert!(prompt.contains("No fluff or quotes"));
      assert!(prompt.contains("Recent commits from this repo"));
      assert!(prompt.contains("Here's the current diff:"));
   }

   #[test]
   fn test_prompt_is_pure() {
      let diff = "+++ b/foo.rs\n+fn main() {}";
      let commits = "chore: bump version";
      assert_eq!(build_prompt(diff, commits), build_prompt(diff, commits));
   }

   #[test]
   fn test_prompt_no_escaping_of_diff_content() {
      // Braces and quotes in the diff pass through untouched
      let diff = "+let s = \"{not a placeholder}\";";
      let prompt = build_prompt(diff, "");
      assert!(prompt.contains(diff));
   }
}
