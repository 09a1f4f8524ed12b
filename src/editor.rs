//! External editor round-trip for the edit path of the review loop.

use std::{env, fs, io::Write};

use crate::{config::GencommitConfig, error::Result, git::CommandRunner, style};

/// Open the user's editor on a temp file seeded with the message and return
/// the edited text. A missing editor binary keeps the original message. The
/// temp file is removed best-effort when it goes out of scope.
pub fn open_editor(
   runner: &dyn CommandRunner,
   initial: &str,
   config: &GencommitConfig,
) -> Result<String> {
   let editor = env::var("EDITOR").unwrap_or_else(|_| config.editor_fallback.clone());

   let mut tmp = tempfile::Builder::new()
      .prefix("gencommit-")
      .suffix(".txt")
      .tempfile()?;
   tmp.write_all(initial.as_bytes())?;
   tmp.flush()?;

   config.debug_log(&format!("opening editor: {editor}"));

   let path = tmp.path().to_string_lossy().to_string();
   if runner.interactive(&editor, &[&path]).is_err() {
      println!(
         "{}",
         style::warning(&format!("Editor '{editor}' not found - using original message."))
      );
      return Ok(initial.to_string());
   }

   Ok(fs::read_to_string(tmp.path())?)
}
