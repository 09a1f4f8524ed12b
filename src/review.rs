//! Interactive accept/edit/reject loop for the suggested message.
//!
//! The loop is the only path to `git commit`: a message is committed after
//! an explicit accept, or after an edit (which accepts the edited text
//! verbatim). Reject and end-of-input terminate without touching the
//! repository.

use std::io::{self, BufRead, Write};

use crate::{
   config::GencommitConfig,
   editor,
   error::Result,
   git::{self, CommandRunner},
   style,
};

/// What the user chose to do with the suggested message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
   Accept,
   Edit,
   Reject,
}

impl ReviewAction {
   /// Parse a user token, case-insensitively. `None` re-prompts.
   pub fn parse(input: &str) -> Option<Self> {
      match input.trim().to_lowercase().as_str() {
         "a" | "accept" => Some(Self::Accept),
         "e" | "edit" => Some(Self::Edit),
         "r" | "reject" => Some(Self::Reject),
         _ => None,
      }
   }
}

/// Terminal state of the review loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
   Committed,
   DryRun,
   Rejected,
}

fn present(message: &str) {
   println!("\nSuggested commit message:");
   println!("{}", style::separator(40));
   println!("{message}");
   println!("{}", style::separator(40));
}

/// Present the message and loop on accept/edit/reject until a terminal
/// state. Unrecognized input re-prompts; end-of-input counts as reject so a
/// closed stdin can never commit.
pub fn run(
   runner: &dyn CommandRunner,
   input: &mut dyn BufRead,
   message: &str,
   config: &GencommitConfig,
   dry_run: bool,
) -> Result<ReviewOutcome> {
   present(message);

   loop {
      print!("\nDo you want to (a)ccept, (e)dit, or (r)eject? ");
      io::stdout().flush()?;

      let mut line = String::new();
      if input.read_line(&mut line)? == 0 {
         println!("\n{}", style::warning("No input received. Nothing committed."));
         return Ok(ReviewOutcome::Rejected);
      }

      match ReviewAction::parse(&line) {
         Some(ReviewAction::Accept) => {
            git::commit(runner, config, message, dry_run)?;
            return Ok(if dry_run { ReviewOutcome::DryRun } else { ReviewOutcome::Committed });
         },
         Some(ReviewAction::Edit) => {
            let edited = editor::open_editor(runner, message, config)?;
            git::commit(runner, config, &edited, dry_run)?;
            return Ok(if dry_run { ReviewOutcome::DryRun } else { ReviewOutcome::Committed });
         },
         Some(ReviewAction::Reject) => {
            println!(
               "{}",
               style::info("Commit message rejected. No changes committed. Exiting cleanly.")
            );
            return Ok(ReviewOutcome::Rejected);
         },
         None => println!("Invalid choice. Please enter a, e, or r."),
      }
   }
}
