use std::{fmt::Write as _, fs, io, path::Path, process::Command};

use crate::{
   config::GencommitConfig,
   error::{GencommitError, Result},
   style,
};

/// Captured result of an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
   pub stdout:  String,
   pub stderr:  String,
   pub success: bool,
}

/// Synchronous capability for invoking external binaries. Injectable so the
/// collector, commit step, and review loop can be exercised without a real
/// repository or editor.
pub trait CommandRunner {
   /// Run a command and capture its output
   fn capture(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;

   /// Run a command with inherited stdio (interactive programs such as the
   /// editor). Returns whether it exited successfully.
   fn interactive(&self, program: &str, args: &[&str]) -> io::Result<bool>;
}

/// Production runner: spawns processes in a fixed working directory
#[derive(Debug)]
pub struct SystemRunner {
   dir: String,
}

impl SystemRunner {
   pub fn new(dir: impl Into<String>) -> Self {
      Self { dir: dir.into() }
   }
}

impl CommandRunner for SystemRunner {
   fn capture(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
      let output = Command::new(program)
         .args(args)
         .current_dir(&self.dir)
         .output()?;

      Ok(CommandOutput {
         stdout:  String::from_utf8_lossy(&output.stdout).to_string(),
         stderr:  String::from_utf8_lossy(&output.stderr).to_string(),
         success: output.status.success(),
      })
   }

   fn interactive(&self, program: &str, args: &[&str]) -> io::Result<bool> {
      let status = Command::new(program)
         .args(args)
         .current_dir(&self.dir)
         .status()?;
      Ok(status.success())
   }
}

/// Run a git subcommand, surfacing stderr on failure
fn run_git(runner: &dyn CommandRunner, config: &GencommitConfig, args: &[&str]) -> Result<String> {
   config.debug_log(&format!("run: git {}", args.join(" ")));

   let output = runner
      .capture("git", args)
      .map_err(|e| GencommitError::GitError(format!("Failed to run git {}: {e}", args.join(" "))))?;

   if !output.success {
      return Err(GencommitError::GitError(format!(
         "git {} failed: {}",
         args.join(" "),
         output.stderr.trim()
      )));
   }

   Ok(output.stdout)
}

/// Return the staged diff (empty when nothing is staged)
pub fn staged_diff(runner: &dyn CommandRunner, config: &GencommitConfig) -> Result<String> {
   run_git(runner, config, &["diff", "--cached"])
}

/// List newly added staged file paths
pub fn new_staged_files(
   runner: &dyn CommandRunner,
   config: &GencommitConfig,
) -> Result<Vec<String>> {
   let out = run_git(runner, config, &[
      "diff",
      "--cached",
      "--name-only",
      "--diff-filter=A",
   ])?;
   Ok(out.split_whitespace().map(ToString::to_string).collect())
}

/// Recent commit messages for style context. A repository without commits has
/// none, so failure degrades to an empty block.
pub fn recent_commits(runner: &dyn CommandRunner, config: &GencommitConfig) -> String {
   let count = config.recent_commit_count;
   run_git(runner, config, &["log", &format!("-{count}"), "--pretty=format:%B"])
      .unwrap_or_default()
}

/// Append the full contents of newly added files so the model sees more than
/// a bare header. Each file gets a synthetic new-file diff header. Any read
/// failure aborts the run.
pub fn append_new_files(mut diff: String, new_files: &[String], dir: &str) -> Result<String> {
   for file in new_files {
      let content =
         fs::read_to_string(Path::new(dir).join(file)).map_err(|e| {
            GencommitError::FileReadError { path: file.clone(), source: e }
         })?;
      let _ = write!(diff, "\n--- /dev/null\n+++ b/{file}\n{content}\n");
   }
   Ok(diff)
}

/// Execute git commit with the given message, or print the intended
/// invocation in dry-run mode
pub fn commit(
   runner: &dyn CommandRunner,
   config: &GencommitConfig,
   message: &str,
   dry_run: bool,
) -> Result<()> {
   if dry_run {
      println!("\n{}", "=".repeat(60));
      println!("DRY RUN - Would execute:");
      println!("git commit -m \"{}\"", message.replace('\n', "\\n"));
      println!("{}", "=".repeat(60));
      return Ok(());
   }

   config.debug_log("run: git commit");
   let output = runner
      .capture("git", &["commit", "-m", message])
      .map_err(|e| GencommitError::GitError(format!("Failed to run git commit: {e}")))?;

   if !output.success {
      return Err(GencommitError::GitError(format!(
         "Git commit failed:\nstderr: {}\nstdout: {}",
         output.stderr.trim(),
         output.stdout.trim()
      )));
   }

   if !output.stdout.is_empty() {
      println!("\n{}", output.stdout.trim_end());
   }
   println!("{}", style::success(&format!("{} Changes committed successfully!", style::icons::SUCCESS)));

   Ok(())
}
