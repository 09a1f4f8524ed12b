use std::io;

use clap::Parser;
use gencommit::*;
use git::SystemRunner;
use review::ReviewOutcome;
use types::Args;

/// Load config from args or the default location, then apply CLI flags
fn load_config_from_args(args: &Args) -> Result<GencommitConfig> {
   let mut config = if let Some(ref config_path) = args.config {
      GencommitConfig::from_file(config_path)?
   } else {
      GencommitConfig::load()?
   };

   config.debug = args.debug;
   Ok(config)
}

/// Whether to use the offline mock backend
fn use_mock(args: &Args) -> bool {
   args.mock || std::env::var("GENCOMMIT_MOCK").is_ok_and(|v| v == "1")
}

/// Main pipeline: collect diff -> build prompt -> generate -> clean -> review
fn run(args: &Args) -> Result<ReviewOutcome> {
   let config = load_config_from_args(args)?;
   let mock = use_mock(args);

   if !mock && config.api_key.is_none() {
      return Err(GencommitError::MissingApiKey);
   }

   let runner = SystemRunner::new(&args.dir);

   let diff = git::staged_diff(&runner, &config)?;
   let new_files = git::new_staged_files(&runner, &config)?;

   if diff.trim().is_empty() && new_files.is_empty() {
      return Err(GencommitError::NoStagedChanges);
   }

   let diff = git::append_new_files(diff, &new_files, &args.dir)?;
   let recent = git::recent_commits(&runner, &config);
   let prompt_text = prompt::build_prompt(&diff, &recent);

   let raw = if mock {
      config.debug_log("using mock backend (no network call)");
      mock::generate_message(&prompt_text)
   } else {
      let api_key = config.api_key.clone().ok_or(GencommitError::MissingApiKey)?;
      let model = api::select_model(args.model.as_deref(), &config, &api_key);
      config.debug_log(&format!("using model: {model}"));
      api::generate_message(&prompt_text, &model, &config, &api_key)?
   };

   let message = normalization::clean_commit_message(&raw);

   let stdin = io::stdin();
   review::run(&runner, &mut stdin.lock(), &message, &config, args.dry_run)
}

fn main() {
   dotenvy::dotenv().ok();
   let args = Args::parse();

   if let Err(e) = run(&args) {
      eprintln!("{} {e}", style::error(style::icons::ERROR));
      std::process::exit(1);
   }
}

#[cfg(test)]
mod tests {
   use std::io::Write as _;

   use super::*;

   #[test]
   fn test_load_config_from_explicit_file_sets_debug() {
      let mut file = tempfile::NamedTempFile::new().unwrap();
      writeln!(file, "max_tokens = 123").unwrap();

      let args = Args {
         debug: true,
         config: Some(file.path().to_path_buf()),
         ..Default::default()
      };

      let config = load_config_from_args(&args).unwrap();
      assert!(config.debug);
      assert_eq!(config.max_tokens, 123);
   }

   #[test]
   fn test_use_mock_cli_flag() {
      let args = Args { mock: true, ..Default::default() };
      assert!(use_mock(&args));
   }
}
