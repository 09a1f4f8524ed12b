use std::path::PathBuf;

use clap::Parser;

// CLI Args
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate git commit messages using Claude AI", long_about = None)]
pub struct Args {
   /// Enable debug diagnostics on stderr
   #[arg(long)]
   pub debug: bool,

   /// Use the offline mock backend (no network call)
   #[arg(long)]
   pub mock: bool,

   /// Anthropic model id to use (skips model discovery)
   #[arg(long, short = 'm')]
   pub model: Option<String>,

   /// Preview the commit instead of executing it
   #[arg(long)]
   pub dry_run: bool,

   /// Directory to run git commands in
   #[arg(long, default_value = ".")]
   pub dir: String,

   /// Path to config file (default: ~/.config/gencommit/config.toml)
   #[arg(long)]
   pub config: Option<PathBuf>,
}

impl Default for Args {
   fn default() -> Self {
      Self {
         debug:   false,
         mock:    false,
         model:   None,
         dry_run: false,
         dir:     ".".to_string(),
         config:  None,
      }
   }
}
