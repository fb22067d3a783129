use clap::Parser;
use git_guide::commands::run_session;
use git_guide::core::{error::GitGuideError, print_error, GitRepo};
use std::env;

#[derive(Parser)]
#[command(name = "git-guide")]
#[command(about = "A menu-driven assistant that guides you through everyday git operations")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // The only fatal error: no repository at or above the current directory
    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            print_error(&format!("Cannot determine current directory: {e}"));
            std::process::exit(1);
        }
    };
    let repo = match GitRepo::open(&current_dir) {
        Ok(repo) => repo,
        Err(GitGuideError::NotInGitRepo) => {
            print_error(&format!(
                "Invalid Git repository: {}",
                current_dir.display()
            ));
            std::process::exit(1);
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run_session(&repo) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
