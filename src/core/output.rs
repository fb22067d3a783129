//! Unified output formatting and prompt utilities.
//!
//! Standardized formatting for all git-guide output: red for errors, yellow
//! for warnings, green checkmarks for success, bright_black for guidance.
//! The interactive handlers read answers through [`prompt`] so every prompt
//! looks the same.

use colored::*;
use std::io::{self, BufRead, Write};

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning message with consistent styling
pub fn print_warning(message: &str) {
    println!("{} {}", "! Warning:".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("{}", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}", format!("--- {header} ---").bold());
}

/// Print a colored question, flush, and read one trimmed line from stdin.
pub fn prompt(question: &str) -> io::Result<String> {
    print!("{} ", question.cyan().bold());
    io::stdout().flush()?;
    read_trimmed_line()
}

/// Pause until the user presses enter, so the last message can be read.
pub fn prompt_to_continue() -> io::Result<()> {
    print!("{}", "Press enter to continue...".bright_black());
    io::stdout().flush()?;
    read_trimmed_line().map(|_| ())
}

fn read_trimmed_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
