// Output formatting for the self-test CLI

use colored::*;
use std::path::Path;

/// Print a numbered section header
pub fn print_step(number: usize, title: &str) {
    println!();
    println!("{} {}", format!("{}.", number).cyan().bold(), title.bold());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a success message
pub fn print_success_msg(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print where a log file was written, or that none was
pub fn print_log_file(path: &Path, enabled: bool) {
    if enabled {
        print_info(&format!("Log file: {}", path.display().to_string().cyan()));
    } else {
        print_info(&"File logging disabled".dimmed().to_string());
    }
}

/// Print an error message to stderr
pub fn print_error(error: &str) {
    eprintln!("{} {}", "✗ Error:".red().bold(), error);
}
