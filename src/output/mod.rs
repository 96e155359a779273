use colored::Colorize;

/// Formats a `Debug:` line, as printed by the `-d` dumps.
pub fn debug_line(msg: &str) -> String {
    format!("{} {}", "Debug:".green().bold(), msg.yellow())
}

pub fn error_line(msg: &str) -> String {
    format!("{} {}", "Error:".red().bold(), msg.bold())
}

pub fn print_debug(msg: &str) {
    println!("{}", debug_line(msg));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", error_line(msg));
}
