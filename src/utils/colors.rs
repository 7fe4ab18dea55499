/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

/// Light blue background, the terminal stand-in for the weekend highlight.
pub const WEEKEND_BG: &str = "\x1b[48;5;111;30m";

/// Wraps a full terminal line in the weekend highlight.
pub fn weekend_line(line: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return line.to_string();
    }
    format!("{WEEKEND_BG}{line}{RESET}")
}
