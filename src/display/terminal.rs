//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used for `stream`
pub fn should_use_colors(stream: &impl IsTerminal) -> bool {
    // NO_COLOR wins over everything (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    stream.is_terminal()
}
