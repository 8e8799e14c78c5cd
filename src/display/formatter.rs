//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown to stdout with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors(&std::io::stdout()) {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Print markdown to stderr with rich formatting (or plain fallback)
pub fn eprint_markdown(markdown: &str) {
    if should_use_colors(&std::io::stderr()) {
        eprint!("{}", skin().term_text(markdown));
    } else {
        eprintln!("{}", markdown);
    }
}

/// Skin matching the timecard palette: cyan headings, bold white emphasis
fn skin() -> MadSkin {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);

    skin.bold.set_fg(White);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.set_fg(Grey);

    // Times and paths
    skin.inline_code.set_fg(Cyan);

    skin.bullet.set_fg(Grey);
    skin.horizontal_rule.set_fg(DarkGrey);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_print_markdown_plain_fallback() {
        std::env::set_var("NO_COLOR", "1");

        print_markdown("# TIMECARD\n\nYou have **clocked in:** 09:00:00");
        eprint_markdown("**TIMECARD ERROR** something");

        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn test_skin_renders_markdown() {
        let rendered = skin().term_text("**Total Time:** 01:00:00").to_string();
        assert!(rendered.contains("01:00:00"));
    }
}
