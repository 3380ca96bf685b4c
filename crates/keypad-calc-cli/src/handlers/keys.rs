//! Keys command handler

use console::Style;
use keypad_calc::tui::{ButtonGroup, Keypad};

use crate::config::CliConfig;

/// ASCII spellings accepted by `eval` for buttons that are awkward to type
pub const ALIASES: [(&str, &str); 6] = [
    ("*  x", "×"),
    ("/", "÷"),
    ("−", "-"),
    ("sqrt", "√"),
    ("C", "AC"),
    ("neg  ±", "+/-"),
];

/// Execute the keys command
pub fn execute_keys(config: &CliConfig) {
    println!("{}", render_keys(&Keypad::new(), config.color.should_color()));
}

fn group_style(group: ButtonGroup, use_color: bool) -> Style {
    let style = match group {
        ButtonGroup::Function => Style::new().black().on_color256(252),
        ButtonGroup::Operator => Style::new().white().bold().on_color256(214),
        ButtonGroup::Digit => Style::new().white().on_color256(240),
    };
    style.force_styling(use_color)
}

/// Renders the keypad grid followed by the alias table
#[must_use]
pub fn render_keys(keypad: &Keypad, use_color: bool) -> String {
    let (rows, _) = keypad.dimensions();
    let mut lines = vec![String::new(); rows];
    for ((row, _), button) in keypad.buttons_with_positions() {
        let cell = format!("{:^5}", button.label());
        let styled = group_style(button.group, use_color).apply_to(cell);
        lines[row].push_str(&format!("{styled} "));
    }

    let mut out: Vec<String> = lines
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    out.push(String::new());
    out.push("Aliases:".to_string());
    for (alias, label) in ALIASES {
        out.push(format!("  {alias:<7} {label}"));
    }
    out.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keys_grid() {
        let text = render_keys(&Keypad::new(), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], " AC    +/-    %     ÷");
        assert_eq!(lines[1], "  7     8     9     ×");
        assert_eq!(lines[4], "  0     .     √     =");
    }

    #[test]
    fn test_render_keys_aliases() {
        let text = render_keys(&Keypad::new(), false);
        assert!(text.contains("Aliases:"));
        assert!(text.contains("sqrt    √"));
        assert!(text.contains("C       AC"));
    }

    #[test]
    fn test_aliases_parse() {
        use keypad_calc::core::Token;
        for (aliases, label) in ALIASES {
            let expected: Token = label.parse().unwrap();
            for alias in aliases.split_whitespace() {
                assert_eq!(alias.parse::<Token>().unwrap(), expected, "alias {alias}");
            }
        }
    }

    #[test]
    fn test_render_keys_colored() {
        let text = render_keys(&Keypad::new(), true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("AC"));
    }
}
