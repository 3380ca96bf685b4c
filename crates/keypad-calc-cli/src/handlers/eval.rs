//! Eval command handler

use console::Style;
use keypad_calc::core::{Calculator, Display, Token};
use serde::Serialize;
use tracing::info;

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// One key press and what it left on the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalStep {
    /// Button caption
    pub token: String,
    /// Display after the press
    pub display: String,
    /// Error kind raised by the press
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    /// Error message raised by the press
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a whole eval run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Final display
    pub display: String,
    /// Every press in order
    pub steps: Vec<EvalStep>,
}

/// Execute the eval command
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let report = evaluate(&args.tokens)?;
    info!(
        presses = report.steps.len(),
        display = %report.display,
        "evaluation finished"
    );

    let output = if args.json {
        render_json(&report)?
    } else {
        render_text(&report, args.trace, config.color.should_color())
    };
    println!("{output}");
    Ok(())
}

/// Parses every argument, then presses the tokens on a fresh calculator
///
/// All arguments are parsed before anything is pressed, so an unknown
/// token fails the whole run.
pub fn evaluate(inputs: &[String]) -> CliResult<EvalReport> {
    let mut tokens = Vec::new();
    for input in inputs {
        tokens.extend(Token::parse_sequence(input)?);
    }
    if tokens.is_empty() {
        return Err(CliError::invalid_argument("no tokens to press"));
    }

    let mut calculator = Calculator::new();
    let steps = tokens
        .into_iter()
        .map(|token| {
            let output = calculator.apply_token(token);
            EvalStep {
                token: token.label().to_string(),
                display: output.display,
                error_kind: output.error.as_ref().map(|e| e.kind().to_string()),
                error: output.error.map(|e| e.to_string()),
            }
        })
        .collect();

    Ok(EvalReport {
        display: calculator.display().to_string(),
        steps,
    })
}

/// Renders the final display, optionally preceded by one line per press
#[must_use]
pub fn render_text(report: &EvalReport, trace: bool, use_color: bool) -> String {
    let error_style = Style::new().red().bold().force_styling(use_color);
    let dim = Style::new().dim().force_styling(use_color);

    let mut out = String::new();
    if trace {
        for step in &report.steps {
            out.push_str(&format!("{:>3} -> {}", step.token, step.display));
            if let Some(err) = &step.error {
                out.push_str(&format!("  {}", dim.apply_to(format!("({err})"))));
            }
            out.push('\n');
        }
    }

    let display = if report.display == Display::ERROR_TEXT {
        error_style.apply_to(&report.display).to_string()
    } else {
        Style::new()
            .bold()
            .force_styling(use_color)
            .apply_to(&report.display)
            .to_string()
    };
    out.push_str(&display);
    out
}

/// Renders the report as pretty JSON
pub fn render_json(report: &EvalReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keypad_calc::core::CalcError;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_evaluate_simple() {
        let report = evaluate(&args(&["1", "2", "×", "3", "="])).unwrap();
        assert_eq!(report.display, "36");
        assert_eq!(report.steps.len(), 5);
        assert_eq!(report.steps[1].display, "12");
    }

    #[test]
    fn test_evaluate_space_separated_argument() {
        let report = evaluate(&args(&["1 2 × 3", "="])).unwrap();
        assert_eq!(report.display, "36");
    }

    #[test]
    fn test_evaluate_aliases() {
        let report = evaluate(&args(&["8 / 2 * 3 ="])).unwrap();
        assert_eq!(report.display, "12");
        assert_eq!(report.steps[1].token, "÷");
    }

    #[test]
    fn test_evaluate_error_is_displayed() {
        let report = evaluate(&args(&["5 ÷ 0 ="])).unwrap();
        assert_eq!(report.display, "Error");
        let last = report.steps.last().unwrap();
        assert_eq!(last.error_kind.as_deref(), Some("division_by_zero"));
        assert_eq!(last.error.as_deref(), Some("Division by zero"));
    }

    #[test]
    fn test_evaluate_unknown_token() {
        let err = evaluate(&args(&["1", "^", "2"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calc(CalcError::UnknownToken { ref label }) if label == "^"
        ));
    }

    #[test]
    fn test_evaluate_blank_input() {
        let err = evaluate(&args(&["   "])).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_render_text_plain() {
        let report = evaluate(&args(&["2 + 3 ="])).unwrap();
        assert_eq!(render_text(&report, false, false), "5");
    }

    #[test]
    fn test_render_text_trace() {
        let report = evaluate(&args(&["9 √ ÷ 0 ="])).unwrap();
        let text = render_text(&report, true, false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  9 -> 9");
        assert_eq!(lines[1], "  √ -> 3");
        assert_eq!(lines[4], "  = -> Error  (Division by zero)");
        assert_eq!(lines[5], "Error");
    }

    #[test]
    fn test_render_text_colored_error() {
        let report = evaluate(&args(&["5 ÷ 0 ="])).unwrap();
        let text = render_text(&report, false, true);
        let red = Style::new().red().bold().force_styling(true);
        assert_eq!(text, red.apply_to(Display::ERROR_TEXT).to_string());
    }

    #[test]
    fn test_render_text_colored_number_is_not_red() {
        let report = evaluate(&args(&["2 + 3 ="])).unwrap();
        let text = render_text(&report, false, true);
        let bold = Style::new().bold().force_styling(true);
        assert_eq!(text, bold.apply_to("5").to_string());
    }

    #[test]
    fn test_render_json() {
        let report = evaluate(&args(&["4 √"])).unwrap();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "2");
        assert_eq!(value["steps"][0]["token"], "4");
        assert_eq!(value["steps"][1]["display"], "2");
        assert!(value["steps"][1].get("error").is_none());
    }

    #[test]
    fn test_render_json_with_error() {
        let report = evaluate(&args(&["2 +/- √"])).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["display"], "Error");
        assert_eq!(value["steps"][2]["error_kind"], "domain_error");
    }
}
