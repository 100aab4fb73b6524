use console::style;
use super::view::ResultView;

/// Render a result as styled terminal lines.
pub fn render_result(result: &ResultView) -> String {
    let severity = result.style();
    let mut lines = vec![
        format!(
            "{} {}  {}",
            style(severity.icon).fg(severity.terminal).bold(),
            style(&result.classification).fg(severity.terminal).bold(),
            style(format!("Confidence: {}%", result.confidence)).dim(),
        ),
        String::new(),
        format!("{}", style("Analysis").bold()),
        format!("  {}", result.explanation),
    ];

    if !result.threats.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}", style("Threats Detected").red().bold()));
        for threat in &result.threats {
            lines.push(format!("  {} {}", style("•").red(), threat));
        }
    }

    lines.push(String::new());
    lines.push(format!("{}", style("Recommendation").blue().bold()));
    lines.push(format!("  {}", result.recommendation));
    lines.join("\n")
}
