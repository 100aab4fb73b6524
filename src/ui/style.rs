use console::Color;
use crate::models::Classification;

/// Visual treatment of a results panel.
#[derive(Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    pub css_class: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub terminal: Color,
}

/// Styles for the classifications that get their own treatment. Anything not
/// listed, `Error` included, falls back to [`NEUTRAL_STYLE`].
pub static SEVERITY_STYLES: &[(Classification, SeverityStyle)] = &[
    (
        Classification::Safe,
        SeverityStyle {
            css_class: "severity-safe",
            background: "#dcfce7",
            border: "#86efac",
            text: "#166534",
            icon: "\u{2714}",
            terminal: Color::Green,
        },
    ),
    (
        Classification::Suspicious,
        SeverityStyle {
            css_class: "severity-suspicious",
            background: "#fef9c3",
            border: "#fde047",
            text: "#854d0e",
            icon: "\u{26A0}",
            terminal: Color::Yellow,
        },
    ),
    (
        Classification::Phishing,
        SeverityStyle {
            css_class: "severity-phishing",
            background: "#fee2e2",
            border: "#fca5a5",
            text: "#991b1b",
            icon: "\u{1F6E1}",
            terminal: Color::Red,
        },
    ),
];

pub static NEUTRAL_STYLE: SeverityStyle = SeverityStyle {
    css_class: "severity-neutral",
    background: "#f3f4f6",
    border: "#d1d5db",
    text: "#1f2937",
    icon: "\u{2709}",
    terminal: Color::White,
};

/// Style for a raw classification label. Labels are matched exactly.
pub fn style_for(label: &str) -> &'static SeverityStyle {
    Classification::from_label(label)
        .and_then(|c| SEVERITY_STYLES.iter().find(|(k, _)| *k == c))
        .map(|(_, style)| style)
        .unwrap_or(&NEUTRAL_STYLE)
}

/// CSS rules for every panel style, generated from the table.
pub fn severity_css() -> String {
    SEVERITY_STYLES
        .iter()
        .map(|(_, style)| style)
        .chain(std::iter::once(&NEUTRAL_STYLE))
        .map(|s| {
            format!(
                ".{} {{ background: {}; border-color: {}; color: {}; }}\n",
                s.css_class, s.background, s.border, s.text
            )
        })
        .collect()
}
