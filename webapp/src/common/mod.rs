pub mod style;

use api::theme::Theme;

// class list for a themed element, e.g. "section about dark"
pub fn themed(base: &str, theme: Theme) -> String {
    format!("{base} {}", theme.class())
}
