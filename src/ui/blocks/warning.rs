use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let label = theme::icon(
            supports_unicode,
            theme::icons::WARNING,
            theme::icons_ascii::WARNING,
        );
        let mut out = format!(
            "{}\n",
            ColoredText::warning(format!("{} {}", label, self.title)).render(supports_color)
        );
        for line in &self.lines {
            out.push_str(&format!("  {}\n", line));
        }
        out
    }
}
