use std::path::{Path, PathBuf};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    file: Option<PathBuf>,
    line: Option<usize>,
    code_context: Option<Vec<(usize, String, bool)>>, // (line_no, content, highlight)
    details: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            line: None,
            code_context: None,
            details: Vec::new(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_file_context(mut self, before: usize, after: usize) -> Self {
        let (Some(file), Some(line)) = (&self.file, self.line) else {
            return self;
        };
        self.code_context = read_code_context(file, line, before, after);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let label = theme::icon(
            supports_unicode,
            theme::icons::ERROR,
            theme::icons_ascii::ERROR,
        );
        let header = ColoredText::error(format!("{} {}", label, self.message))
            .bold()
            .render(supports_color);

        let mut out = format!("{}\n", header);

        if let Some(file) = &self.file {
            match self.line {
                Some(line) => out.push_str(&format!("  {}:{}\n", file.display(), line)),
                None => out.push_str(&format!("  {}\n", file.display())),
            }
        }

        if let Some(lines) = &self.code_context {
            out.push('\n');
            for (no, text, highlight) in lines {
                let prefix = if *highlight {
                    theme::icon(supports_unicode, theme::icons::ARROW, theme::icons_ascii::ARROW)
                } else {
                    " "
                };
                let rendered = if *highlight {
                    ColoredText::error(text.as_str()).render(supports_color)
                } else {
                    text.clone()
                };
                out.push_str(&format!("  {prefix} {:>4} | {}\n", no, rendered));
            }
        }

        for detail in &self.details {
            out.push_str(&format!("  {}\n", detail));
        }

        if let Some(fix) = &self.fix {
            out.push('\n');
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::info("FIX:").render(supports_color),
                fix
            ));
        }

        out
    }
}

fn read_code_context(
    file: &Path,
    line: usize,
    before: usize,
    after: usize,
) -> Option<Vec<(usize, String, bool)>> {
    let content = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(before).saturating_sub(1);
    let end = (line + after).min(lines.len());

    let mut out = Vec::new();
    for (idx, text) in lines[start..end].iter().enumerate() {
        let line_no = start + idx + 1;
        out.push((line_no, (*text).to_string(), line_no == line));
    }
    Some(out)
}
