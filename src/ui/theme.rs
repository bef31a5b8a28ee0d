use crossterm::style::Color;

/// Design tokens for appfleet terminal output.
///
/// Only 4 semantic colors; icons come from this module.
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

/// Pick the unicode or ASCII variant of an icon.
pub fn icon(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}
