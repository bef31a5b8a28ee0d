use crate::commands::FleetCommand;
use crate::config::ConfigWarning;
use crate::error::FleetError;
use crate::ui::blocks::error::ErrorBlock;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::UiContext;

/// Usage lines shown when a command runs with nothing selected.
pub const USAGE: &str = "\
You must first specify at least one app:

Usage: appfleet <app> [<app>] <command>

Examples:
  appfleet production restart
  appfleet demo staging deploy
  appfleet all share";

pub fn format_fleet_error(err: &FleetError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        FleetError::ConfigParse { file, message } => ErrorBlock::new("invalid configuration")
            .with_file(file)
            .with_line_from(message)
            .with_file_context(2, 1)
            .with_detail(message.clone())
            .with_fix(
                "Check the YAML syntax. Every app needs an 'app' key:\n  apps:\n    production:\n      app: myapp-production",
            ),
        FleetError::UnknownTarget { name, known } => {
            let block = ErrorBlock::new(err.to_string());
            match crate::config::closest_match(name, known.iter().map(String::as_str)) {
                Some(suggestion) => block.with_fix(format!("Did you mean '{}'?", suggestion)),
                None if known.is_empty() => {
                    block.with_fix("Define apps in config/apps.yml (run 'appfleet create_config')")
                }
                None => block.with_fix("Run 'appfleet apps' to list configured apps"),
            }
        }
        FleetError::UnknownCommand { token } => {
            let block = ErrorBlock::new(err.to_string());
            match FleetCommand::suggest(token) {
                Some(suggestion) => block.with_fix(format!("Did you mean '{}'?", suggestion)),
                None => block.with_fix(format!("Available commands: {}", FleetCommand::catalog())),
            }
        }
        FleetError::NoTargetsSelected => ErrorBlock::new(err.to_string()).with_detail(USAGE),
        FleetError::MissingStack { target } => ErrorBlock::new(err.to_string()).with_fix(format!(
            "Add 'stack: <name>' under apps.{} in the config file",
            target
        )),
        FleetError::CommandSpawn { program, .. } => ErrorBlock::new(err.to_string())
            .with_fix(format!("Make sure '{}' is installed and on your PATH", program)),
        other => ErrorBlock::new(other.to_string()),
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(fleet) = err.downcast_ref::<FleetError>() {
        return format_fleet_error(fleet, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(fleet) = err.downcast_ref::<FleetError>() {
            output["exit_code"] = serde_json::json!(fleet.exit_code());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", render_error(err, ui));
}

/// Terminal rendering of an error; `--color` decides styling, as for warnings.
fn render_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format_error(err, ui.color, ui.unicode)
}

pub fn format_config_warning(warning: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = WarningBlock::new(format!("Unknown config key '{}'", warning.key));
    match warning.line {
        Some(line) => block.add_line(format!("{}:{}", warning.file.display(), line)),
        None => block.add_line(warning.file.display().to_string()),
    }
    if let Some(suggestion) = &warning.suggestion {
        block.add_line(format!("Did you mean '{}'?", suggestion));
    }
    block.render(supports_color, supports_unicode)
}

/// Warnings go to stderr and are suppressed entirely in JSON mode.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        return;
    }
    for warning in warnings {
        eprint!("{}", format_config_warning(warning, ui.color, ui.unicode));
    }
}

impl ErrorBlock {
    /// Pick up `line N` from a YAML parser message, when present.
    fn with_line_from(self, message: &str) -> Self {
        match parse_line_number(message) {
            Some(line) => self.with_line(line),
            None => self,
        }
    }
}

fn parse_line_number(message: &str) -> Option<usize> {
    let (_, rest) = message.split_once("line ")?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
