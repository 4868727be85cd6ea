use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::Theme;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "theme",
            "Show or switch the report theme",
            "theme [plain|iconic]",
            cmd_theme,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [color <on|off> | export-dir <path>]",
            cmd_config,
        ),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            io::print_info(format!("Theme: {}", context.config.theme));
            Ok(())
        }
        [name] => {
            let theme: Theme = name.parse()?;
            context.config.theme = theme;
            context.persist_config()?;
            context.apply_output_preferences();
            io::print_success(format!("Theme set to {}.", theme));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: theme [plain|iconic]".into(),
        )),
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output_section("Configuration");
            let config = context.config();
            io::print_info(format!("  Theme        : {}", config.theme));
            io::print_info(format!(
                "  Color output : {}",
                if config.ui_color_enabled { "on" } else { "off" }
            ));
            io::print_info(format!(
                "  Export dir   : {}",
                config.resolve_export_dir().display()
            ));
            io::print_info(format!(
                "  Config file  : {}",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["color", value] => {
            context.config.ui_color_enabled = parse_switch(value)?;
            context.persist_config()?;
            context.apply_output_preferences();
            io::print_success(format!("Color output {}.", value.to_lowercase()));
            Ok(())
        }
        ["export-dir", path] => {
            context.config.default_export_dir = Some(PathBuf::from(path));
            context.persist_config()?;
            io::print_success(format!("Export directory set to {}.", path));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: config [color <on|off> | export-dir <path>]".into(),
        )),
    }
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "Expected `on` or `off`, got `{}`",
            other
        ))),
    }
}
