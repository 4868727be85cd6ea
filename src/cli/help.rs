use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Commands");
    let width = registry.name_width();
    for entry in registry.list() {
        io::print_info(format!(
            "  {name:<width$}  {summary}",
            name = entry.name,
            summary = entry.description
        ));
    }
    io::print_hint("`help <command>` shows usage.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(entry.name);
    io::print_info(format!("  {}", entry.description));
    io::print_info(format!("  usage: {}", entry.usage));
}
