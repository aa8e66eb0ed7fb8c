use crate::format::Format;
use std::process::ExitCode;

/// Prints registered format names, marking session formats.
#[must_use]
pub fn cmd_formats() -> ExitCode {
    for name in Format::names() {
        if Format::from_name(name).is_session() {
            println!("{name} (session)");
        } else {
            println!("{name}");
        }
    }
    ExitCode::SUCCESS
}
