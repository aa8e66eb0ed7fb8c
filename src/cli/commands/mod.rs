//! One file per subcommand; the binary's match stays thin.

mod formats;
mod generate;

pub use formats::cmd_formats;
pub use generate::cmd_generate;
