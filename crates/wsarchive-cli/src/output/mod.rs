//! Console output for archiving runs.
//!
//! Human mode prints one line per archived or skipped file; JSON mode
//! prints a single document once the archive is finished.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;

/// Picks the formatter for `--json`, `--verbose` and `--quiet`.
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        return Box::new(JsonFormatter);
    }
    Box::new(HumanFormatter::new(verbose, quiet))
}
