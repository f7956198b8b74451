//! CLI command handlers, one file per subcommand.

mod analyze;
mod completions;
mod inspect;

pub use analyze::{run_analyze, AnalyzeArgs};
pub use completions::run_completions;
pub use inspect::run_inspect;
