//! Console output: dotted number formatting and the Portuguese run report.

mod format;
mod reporter;

pub use format::{format_number, format_seconds};
pub use reporter::Reporter;
