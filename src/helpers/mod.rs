//! Helper functions for presenting content
//!
//! Small pure formatting helpers shared by the CLI commands. The engine
//! itself never depends on how records are displayed.

mod date;
mod url;

pub use date::*;
pub use url::*;
