//! Command implementations

pub mod simple;
pub mod words;

pub use simple::run_simple;
pub use words::{WordListSummary, summarize};
