//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, FlowerImage, Message, MessageStyle, run_tui};
