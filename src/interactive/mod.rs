//! Terminal UI for playing rounds

pub mod app;
pub mod rendering;

pub use app::{Alert, App, Message, MessageStyle, run_tui};
