pub mod app_lifecycle;
pub mod command;
pub mod error;
pub mod plist_parser;

pub use error::{AppError, AppResult};
