// SalonBook Library
// Exposes core functionality for testing and reuse

pub mod api;
pub mod command_handlers;
pub mod config;
pub mod error;
pub mod http_config;
pub mod messages;
pub mod models;
pub mod picker;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::*;
pub use picker::{DateTimePicker, PickerEvent, PickerMessage, PickerParams, SlotWindow};
