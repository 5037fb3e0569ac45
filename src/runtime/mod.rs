//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and effect dispatch
//! - `input` - Keyboard/mouse event to message mapping

pub mod app;
pub mod input;

pub use app::App;
