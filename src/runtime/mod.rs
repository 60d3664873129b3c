//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management, event forwarding
//! - `input` - Keyboard event to action mapping

pub mod app;
pub mod input;

pub use app::App;
