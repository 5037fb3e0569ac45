//! LabelFast - word-level correction of machine-generated sentences
//!
//! This crate holds the whole annotation core in the Elm Architecture
//! style: messages go through `update`, which mutates the `AppModel` and
//! returns `Cmd` side effects for the `effects::Dispatcher` to apply. The
//! binary adds the winit window, softbuffer surface and fontdue text.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod data;
pub mod effects;
pub mod geometry;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tokenize;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use data::SentencePair;
pub use effects::{Dispatcher, Flow, SubmissionSink, ViewPort};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
