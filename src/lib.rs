mod api;
pub mod config;
pub mod errors;
mod generator;
mod name;
mod preview;
mod templates;
mod transactions;
mod vfs;

pub use api::{new_plugin_in, PluginError};
pub use generator::GenerateError;
pub use name::{ClassName, NameError};
