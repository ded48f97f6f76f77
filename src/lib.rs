// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod tabs;
pub mod tool;

pub use error::RegistryError;
pub use tabs::{CanonicalTab, Evidence, Hint, Item, Subsystem};
pub use tool::TabTool;
