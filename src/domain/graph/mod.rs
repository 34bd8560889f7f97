//! Graph aggregate: theme, palettes and view configuration.

pub mod config;
pub mod value_objects;

pub use config::*;
pub use value_objects::*;
