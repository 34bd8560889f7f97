//! Equation aggregate: coefficients, derived quantities and their display text.

pub mod formatting;
pub mod readout;
pub mod services;
pub mod value_objects;

pub use formatting::*;
pub use readout::*;
pub use services::*;
pub use value_objects::*;
