pub mod equation;
pub mod errors;
pub mod events;
pub mod graph;
pub mod logging;
pub mod repositories;
