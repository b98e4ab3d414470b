pub mod config;
pub mod constants;
pub mod models;

pub use config::{SimulationConfig, ValuesError, ValuesResult};
pub use models::Body;
