pub mod errors;
pub mod prompt;
pub mod storage;
pub mod values;

pub use errors::{ValuesError, ValuesResult};
pub use values::SimulationConfig;
