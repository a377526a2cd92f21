//! Health Calculator Shared Library
//!
//! Pure calculation and validation logic behind the clinic page's BMI
//! calculator and appointment form, shared by the WASM bindings and the CLI.

pub mod appointment;
pub mod errors;
pub mod health_metrics;
pub mod page;
pub mod recommendations;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use appointment::submit_appointment;
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use units::*;
