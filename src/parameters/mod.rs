//! # Parameter System
//!
//! Explicit fit parameters for model components.
//!
//! A component owns its [`Parameter`]s and hands an ordered [`Parameters`]
//! snapshot to the fitting framework on request. The framework aggregates
//! those snapshots, lets its optimizer propose new values for the varying
//! ones, and pushes the result back through
//! [`Component::set_parameters`](crate::component::Component::set_parameters).
//!
//! ## Example Usage
//!
//! ```rust
//! use lipid_bilayer::parameters::{Parameter, Parameters};
//!
//! let mut params = Parameters::new();
//! params.add(Parameter::with_bounds("apm", 62.0, 60.0, 150.0).unwrap()).unwrap();
//! params.add(Parameter::fixed("ratio", 0.75)).unwrap();
//!
//! // Only varying parameters reach the optimizer
//! assert_eq!(params.varying_values(), vec![62.0]);
//!
//! // After an optimizer step, write its proposal back
//! params.update_varying(&[71.5]).unwrap();
//! assert_eq!(params.get("apm").unwrap().value(), 71.5);
//! ```

pub mod bounds;
pub mod parameter;
pub mod parameters;

// Re-export key types
pub use bounds::{Bounds, BoundsError};
pub use parameter::{Parameter, ParameterError};
pub use parameters::{Parameters, SerializationError};
