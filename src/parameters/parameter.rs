//! Parameter definition and implementation
//!
//! This module provides the Parameter struct, the fundamental building block
//! of the parameter system. A parameter is a plain value object: a name, a
//! current value, a flag saying whether the optimizer may vary it, and an
//! inclusive bounds interval. Parameters are passed explicitly between a
//! component and the fitting framework; nothing registers itself globally.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Bounds error: {0}")]
    BoundsError(#[from] BoundsError),

    #[error("Parameter '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Expected {expected} values for the varying parameters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A fit parameter
///
/// Fixed parameters carry unbounded bounds unless told otherwise; a varying
/// parameter is expected to carry finite bounds, which the optimizer uses.
/// Deserialization rejects a value that lies outside its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParameterFields")]
pub struct Parameter {
    /// Name of the parameter
    name: String,

    /// Current value of the parameter
    value: f64,

    /// Whether this parameter can be varied during optimization
    vary: bool,

    /// Inclusive bounds for the parameter value
    #[serde(default)]
    bounds: Bounds,
}

/// Unchecked field layout of a serialized [`Parameter`]
#[derive(Deserialize)]
struct ParameterFields {
    name: String,
    value: f64,
    vary: bool,
    #[serde(default)]
    bounds: Bounds,
}

impl TryFrom<ParameterFields> for Parameter {
    type Error = ParameterError;

    fn try_from(fields: ParameterFields) -> Result<Self, Self::Error> {
        let ParameterFields {
            name,
            value,
            vary,
            bounds,
        } = fields;
        if !bounds.contains(value) {
            return Err(ParameterError::BoundsError(BoundsError::ValueOutsideBounds {
                value,
                min: bounds.min,
                max: bounds.max,
            }));
        }

        Ok(Self {
            name,
            value,
            vary,
            bounds,
        })
    }
}

impl Parameter {
    /// Create a new varying, unbounded parameter with the given name and value
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Parameter;
    ///
    /// let param = Parameter::new("popc vm_heads", 331.0);
    /// assert_eq!(param.name(), "popc vm_heads");
    /// assert_eq!(param.value(), 331.0);
    /// assert!(param.vary());
    /// ```
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            vary: true,
            bounds: Bounds::default(),
        }
    }

    /// Create a new fixed (non-varying) parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Parameter;
    ///
    /// let param = Parameter::fixed("bilayer ratio of Popc to Popg", 0.75);
    /// assert!(!param.vary());
    /// assert!(!param.bounds().is_finite());
    /// ```
    pub fn fixed(name: &str, value: f64) -> Self {
        Self {
            vary: false,
            ..Self::new(name, value)
        }
    }

    /// Create a new varying parameter with the given name, value, and bounds
    ///
    /// The value is clamped into the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Parameter;
    ///
    /// let param = Parameter::with_bounds("apm", 62.0, 60.0, 150.0).unwrap();
    /// assert_eq!(param.min(), 60.0);
    /// assert_eq!(param.max(), 150.0);
    ///
    /// let clamped = Parameter::with_bounds("apm", 10.0, 60.0, 150.0).unwrap();
    /// assert_eq!(clamped.value(), 60.0);
    /// ```
    pub fn with_bounds(name: &str, value: f64, min: f64, max: f64) -> Result<Self, ParameterError> {
        let bounds = Bounds::new(min, max)?;

        Ok(Self {
            name: name.to_string(),
            value: bounds.clamp(value),
            vary: true,
            bounds,
        })
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value of the parameter
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value of the parameter
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was set successfully, or an error if the value is outside bounds
    pub fn set_value(&mut self, value: f64) -> Result<(), ParameterError> {
        if !self.bounds.contains(value) {
            return Err(ParameterError::BoundsError(BoundsError::ValueOutsideBounds {
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            }));
        }

        self.value = value;
        Ok(())
    }

    /// Check if the parameter is varied during optimization
    pub fn vary(&self) -> bool {
        self.vary
    }

    /// Set whether the parameter is varied during optimization
    pub fn set_vary(&mut self, vary: bool) {
        self.vary = vary;
    }

    /// Get the bounds of the parameter
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Get the minimum allowed value for the parameter
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Get the maximum allowed value for the parameter
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Set the bounds for the parameter, clamping the current value into them
    ///
    /// # Returns
    ///
    /// `Ok(())` if the bounds were set successfully, or an error if min > max
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<(), ParameterError> {
        let bounds = Bounds::new(min, max)?;
        self.bounds = bounds;
        self.value = bounds.clamp(self.value);

        Ok(())
    }

    /// Set the vary flag and, optionally, the bounds in one call
    ///
    /// Passing `None` for `bounds` leaves the current bounds in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Parameter;
    ///
    /// let mut param = Parameter::fixed("roughness", 12.0);
    /// param.setp(true, Some((2.0, 20.0))).unwrap();
    /// assert!(param.vary());
    /// assert_eq!(param.max(), 20.0);
    /// ```
    pub fn setp(&mut self, vary: bool, bounds: Option<(f64, f64)>) -> Result<(), ParameterError> {
        if let Some((min, max)) = bounds {
            self.set_bounds(min, max)?;
        }
        self.vary = vary;

        Ok(())
    }

    /// Log-probability of the current value under the bounds' uniform prior
    pub fn logp(&self) -> f64 {
        self.bounds.logp(self.value)
    }
}
