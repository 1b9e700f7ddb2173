//! Parameter bounds implementation
//!
//! Bounds are inclusive intervals attached to fit parameters. They are what
//! the external optimizer uses to keep quantities such as the area per
//! molecule away from physically meaningless values, and they double as a
//! uniform prior on the parameter.

use serde::{Deserialize, Serialize};
use std::f64::{INFINITY, NEG_INFINITY};
use thiserror::Error;

/// Errors that can occur when working with parameter bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Parameter value {value} is outside bounds: [{min}, {max}]")]
    ValueOutsideBounds { value: f64, min: f64, max: f64 },
}

/// Inclusive bounds on a parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

// JSON has no representation for infinities, so open ends are written as null.
impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;

        if self.has_lower_bound() {
            state.serialize_field("min", &Some(self.min))?;
        } else {
            state.serialize_field("min", &None::<f64>)?;
        }

        if self.has_upper_bound() {
            state.serialize_field("max", &Some(self.max))?;
        } else {
            state.serialize_field("max", &None::<f64>)?;
        }

        state.end()
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper {
            #[serde(default)]
            min: Option<f64>,

            #[serde(default)]
            max: Option<f64>,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;

        let min = helper.min.unwrap_or(NEG_INFINITY);
        let max = helper.max.unwrap_or(INFINITY);

        Bounds::new(min, max).map_err(serde::de::Error::custom)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: NEG_INFINITY,
            max: INFINITY,
        }
    }
}

impl Bounds {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(60.0, 150.0).unwrap();
    /// assert_eq!(bounds.min, 60.0);
    /// assert_eq!(bounds.max, 150.0);
    /// assert!(Bounds::new(2.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        // NaN fails both comparisons, so test the accepted case
        if !(min <= max) {
            return Err(BoundsError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Create an unbounded constraint (negative infinity to positive infinity)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Check if a value is within the bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check if the bounds are finite (both min and max are finite)
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check if the parameter is bounded from below
    pub fn has_lower_bound(&self) -> bool {
        self.min.is_finite()
    }

    /// Check if the parameter is bounded from above
    pub fn has_upper_bound(&self) -> bool {
        self.max.is_finite()
    }

    /// Clamp a value to be within the bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Log-probability of `value` under the uniform prior these bounds define
    ///
    /// Finite bounds give `-ln(max - min)` inside the interval, half-open or
    /// open bounds give an improper flat prior of `0.0`. Anything outside the
    /// interval is impossible and yields negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(2.0, 20.0).unwrap();
    /// assert!((bounds.logp(12.0) + 18.0_f64.ln()).abs() < 1e-12);
    /// assert_eq!(bounds.logp(25.0), f64::NEG_INFINITY);
    /// ```
    pub fn logp(&self, value: f64) -> f64 {
        if !self.contains(value) {
            return NEG_INFINITY;
        }

        let width = self.max - self.min;
        if self.is_finite() && width > 0.0 {
            -width.ln()
        } else {
            0.0
        }
    }
}
