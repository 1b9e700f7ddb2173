//! Configuration for bilayer and lipid species parameters.
//!
//! These structs describe starting values, vary flags and bounds. They can be
//! built in code, taken from their `Default`, or loaded from JSON so a fit's
//! starting point can live next to its data.

use crate::error::{BilayerError, Result};
use crate::parameters::{Bounds, Parameter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Starting state of a single fit parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Initial value
    pub value: f64,

    /// Whether the optimizer may vary the parameter. Default: false
    #[serde(default)]
    pub vary: bool,

    /// Inclusive `(min, max)` bounds; `None` leaves the parameter unbounded
    #[serde(default)]
    pub bounds: Option<(f64, f64)>,
}

impl ParameterConfig {
    /// A varying parameter with the given bounds
    pub const fn varying(value: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            vary: true,
            bounds: Some((min, max)),
        }
    }

    /// A fixed, unbounded parameter
    pub const fn fixed(value: f64) -> Self {
        Self {
            value,
            vary: false,
            bounds: None,
        }
    }

    /// Builds the named parameter described by this configuration
    ///
    /// The value must lie inside the bounds; configuration never silently clamps.
    pub fn build(&self, name: &str) -> Result<Parameter> {
        let mut param = Parameter::fixed(name, self.value);
        if let Some((min, max)) = self.bounds {
            let bounds = Bounds::new(min, max)?;
            if !bounds.contains(self.value) {
                return Err(BilayerError::InvalidConfig(format!(
                    "initial value {} of '{}' lies outside [{}, {}]",
                    self.value, name, min, max
                )));
            }
            param.set_bounds(min, max)?;
        }
        param.set_vary(self.vary);

        Ok(param)
    }
}

/// Configuration of the five bilayer-level parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BilayerConfig {
    /// Area per molecule. Default: 62, varying in [60, 150]
    pub apm: ParameterConfig,

    /// Roughness of the top (outer) interfaces. Default: 12.0, varying in [2, 20]
    pub roughness_top: ParameterConfig,

    /// Roughness of the bottom (inner) interfaces. Default: 10.3, varying in [4, 15]
    pub roughness_bottom: ParameterConfig,

    /// Fraction of the first lipid species. Default: 0.75, fixed
    pub ratio: ParameterConfig,

    /// Volume fraction of bilayer material. Default: 1.0, fixed
    pub vol_frac: ParameterConfig,
}

impl Default for BilayerConfig {
    fn default() -> Self {
        Self {
            apm: ParameterConfig::varying(62.0, 60.0, 150.0),
            roughness_top: ParameterConfig::varying(12.0, 2.0, 20.0),
            roughness_bottom: ParameterConfig::varying(10.3, 4.0, 15.0),
            ratio: ParameterConfig::fixed(0.75),
            vol_frac: ParameterConfig::fixed(1.0),
        }
    }
}

impl BilayerConfig {
    /// Parses a configuration from JSON. Missing entries take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

/// Molecular composition of one lipid species
///
/// Scattering lengths are in Å (so `1e6 * b / vm` is an SLD in 10⁻⁶ Å⁻²),
/// molecular volumes in Å³. Every quantity is fixed unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LipidSpeciesConfig {
    /// Solvent scattering length density
    pub s_sld: ParameterConfig,

    /// Waters hydrating each head group
    pub water_per_lipid_head: ParameterConfig,

    /// Waters penetrating each tail group
    pub water_per_lipid_tail: ParameterConfig,

    /// Real part of the head group's bound scattering length
    pub b_heads_real: ParameterConfig,

    /// Imaginary part of the head group's bound scattering length
    pub b_heads_imag: ParameterConfig,

    /// Real part of the tail group's bound scattering length
    pub b_tails_real: ParameterConfig,

    /// Imaginary part of the tail group's bound scattering length
    pub b_tails_imag: ParameterConfig,

    /// Head group molecular volume
    pub vm_heads: ParameterConfig,

    /// Tail group molecular volume
    pub vm_tails: ParameterConfig,
}

impl LipidSpeciesConfig {
    /// A species with every quantity fixed at the given values
    #[allow(clippy::too_many_arguments)]
    pub fn fixed(
        s_sld: f64,
        water_per_lipid_head: f64,
        water_per_lipid_tail: f64,
        b_heads_real: f64,
        b_heads_imag: f64,
        b_tails_real: f64,
        b_tails_imag: f64,
        vm_heads: f64,
        vm_tails: f64,
    ) -> Self {
        Self {
            s_sld: ParameterConfig::fixed(s_sld),
            water_per_lipid_head: ParameterConfig::fixed(water_per_lipid_head),
            water_per_lipid_tail: ParameterConfig::fixed(water_per_lipid_tail),
            b_heads_real: ParameterConfig::fixed(b_heads_real),
            b_heads_imag: ParameterConfig::fixed(b_heads_imag),
            b_tails_real: ParameterConfig::fixed(b_tails_real),
            b_tails_imag: ParameterConfig::fixed(b_tails_imag),
            vm_heads: ParameterConfig::fixed(vm_heads),
            vm_tails: ParameterConfig::fixed(vm_tails),
        }
    }

    /// Parses a species configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a species configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
