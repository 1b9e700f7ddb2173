//! Parameters collection implementation
//!
//! `Parameters` is an ordered collection of uniquely named [`Parameter`]s.
//! Order is significant: it is the order in which a component reports its
//! parameters and the order in which an optimizer's proposal vector is
//! written back into the varying ones.

use crate::parameters::parameter::{Parameter, ParameterError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// An ordered collection of parameters with unique names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct Parameters {
    params: Vec<Parameter>,
}

impl Parameters {
    /// Create a new empty parameters collection
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::Parameters;
    ///
    /// let params = Parameters::new();
    /// assert_eq!(params.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a parameter to the end of the collection
    ///
    /// # Returns
    ///
    /// `Ok(())` if the parameter was added, or an error if a parameter with the
    /// same name already exists
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::new("apm", 62.0)).unwrap();
    /// assert!(params.add(Parameter::new("apm", 70.0)).is_err());
    /// assert_eq!(params.len(), 1);
    /// ```
    pub fn add(&mut self, param: Parameter) -> Result<(), ParameterError> {
        if self.contains(param.name()) {
            return Err(ParameterError::DuplicateName {
                name: param.name().to_string(),
            });
        }

        self.params.push(param);
        Ok(())
    }

    /// Append every parameter from an iterator, stopping at the first duplicate name
    pub fn extend<I>(&mut self, params: I) -> Result<(), ParameterError>
    where
        I: IntoIterator<Item = Parameter>,
    {
        for param in params {
            self.add(param)?;
        }
        Ok(())
    }

    /// Append the parameters of `other` whose names are not already present
    ///
    /// Returns the number of parameters that were appended. This is how
    /// parameter lists from several components are aggregated: a parameter
    /// shared between components only appears once, at its first position.
    pub fn merge(&mut self, other: Parameters) -> usize {
        let mut added = 0;
        for param in other.params {
            if !self.contains(param.name()) {
                self.params.push(param);
                added += 1;
            }
        }
        added
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// Get a mutable reference to a parameter by name
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::new("apm", 62.0)).unwrap();
    /// params.get_mut("apm").unwrap().set_value(70.0).unwrap();
    /// assert_eq!(params.get("apm").unwrap().value(), 70.0);
    /// ```
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.params.iter_mut().find(|p| p.name() == name)
    }

    /// Get a parameter by position
    pub fn get_index(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    /// Check if the collection contains a parameter with the given name
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name() == name)
    }

    /// Get the number of parameters in the collection
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    /// Get the names of all parameters, in order
    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name().to_string()).collect()
    }

    /// Get the values of all parameters, in order
    pub fn values(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.value()).collect()
    }

    /// Get the parameters that vary during optimization, in order
    pub fn varying(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| p.vary()).collect()
    }

    /// Get the parameters that are held fixed, in order
    pub fn fixed(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| !p.vary()).collect()
    }

    /// Get the values of the varying parameters, in order
    ///
    /// This is the vector an optimizer works on.
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::new("apm", 62.0)).unwrap();
    /// params.add(Parameter::fixed("ratio", 0.75)).unwrap();
    /// assert_eq!(params.varying_values(), vec![62.0]);
    /// ```
    pub fn varying_values(&self) -> Vec<f64> {
        self.params
            .iter()
            .filter(|p| p.vary())
            .map(|p| p.value())
            .collect()
    }

    /// Write an optimizer proposal into the varying parameters
    ///
    /// `values` must have one entry per varying parameter, in collection order.
    /// Every value is bounds-checked before any parameter is modified, so a
    /// rejected proposal leaves the collection untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::with_bounds("apm", 62.0, 60.0, 150.0).unwrap()).unwrap();
    /// params.add(Parameter::fixed("ratio", 0.75)).unwrap();
    ///
    /// params.update_varying(&[80.0]).unwrap();
    /// assert_eq!(params.values(), vec![80.0, 0.75]);
    ///
    /// assert!(params.update_varying(&[10.0]).is_err());
    /// assert!(params.update_varying(&[80.0, 0.5]).is_err());
    /// ```
    pub fn update_varying(&mut self, values: &[f64]) -> Result<(), ParameterError> {
        let expected = self.params.iter().filter(|p| p.vary()).count();
        if values.len() != expected {
            return Err(ParameterError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }

        // Validate on a copy so a failure midway does not leave a partial update
        let mut updated = self.params.clone();
        for (param, &value) in updated.iter_mut().filter(|p| p.vary()).zip(values) {
            param.set_value(value)?;
        }
        self.params = updated;

        Ok(())
    }

    /// Sum of the bounds priors of the varying parameters
    ///
    /// Fixed parameters do not contribute.
    pub fn logp(&self) -> f64 {
        self.params
            .iter()
            .filter(|p| p.vary())
            .map(|p| p.logp())
            .sum()
    }
}

impl TryFrom<Vec<Parameter>> for Parameters {
    type Error = ParameterError;

    fn try_from(params: Vec<Parameter>) -> Result<Self, Self::Error> {
        let mut collection = Parameters::new();
        collection.extend(params)?;
        Ok(collection)
    }
}

impl From<Parameters> for Vec<Parameter> {
    fn from(params: Parameters) -> Self {
        params.params
    }
}

/// Collects parameters in order, keeping the first of any repeated name.
impl FromIterator<Parameter> for Parameters {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut collection = Parameters::new();
        for param in iter {
            if !collection.contains(param.name()) {
                collection.params.push(param);
            }
        }
        collection
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Error that can occur during serialization/deserialization
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Parameters {
    /// Save parameters to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SerializationError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Save parameters to a JSON string
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::with_bounds("apm", 62.0, 60.0, 150.0).unwrap()).unwrap();
    ///
    /// let json = params.to_json().unwrap();
    /// let restored = Parameters::from_json(&json).unwrap();
    /// assert_eq!(restored, params);
    /// ```
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Load parameters from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, SerializationError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load parameters from a JSON string
    ///
    /// Duplicate names and inverted bounds are rejected.
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let params = serde_json::from_str(json)?;
        Ok(params)
    }
}
