//! The component contract shared with a reflectometry fitting framework.
//!
//! A component describes part of a sample as a table of slabs, owns the fit
//! parameters that table depends on and may add a prior term to the fit's
//! log-posterior. Parameters move explicitly: the framework asks every
//! component for its [`Parameters`], aggregates them, lets its optimizer
//! propose values and hands the updated collection back.

use crate::parameters::Parameters;
use ndarray::Array2;

/// A model component that can be placed in a reflectometry sample
pub trait Component {
    /// Name of the component
    fn name(&self) -> &str;

    /// Layer table computed from the current parameter values
    ///
    /// Each row is one slab: `[volume, sld_real, sld_imag, roughness, solvent_fraction]`.
    fn slabs(&self) -> Array2<f64>;

    /// Ordered snapshot of every parameter the layer table depends on
    fn parameters(&self) -> Parameters;

    /// Copies parameters from `params` into the component, matching by name
    ///
    /// Parameters the component does not own are ignored and owned parameters
    /// missing from `params` keep their current state. Returns the number of
    /// parameters that were updated.
    fn set_parameters(&mut self, params: &Parameters) -> usize;

    /// Contribution of the component to the log-prior, on top of the bounds
    /// already carried by its parameters.
    fn logp(&self) -> f64 {
        0.0
    }
}

/// Aggregates the parameters of several components into one ordered collection
///
/// Parameters appear in component order; a parameter shared by several
/// components (the same name) appears once, where it is first seen.
pub fn aggregate_parameters(components: &[&dyn Component]) -> Parameters {
    let mut all = Parameters::new();
    for component in components {
        all.merge(component.parameters());
    }
    all
}

/// Pushes an aggregated collection back into every component
///
/// Returns the total number of parameter updates across components.
pub fn distribute_parameters(components: &mut [&mut dyn Component], params: &Parameters) -> usize {
    components
        .iter_mut()
        .map(|component| component.set_parameters(params))
        .sum()
}

/// Sum of the components' own prior contributions
pub fn total_logp(components: &[&dyn Component]) -> f64 {
    components.iter().map(|component| component.logp()).sum()
}
