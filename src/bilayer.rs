//! Mixed lipid bilayer component.
//!
//! The bilayer is modelled as four slabs: outer head groups, outer tails,
//! inner tails and inner head groups. Each slab's volume and scattering
//! length density is a ratio-weighted mix of two lipid species, normalised by
//! the area per molecule.

use crate::component::Component;
use crate::config::BilayerConfig;
use crate::error::{BilayerError, Result};
use crate::lipid::LipidSpecies;
use crate::parameters::{Parameter, Parameters};
use crate::slab::{Slab, SlabColumn, LAYER_TABLE_SHAPE};
use log::{debug, trace, warn};
use ndarray::Array2;

/// Name given to a bilayer constructed without one
pub const DEFAULT_NAME: &str = "bilayer";

/// A bilayer made from a mixture of two lipid species
///
/// The first species is weighted by the mixing ratio, the second by one minus
/// the ratio.
#[derive(Debug, Clone)]
pub struct Bilayer {
    name: String,
    popc: LipidSpecies,
    popg: LipidSpecies,
    apm: Parameter,
    roughness_top: Parameter,
    roughness_bottom: Parameter,
    ratio: Parameter,
    vol_frac: Parameter,
}

impl Bilayer {
    /// Creates a bilayer with the default parameter set
    ///
    /// | parameter | default | vary | bounds |
    /// |---|---|---|---|
    /// | area per molecule | 62 | yes | [60, 150] |
    /// | roughness top | 12.0 | yes | [2, 20] |
    /// | roughness bottom | 10.3 | yes | [4, 15] |
    /// | ratio | 0.75 | no | |
    /// | volume fraction | 1.0 | no | |
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::config::LipidSpeciesConfig;
    /// use lipid_bilayer::{Bilayer, Component, LipidSpecies};
    ///
    /// let popc = LipidSpecies::new(
    ///     "popc",
    ///     &LipidSpeciesConfig::fixed(6.36, 8.0, 0.0, 6.0e-4, 0.0, -2.7e-4, 0.0, 330.0, 925.0),
    /// ).unwrap();
    /// let popg = LipidSpecies::new(
    ///     "popg",
    ///     &LipidSpeciesConfig::fixed(6.36, 8.0, 0.0, 7.0e-4, 0.0, -2.7e-4, 0.0, 290.0, 925.0),
    /// ).unwrap();
    ///
    /// let bilayer = Bilayer::new(popc, popg, None).unwrap();
    /// assert_eq!(bilayer.name(), "bilayer");
    /// assert_eq!(bilayer.slabs().dim(), (4, 5));
    /// assert_eq!(bilayer.parameters().len(), 23);
    /// ```
    pub fn new(popc: LipidSpecies, popg: LipidSpecies, name: Option<&str>) -> Result<Self> {
        Self::from_config(popc, popg, name, &BilayerConfig::default())
    }

    /// Creates a bilayer whose own parameters start from `config`
    ///
    /// Fails if the configuration is invalid or if any two of the 23
    /// parameter names collide, e.g. when both species share a name.
    pub fn from_config(
        popc: LipidSpecies,
        popg: LipidSpecies,
        name: Option<&str>,
        config: &BilayerConfig,
    ) -> Result<Self> {
        let name = name.unwrap_or(DEFAULT_NAME);
        let param = |suffix: &str| format!("{} {}", name, suffix);

        let bilayer = Self {
            name: name.to_string(),
            apm: config.apm.build(&param("Area Per Molecule Angstrom^-3"))?,
            roughness_top: config
                .roughness_top
                .build(&param("roughness top Angstrom^-1"))?,
            roughness_bottom: config
                .roughness_bottom
                .build(&param("roughness bottom Angstrom^-1"))?,
            ratio: config.ratio.build(&param("ratio of Popc to Popg"))?,
            vol_frac: config
                .vol_frac
                .build(&param("volume fraction of bilayer"))?,
            popc,
            popg,
        };

        let mut names = Parameters::new();
        for p in bilayer.parameter_list() {
            if names.add(p).is_err() {
                return Err(BilayerError::InvalidConfig(format!(
                    "bilayer '{}' has colliding parameter names (species '{}' and '{}')",
                    bilayer.name,
                    bilayer.popc.name(),
                    bilayer.popg.name()
                )));
            }
        }

        debug!(
            "created bilayer '{}' from '{}' and '{}' ({} varying parameters)",
            bilayer.name,
            bilayer.popc.name(),
            bilayer.popg.name(),
            names.varying().len()
        );

        Ok(bilayer)
    }

    /// The first lipid species, weighted by the ratio
    pub fn popc(&self) -> &LipidSpecies {
        &self.popc
    }

    /// The second lipid species, weighted by one minus the ratio
    pub fn popg(&self) -> &LipidSpecies {
        &self.popg
    }

    /// Area per molecule
    pub fn apm(&self) -> &Parameter {
        &self.apm
    }

    pub fn apm_mut(&mut self) -> &mut Parameter {
        &mut self.apm
    }

    /// Roughness applied to the outer leaflet's slabs
    pub fn roughness_top(&self) -> &Parameter {
        &self.roughness_top
    }

    pub fn roughness_top_mut(&mut self) -> &mut Parameter {
        &mut self.roughness_top
    }

    /// Roughness applied to the inner leaflet's slabs
    pub fn roughness_bottom(&self) -> &Parameter {
        &self.roughness_bottom
    }

    pub fn roughness_bottom_mut(&mut self) -> &mut Parameter {
        &mut self.roughness_bottom
    }

    /// Fraction of the first species in the mixture
    pub fn ratio(&self) -> &Parameter {
        &self.ratio
    }

    pub fn ratio_mut(&mut self) -> &mut Parameter {
        &mut self.ratio
    }

    /// Volume fraction of bilayer material; the remainder is solvent
    pub fn vol_frac(&self) -> &Parameter {
        &self.vol_frac
    }

    pub fn vol_frac_mut(&mut self) -> &mut Parameter {
        &mut self.vol_frac
    }

    /// Ratio-weighted mix of a per-species quantity, divided by the area per molecule
    fn mix<F>(&self, quantity: F) -> f64
    where
        F: Fn(&LipidSpecies) -> f64,
    {
        let ratio = self.ratio.value();
        (ratio * quantity(&self.popc) + (1.0 - ratio) * quantity(&self.popg)) / self.apm.value()
    }

    /// Head group volume per unit area
    pub fn heads_volume(&self) -> f64 {
        self.mix(LipidSpecies::vm_heads)
    }

    /// Tail group volume per unit area
    pub fn tails_volume(&self) -> f64 {
        self.mix(LipidSpecies::vm_tails)
    }

    /// Real head group SLD, mixed and divided by the area per molecule
    pub fn heads_sld_real(&self) -> f64 {
        self.mix(LipidSpecies::heads_sld_real)
    }

    /// Imaginary head group SLD, mixed and divided by the area per molecule
    pub fn heads_sld_imag(&self) -> f64 {
        self.mix(LipidSpecies::heads_sld_imag)
    }

    /// Real tail group SLD, mixed and divided by the area per molecule
    pub fn tails_sld_real(&self) -> f64 {
        self.mix(LipidSpecies::tails_sld_real)
    }

    /// Imaginary tail group SLD, mixed and divided by the area per molecule
    pub fn tails_sld_imag(&self) -> f64 {
        self.mix(LipidSpecies::tails_sld_imag)
    }

    fn parameter_list(&self) -> Vec<Parameter> {
        let mut list: Vec<Parameter> = self.popc.parameters().into_iter().collect();
        list.extend(self.popg.parameters());
        list.extend([
            self.apm.clone(),
            self.roughness_top.clone(),
            self.roughness_bottom.clone(),
            self.ratio.clone(),
            self.vol_frac.clone(),
        ]);
        list
    }
}

impl Component for Bilayer {
    fn name(&self) -> &str {
        &self.name
    }

    /// Layer table with rows outer head, outer tail, inner tail, inner head
    ///
    /// Head rows take the head formulas and tail rows the tail formulas; the
    /// outer leaflet takes the top roughness and the inner leaflet the bottom
    /// roughness. A degenerate area per molecule produces inf/NaN entries
    /// rather than an error.
    fn slabs(&self) -> Array2<f64> {
        let mut table = Array2::zeros(LAYER_TABLE_SHAPE);

        let heads = [
            self.heads_volume(),
            self.heads_sld_real(),
            self.heads_sld_imag(),
        ];
        let tails = [
            self.tails_volume(),
            self.tails_sld_real(),
            self.tails_sld_imag(),
        ];
        let solvent = 1.0 - self.vol_frac.value();

        for slab in Slab::ALL {
            let [volume, sld_real, sld_imag] = if slab.is_head() { heads } else { tails };
            let roughness = if slab.is_outer() {
                self.roughness_top.value()
            } else {
                self.roughness_bottom.value()
            };

            let row = slab.row();
            table[[row, SlabColumn::Volume.index()]] = volume;
            table[[row, SlabColumn::SldReal.index()]] = sld_real;
            table[[row, SlabColumn::SldImag.index()]] = sld_imag;
            table[[row, SlabColumn::Roughness.index()]] = roughness;
            table[[row, SlabColumn::SolventFraction.index()]] = solvent;
        }

        if table.iter().any(|v| !v.is_finite()) {
            warn!(
                "bilayer '{}' produced non-finite slab values (area per molecule = {})",
                self.name,
                self.apm.value()
            );
        }
        trace!("bilayer '{}' slabs: {:?}", self.name, table);

        table
    }

    /// All 23 parameters: nine per species, then area per molecule, roughness
    /// top, roughness bottom, ratio and volume fraction.
    fn parameters(&self) -> Parameters {
        self.parameter_list().into_iter().collect()
    }

    fn set_parameters(&mut self, params: &Parameters) -> usize {
        let mut updated = self.popc.set_parameters(params) + self.popg.set_parameters(params);

        for own in [
            &mut self.apm,
            &mut self.roughness_top,
            &mut self.roughness_bottom,
            &mut self.ratio,
            &mut self.vol_frac,
        ] {
            if let Some(source) = params.get(own.name()) {
                *own = source.clone();
                updated += 1;
            }
        }

        debug!("bilayer '{}' took {} parameter updates", self.name, updated);
        updated
    }

    /// The bilayer imposes no prior beyond its parameters' bounds
    fn logp(&self) -> f64 {
        0.0
    }
}
