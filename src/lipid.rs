//! Lipid species records.
//!
//! A [`LipidSpecies`] holds the nine composition parameters of one lipid
//! type. Parameter names are prefixed with the species name, which is what
//! lets a species shared between several components be aggregated once.

use crate::config::LipidSpeciesConfig;
use crate::error::Result;
use crate::parameters::{Parameter, Parameters};

/// Converts a bound scattering length (Å) over a molecular volume (Å³) to an
/// SLD in units of 10⁻⁶ Å⁻².
pub(crate) fn sld(b: f64, vm: f64) -> f64 {
    1e6 * b / vm
}

/// The composition parameters of one lipid species
#[derive(Debug, Clone, PartialEq)]
pub struct LipidSpecies {
    name: String,
    s_sld: Parameter,
    water_per_lipid_head: Parameter,
    water_per_lipid_tail: Parameter,
    b_heads_real: Parameter,
    b_heads_imag: Parameter,
    b_tails_real: Parameter,
    b_tails_imag: Parameter,
    vm_heads: Parameter,
    vm_tails: Parameter,
}

impl LipidSpecies {
    /// Creates a species named `name` from its configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use lipid_bilayer::config::LipidSpeciesConfig;
    /// use lipid_bilayer::LipidSpecies;
    ///
    /// let config = LipidSpeciesConfig::fixed(6.36, 8.0, 0.0, 6.0e-4, 0.0, -2.7e-4, 0.0, 330.0, 925.0);
    /// let popc = LipidSpecies::new("popc", &config).unwrap();
    /// assert_eq!(popc.vm_heads(), 330.0);
    /// assert_eq!(popc.parameters().len(), 9);
    /// ```
    pub fn new(name: &str, config: &LipidSpeciesConfig) -> Result<Self> {
        let param = |quantity: &str| format!("{} {}", name, quantity);

        Ok(Self {
            name: name.to_string(),
            s_sld: config.s_sld.build(&param("s_sld"))?,
            water_per_lipid_head: config
                .water_per_lipid_head
                .build(&param("water_per_lipid_head"))?,
            water_per_lipid_tail: config
                .water_per_lipid_tail
                .build(&param("water_per_lipid_tail"))?,
            b_heads_real: config.b_heads_real.build(&param("b_heads_real"))?,
            b_heads_imag: config.b_heads_imag.build(&param("b_heads_imag"))?,
            b_tails_real: config.b_tails_real.build(&param("b_tails_real"))?,
            b_tails_imag: config.b_tails_imag.build(&param("b_tails_imag"))?,
            vm_heads: config.vm_heads.build(&param("vm_heads"))?,
            vm_tails: config.vm_tails.build(&param("vm_tails"))?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn s_sld(&self) -> f64 {
        self.s_sld.value()
    }

    pub fn water_per_lipid_head(&self) -> f64 {
        self.water_per_lipid_head.value()
    }

    pub fn water_per_lipid_tail(&self) -> f64 {
        self.water_per_lipid_tail.value()
    }

    pub fn b_heads_real(&self) -> f64 {
        self.b_heads_real.value()
    }

    pub fn b_heads_imag(&self) -> f64 {
        self.b_heads_imag.value()
    }

    pub fn b_tails_real(&self) -> f64 {
        self.b_tails_real.value()
    }

    pub fn b_tails_imag(&self) -> f64 {
        self.b_tails_imag.value()
    }

    pub fn vm_heads(&self) -> f64 {
        self.vm_heads.value()
    }

    pub fn vm_tails(&self) -> f64 {
        self.vm_tails.value()
    }

    /// Real head group SLD, `1e6 * b_heads_real / vm_heads`
    pub fn heads_sld_real(&self) -> f64 {
        sld(self.b_heads_real(), self.vm_heads())
    }

    /// Imaginary head group SLD, `1e6 * b_heads_imag / vm_heads`
    pub fn heads_sld_imag(&self) -> f64 {
        sld(self.b_heads_imag(), self.vm_heads())
    }

    /// Real tail group SLD, `1e6 * b_tails_real / vm_tails`
    pub fn tails_sld_real(&self) -> f64 {
        sld(self.b_tails_real(), self.vm_tails())
    }

    /// Imaginary tail group SLD, `1e6 * b_tails_imag / vm_tails`
    pub fn tails_sld_imag(&self) -> f64 {
        sld(self.b_tails_imag(), self.vm_tails())
    }

    /// The nine species parameters in their canonical order
    pub fn parameters(&self) -> Parameters {
        self.fields().into_iter().cloned().collect()
    }

    /// Copies the values of any matching parameters in `params` into this species
    ///
    /// Returns how many parameters were updated.
    pub(crate) fn set_parameters(&mut self, params: &Parameters) -> usize {
        let mut updated = 0;
        for field in self.fields_mut() {
            if let Some(source) = params.get(field.name()) {
                *field = source.clone();
                updated += 1;
            }
        }
        updated
    }

    fn fields(&self) -> [&Parameter; 9] {
        [
            &self.s_sld,
            &self.water_per_lipid_head,
            &self.water_per_lipid_tail,
            &self.b_heads_real,
            &self.b_heads_imag,
            &self.b_tails_real,
            &self.b_tails_imag,
            &self.vm_heads,
            &self.vm_tails,
        ]
    }

    fn fields_mut(&mut self) -> [&mut Parameter; 9] {
        [
            &mut self.s_sld,
            &mut self.water_per_lipid_head,
            &mut self.water_per_lipid_tail,
            &mut self.b_heads_real,
            &mut self.b_heads_imag,
            &mut self.b_tails_real,
            &mut self.b_tails_imag,
            &mut self.vm_heads,
            &mut self.vm_tails,
        ]
    }
}
