//! # lipid-bilayer
//!
//! `lipid-bilayer` is a slab model of a mixed lipid bilayer for neutron and
//! X-ray reflectometry fitting.
//!
//! The library provides:
//! - A [`Bilayer`] component that mixes two [`LipidSpecies`] into four slabs
//!   (outer head, outer tail, inner tail, inner head)
//! - A [`Component`] contract for handing layer tables, parameters and priors
//!   to a fitting framework
//! - An explicit parameter system with bounds and vary flags
//! - Serde-backed configuration of starting values
//!
//! ## Basic Usage
//!
//! ```
//! use lipid_bilayer::config::LipidSpeciesConfig;
//! use lipid_bilayer::{Bilayer, Component, LipidSpecies, Slab, SlabColumn};
//!
//! let popc = LipidSpecies::new(
//!     "popc",
//!     &LipidSpeciesConfig::fixed(6.36, 8.0, 0.0, 6.0e-4, 0.0, -2.7e-4, 0.0, 300.0, 925.0),
//! )?;
//! let popg = LipidSpecies::new(
//!     "popg",
//!     &LipidSpeciesConfig::fixed(6.36, 8.0, 0.0, 7.0e-4, 0.0, -2.7e-4, 0.0, 250.0, 925.0),
//! )?;
//! let bilayer = Bilayer::new(popc, popg, None)?;
//!
//! let table = bilayer.slabs();
//! let volume = table[[Slab::OuterHead.row(), SlabColumn::Volume.index()]];
//! assert!((volume - 287.5 / 62.0).abs() < 1e-12);
//! # Ok::<(), lipid_bilayer::BilayerError>(())
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

pub mod bilayer;
pub mod component;
pub mod config;
pub mod lipid;
pub mod slab;

// Re-exports for convenience
pub use bilayer::Bilayer;
pub use component::{aggregate_parameters, distribute_parameters, total_logp, Component};
pub use error::{BilayerError, Result};
pub use lipid::LipidSpecies;
pub use slab::{Slab, SlabColumn, LAYER_TABLE_SHAPE};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
