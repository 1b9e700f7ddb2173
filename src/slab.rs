//! Row and column addressing for bilayer layer tables.
//!
//! A layer table is a 4×5 `Array2<f64>`: one row per [`Slab`], one column per
//! [`SlabColumn`].

/// Shape of a bilayer layer table, `(rows, columns)`
pub const LAYER_TABLE_SHAPE: (usize, usize) = (4, 5);

/// The four structural slabs of a bilayer, in depth order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slab {
    OuterHead,
    OuterTail,
    InnerTail,
    InnerHead,
}

impl Slab {
    /// All slabs in table-row order
    pub const ALL: [Slab; 4] = [
        Slab::OuterHead,
        Slab::OuterTail,
        Slab::InnerTail,
        Slab::InnerHead,
    ];

    /// Row of this slab in a layer table
    pub fn row(self) -> usize {
        match self {
            Slab::OuterHead => 0,
            Slab::OuterTail => 1,
            Slab::InnerTail => 2,
            Slab::InnerHead => 3,
        }
    }

    /// Whether the slab is made of head groups (as opposed to tails)
    pub fn is_head(self) -> bool {
        matches!(self, Slab::OuterHead | Slab::InnerHead)
    }

    /// Whether the slab belongs to the outer leaflet, which takes the top roughness
    pub fn is_outer(self) -> bool {
        matches!(self, Slab::OuterHead | Slab::OuterTail)
    }
}

/// Columns of a layer table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlabColumn {
    /// Volume of the slab's material per unit area
    Volume,
    /// Real part of the scattering length density
    SldReal,
    /// Imaginary part of the scattering length density
    SldImag,
    /// Interfacial roughness
    Roughness,
    /// Fraction of the slab occupied by solvent
    SolventFraction,
}

impl SlabColumn {
    /// All columns in table order
    pub const ALL: [SlabColumn; 5] = [
        SlabColumn::Volume,
        SlabColumn::SldReal,
        SlabColumn::SldImag,
        SlabColumn::Roughness,
        SlabColumn::SolventFraction,
    ];

    /// Column index in a layer table
    pub fn index(self) -> usize {
        match self {
            SlabColumn::Volume => 0,
            SlabColumn::SldReal => 1,
            SlabColumn::SldImag => 2,
            SlabColumn::Roughness => 3,
            SlabColumn::SolventFraction => 4,
        }
    }
}
