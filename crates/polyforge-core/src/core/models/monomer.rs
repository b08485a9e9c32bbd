use super::atom::Atom;
use nalgebra::{Point3, Vector3};
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Resolution tier of a monomer: how coarsely its structure is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Every atom, hydrogens included.
    Atomistic,
    /// Heavy atoms only, hydrogens folded into their parents.
    UnitedAtom,
    /// Bead-based representation, several atoms per interaction site.
    CoarseGrained,
}

/// Two-letter resolution codes as they appear in sequence specification
/// files.
static RESOLUTION_CODES: Map<&'static str, Resolution> = phf_map! {
    "AA" => Resolution::Atomistic,
    "UA" => Resolution::UnitedAtom,
    "CG" => Resolution::CoarseGrained,
};

impl Resolution {
    /// Resolves a two-letter sequence-file code (`AA`, `UA`, `CG`).
    ///
    /// # Return
    ///
    /// Returns `Some(Resolution)` for a known code, otherwise `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        RESOLUTION_CODES.get(code).copied()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Atomistic => "atomistic",
            Resolution::UnitedAtom => "united_atom",
            Resolution::CoarseGrained => "coarse_grained",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Resolution {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atomistic" => Ok(Resolution::Atomistic),
            "united_atom" => Ok(Resolution::UnitedAtom),
            "coarse_grained" => Ok(Resolution::CoarseGrained),
            _ => Err(()),
        }
    }
}

/// The bond attachment points of a monomer.
///
/// Either endpoint may be absent: capping groups expose a single attachment
/// point, and isolated units none at all. Endpoint values are 1-based atom
/// numbers in the owning monomer's index space (global once placed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonomerLink {
    /// Atom number of the C-terminus analog (trailing attachment point).
    pub c_terminus: Option<usize>,
    /// Atom number of the N-terminus analog (leading attachment point).
    pub n_terminus: Option<usize>,
}

impl MonomerLink {
    pub fn new(c_terminus: Option<usize>, n_terminus: Option<usize>) -> Self {
        Self {
            c_terminus,
            n_terminus,
        }
    }

    /// Returns the link with its endpoints swapped, modelling the reversed
    /// orientation of an asymmetric building block.
    pub fn reversed(self) -> Self {
        Self {
            c_terminus: self.n_terminus,
            n_terminus: self.c_terminus,
        }
    }

    /// Returns the link with both endpoints shifted by `offset`.
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            c_terminus: self.c_terminus.map(|i| i + offset),
            n_terminus: self.n_terminus.map(|i| i + offset),
        }
    }

    /// Iterates over the present endpoints, C-terminus first.
    pub fn endpoints(self) -> impl Iterator<Item = usize> {
        [self.c_terminus, self.n_terminus].into_iter().flatten()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonomerError {
    #[error("Inversion not possible for '{name}': polymer repeat units are not invertible")]
    NotInvertible { name: String },

    #[error(
        "Link endpoint {endpoint} of monomer '{name}' references atom {index}, but the monomer has {atom_count} atoms"
    )]
    LinkOutOfRange {
        name: String,
        endpoint: &'static str,
        index: usize,
        atom_count: usize,
    },

    #[error("Monomer '{name}' contains no atoms")]
    Empty { name: String },
}

/// A reusable structural building block: an amino acid, a polymer repeat
/// unit, or a capping group, with a fixed local atom layout.
///
/// Catalog templates keep monomer-local, 1-based atom numbering. The engine
/// never mutates a template; placement derives fresh instances via
/// [`Monomer::renumbered`] and [`Monomer::translated`].
#[derive(Debug, Clone, PartialEq)]
pub struct Monomer {
    /// Residue name (e.g. "GLY", "PEO").
    pub name: String,
    /// Resolution tier of this template.
    pub resolution: Resolution,
    /// Number of atoms; always equal to `atoms.len()`.
    pub atom_count: usize,
    /// The atoms, ordered by their 1-based `index`.
    pub atoms: Vec<Atom>,
    /// Bond attachment points for chaining.
    pub link: MonomerLink,
    /// True for non-invertible structural repeat units.
    pub polymer: bool,
    /// True when this instance is the inverted form of a catalog entry.
    pub inverted: bool,
}

impl Monomer {
    /// Creates a monomer, deriving `atom_count` from the atom list.
    ///
    /// # Errors
    ///
    /// Returns [`MonomerError::Empty`] for an atom-free monomer and
    /// [`MonomerError::LinkOutOfRange`] when a link endpoint does not
    /// reference a valid 1-based atom number.
    pub fn new(
        name: &str,
        resolution: Resolution,
        atoms: Vec<Atom>,
        link: MonomerLink,
        polymer: bool,
    ) -> Result<Self, MonomerError> {
        if atoms.is_empty() {
            return Err(MonomerError::Empty {
                name: name.to_string(),
            });
        }
        for (endpoint, value) in [("C-terminus", link.c_terminus), ("N-terminus", link.n_terminus)]
        {
            if let Some(index) = value {
                if index == 0 || index > atoms.len() {
                    return Err(MonomerError::LinkOutOfRange {
                        name: name.to_string(),
                        endpoint,
                        index,
                        atom_count: atoms.len(),
                    });
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            resolution,
            atom_count: atoms.len(),
            atoms,
            link,
            polymer,
            inverted: false,
        })
    }

    /// Returns true when this monomer matches the given catalog identity.
    /// Catalog identity is `(name, resolution)` only; atoms and link take no
    /// part in it.
    pub fn matches(&self, name: &str, resolution: Resolution) -> bool {
        self.name == name && self.resolution == resolution
    }

    /// Returns the inverted counterpart of this monomer: the link endpoints
    /// swapped, the `inverted` flag toggled, everything else deep-copied.
    ///
    /// # Errors
    ///
    /// Returns [`MonomerError::NotInvertible`] for `polymer` monomers, whose
    /// repeat units have no meaningful reversed orientation.
    pub fn invert(&self) -> Result<Self, MonomerError> {
        if self.polymer {
            return Err(MonomerError::NotInvertible {
                name: self.name.clone(),
            });
        }

        let mut inverted = self.clone();
        inverted.link = inverted.link.reversed();
        inverted.inverted = !inverted.inverted;
        Ok(inverted)
    }

    /// Returns a copy with every atom index, neighbour reference, and link
    /// endpoint shifted by `offset`, moving the monomer into the global
    /// numbering space of a structure that already holds `offset` atoms.
    pub fn renumbered(&self, offset: usize) -> Self {
        let mut shifted = self.clone();
        shifted.link = shifted.link.shifted(offset);
        for atom in &mut shifted.atoms {
            atom.index += offset;
            for neighbour in &mut atom.neighbours {
                *neighbour += offset;
            }
        }
        shifted
    }

    /// Returns a copy with every atom position translated by `shift`.
    pub fn translated(&self, shift: &Vector3<f64>) -> Self {
        let mut moved = self.clone();
        for atom in &mut moved.atoms {
            atom.position += *shift;
        }
        moved
    }

    /// Returns a copy translated so that atom #1 sits at the origin.
    pub fn normalized(&self) -> Self {
        let origin_shift = -self.atoms[0].position.coords;
        self.translated(&origin_shift)
    }

    /// Collects the atom positions in atom order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|atom| atom.position).collect()
    }
}
