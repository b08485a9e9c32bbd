use nalgebra::Point3;

/// Represents a single atom or coarse-grained bead inside a monomer.
///
/// Atoms are owned exclusively by their `Monomer`. Both `index` and the
/// entries of `neighbours` are 1-based and monomer-local while the monomer is
/// a catalog template; once the monomer is placed into a growing structure
/// they are shifted into the global, consecutively numbered index space.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Force-field atom identifier (e.g. "CA", "N1"). Coarse-grained beads
    /// may carry none, in which case the element symbol stands in for it in
    /// serialized output.
    pub ff_identifier: Option<String>,
    /// Element symbol (e.g. "C", "N") or bead type label.
    pub element: String,
    /// Cartesian coordinates in length units (Angstroms for atomistic data).
    pub position: Point3<f64>,
    /// 1-based numbers of the atoms bonded to this one within the same
    /// monomer.
    pub neighbours: Vec<usize>,
    /// 1-based atom number; monomer-local at template time, globally unique
    /// once placed.
    pub index: usize,
}

impl Atom {
    /// Creates a new `Atom` with no force-field identifier and no neighbours.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol or bead type label.
    /// * `position` - The Cartesian coordinates of the atom.
    /// * `index` - The 1-based, monomer-local atom number.
    pub fn new(element: &str, position: Point3<f64>, index: usize) -> Self {
        Self {
            ff_identifier: None,
            element: element.to_string(),
            position,
            neighbours: Vec::new(),
            index,
        }
    }

    /// Returns the name written to the structure file for this atom: the
    /// force-field identifier when present, the element symbol otherwise.
    pub fn label(&self) -> &str {
        self.ff_identifier.as_deref().unwrap_or(&self.element)
    }
}
