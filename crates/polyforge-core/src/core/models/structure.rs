use super::atom::Atom;
use crate::core::utils::geometry;
use nalgebra::Point3;

/// One monomer instance placed into a structure: its atoms carry global,
/// consecutively numbered indices and final Cartesian positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedResidue {
    /// Residue name, taken from the monomer template.
    pub name: String,
    /// 1-based residue sequence number within the structure.
    pub serial: usize,
    /// The placed atoms, in template order.
    pub atoms: Vec<Atom>,
}

/// A completed assembly: placed residues plus the bond records between their
/// atoms, ready for serialization.
///
/// Invariant: atom indices across all residues are exactly `1..=atom_count`,
/// with no gaps or repeats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    residues: Vec<PlacedResidue>,
    bonds: Vec<(usize, usize)>,
    atom_count: usize,
}

impl Structure {
    pub fn new(residues: Vec<PlacedResidue>, bonds: Vec<(usize, usize)>) -> Self {
        let atom_count = residues.iter().map(|residue| residue.atoms.len()).sum();
        Self {
            residues,
            bonds,
            atom_count,
        }
    }

    pub fn residues(&self) -> &[PlacedResidue] {
        &self.residues
    }

    pub fn bonds(&self) -> &[(usize, usize)] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Iterates over all atoms in residue order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = &Atom> {
        self.residues.iter().flat_map(|residue| residue.atoms.iter())
    }

    /// Global minimum pairwise distance between distinct atoms, coincident
    /// points excluded. `None` for structures with fewer than two distinct
    /// positions.
    pub fn min_pairwise_distance(&self) -> Option<f64> {
        let positions: Vec<Point3<f64>> = self.atoms_iter().map(|atom| atom.position).collect();
        geometry::min_pairwise_distance(&positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residue(serial: usize, first_index: usize, positions: &[[f64; 3]]) -> PlacedResidue {
        PlacedResidue {
            name: "GLY".to_string(),
            serial,
            atoms: positions
                .iter()
                .enumerate()
                .map(|(offset, p)| {
                    Atom::new("C", Point3::new(p[0], p[1], p[2]), first_index + offset)
                })
                .collect(),
        }
    }

    #[test]
    fn atom_count_sums_over_residues() {
        let structure = Structure::new(
            vec![
                residue(1, 1, &[[0.0, 0.0, 0.0], [1.5, 0.0, 0.0]]),
                residue(2, 3, &[[0.0, 3.0, 0.0]]),
            ],
            vec![(2, 3)],
        );

        assert_eq!(structure.atom_count(), 3);
        assert_eq!(structure.residue_count(), 2);
        assert_eq!(structure.bonds(), &[(2, 3)]);
    }

    #[test]
    fn atoms_iter_walks_residues_in_order() {
        let structure = Structure::new(
            vec![
                residue(1, 1, &[[0.0, 0.0, 0.0]]),
                residue(2, 2, &[[2.0, 0.0, 0.0]]),
            ],
            Vec::new(),
        );

        let indices: Vec<_> = structure.atoms_iter().map(|atom| atom.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn min_pairwise_distance_spans_residue_boundaries() {
        let structure = Structure::new(
            vec![
                residue(1, 1, &[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]),
                residue(2, 3, &[[0.0, 2.0, 0.0]]),
            ],
            Vec::new(),
        );

        let min = structure.min_pairwise_distance().unwrap();
        assert!((min - 2.0).abs() < 1e-12);
    }
}
