use super::placement::PlacedMonomer;
use crate::core::models::atom::Atom;
use crate::core::models::monomer::MonomerLink;
use crate::core::models::structure::{PlacedResidue, Structure};
use nalgebra::{Point3, Vector3};
use std::collections::HashSet;

/// Accumulates bond endpoints across one generation attempt.
///
/// `links` holds the flat list of chain attachment points in placement
/// order; chain bonds are every adjacent pair of that list, which pairs each
/// residue's trailing terminus with the next residue's leading terminus.
/// Explicit intra-residue bonds are deduplicated symmetrically, keeping the
/// first-seen orientation.
#[derive(Debug, Default)]
pub struct BondRecorder {
    links: Vec<usize>,
    explicit: Vec<(usize, usize)>,
    seen_explicit: HashSet<(usize, usize)>,
}

impl BondRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the renumbered attachment points of a placed monomer,
    /// C-terminus first, absent endpoints skipped.
    pub fn record_links(&mut self, link: MonomerLink) {
        self.links.extend(link.endpoints());
    }

    /// Records one candidate pair per atom neighbour; a pair and its reverse
    /// count as the same bond.
    pub fn record_explicit(&mut self, atoms: &[Atom]) {
        for atom in atoms {
            for &neighbour in &atom.neighbours {
                let key = (atom.index.min(neighbour), atom.index.max(neighbour));
                if self.seen_explicit.insert(key) {
                    self.explicit.push((atom.index, neighbour));
                }
            }
        }
    }

    pub fn links(&self) -> &[usize] {
        &self.links
    }

    /// Flattens the recorder into serialization-ready bond records: explicit
    /// bonds first, chain bonds after, matching the output record order.
    /// With `dedup` set, records repeating an already-emitted unordered pair
    /// are dropped.
    pub fn into_bonds(self, dedup: bool) -> Vec<(usize, usize)> {
        let mut bonds = self.explicit;
        bonds.extend(self.links.windows(2).map(|pair| (pair[0], pair[1])));

        if dedup {
            let mut seen = HashSet::new();
            bonds.retain(|&(a, b)| seen.insert((a.min(b), a.max(b))));
        }
        bonds
    }
}

/// The running state of a single generation attempt.
///
/// Created fresh for every attempt and discarded wholesale when the cycle
/// controller restarts; nothing here survives a retry.
#[derive(Debug)]
pub struct AttemptState {
    coordinates: Vec<Point3<f64>>,
    atom_count: usize,
    res_count: usize,
    cumulative_shift: Vector3<f64>,
    bonds: BondRecorder,
    residues: Vec<PlacedResidue>,
}

impl AttemptState {
    /// Starts an attempt with the seed row at the origin, which anchors the
    /// first placement away from the chain start.
    pub fn new() -> Self {
        Self {
            coordinates: vec![Point3::origin()],
            atom_count: 0,
            res_count: 0,
            cumulative_shift: Vector3::zeros(),
            bonds: BondRecorder::new(),
            residues: Vec::new(),
        }
    }

    /// All coordinates occupied so far, the seed row included.
    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn res_count(&self) -> usize {
        self.res_count
    }

    pub fn cumulative_shift(&self) -> Vector3<f64> {
        self.cumulative_shift
    }

    /// Folds a successful placement into the attempt: advances the
    /// cumulative shift, occupies the new coordinates, records bonds, and
    /// appends the residue.
    pub fn record(&mut self, placed: PlacedMonomer, explicit_bonds: bool) {
        self.cumulative_shift += placed.draw;

        let monomer = placed.monomer;
        self.coordinates
            .extend(monomer.atoms.iter().map(|atom| atom.position));
        self.bonds.record_links(monomer.link);
        if explicit_bonds {
            self.bonds.record_explicit(&monomer.atoms);
        }

        self.atom_count += monomer.atom_count;
        self.res_count += 1;
        self.residues.push(PlacedResidue {
            name: monomer.name,
            serial: self.res_count,
            atoms: monomer.atoms,
        });
    }

    /// Finalizes the attempt into a serializable structure.
    pub fn into_structure(self, dedup_bonds: bool) -> Structure {
        let bonds = self.bonds.into_bonds(dedup_bonds);
        Structure::new(self.residues, bonds)
    }
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::monomer::{Monomer, Resolution};

    fn placed_gly(atom_offset: usize, z: f64) -> PlacedMonomer {
        let index = |local: usize| local + atom_offset;
        let mut n = Atom::new("N", Point3::new(0.0, 0.0, z), index(1));
        n.neighbours = vec![index(2)];
        let mut ca = Atom::new("C", Point3::new(1.0, 0.5, z), index(2));
        ca.neighbours = vec![index(1), index(3)];
        let mut c = Atom::new("C", Point3::new(2.0, 0.0, z), index(3));
        c.neighbours = vec![index(2)];

        let monomer = Monomer {
            name: "GLY".to_string(),
            resolution: Resolution::UnitedAtom,
            atom_count: 3,
            atoms: vec![n, ca, c],
            link: MonomerLink::new(Some(index(3)), Some(index(1))),
            polymer: false,
            inverted: false,
        };

        PlacedMonomer {
            monomer,
            draw: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn new_state_holds_only_the_seed_row() {
        let state = AttemptState::new();
        assert_eq!(state.coordinates(), &[Point3::origin()]);
        assert_eq!(state.atom_count(), 0);
        assert_eq!(state.res_count(), 0);
        assert_eq!(state.cumulative_shift(), Vector3::zeros());
    }

    #[test]
    fn record_advances_counters_shift_and_coordinates() {
        let mut state = AttemptState::new();
        state.record(placed_gly(0, 2.0), false);

        assert_eq!(state.atom_count(), 3);
        assert_eq!(state.res_count(), 1);
        assert_eq!(state.cumulative_shift(), Vector3::new(0.0, 0.0, 1.0));
        // Seed row plus three placed atoms.
        assert_eq!(state.coordinates().len(), 4);

        state.record(placed_gly(3, 5.0), false);
        assert_eq!(state.atom_count(), 6);
        assert_eq!(state.res_count(), 2);
        assert_eq!(state.cumulative_shift(), Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn chain_bonds_pair_adjacent_link_entries() {
        let mut state = AttemptState::new();
        state.record(placed_gly(0, 0.0), false);
        state.record(placed_gly(3, 3.0), false);

        let structure = state.into_structure(true);
        // Flat link list [3, 1, 6, 4] pairs into (3,1), (1,6), (6,4); the
        // middle record bonds residue 1 to residue 2.
        assert_eq!(structure.bonds(), &[(3, 1), (1, 6), (6, 4)]);
    }

    #[test]
    fn explicit_bonds_are_deduplicated_symmetrically() {
        let mut state = AttemptState::new();
        state.record(placed_gly(0, 0.0), true);

        let structure = state.into_structure(false);
        let explicit: Vec<_> = structure
            .bonds()
            .iter()
            .copied()
            .filter(|&pair| pair != (3, 1))
            .collect();

        // (1,2) and (2,1) collapse to the first-seen orientation; same for
        // (2,3)/(3,2). The chain pair (3,1) is recorded separately.
        assert_eq!(explicit, vec![(1, 2), (2, 3)]);
    }

    // A ring-closed variant whose explicit bond (3,1) coincides with its own
    // chain attachment pair.
    fn placed_ring() -> PlacedMonomer {
        let mut placed = placed_gly(0, 0.0);
        placed.monomer.atoms[2].neighbours = vec![2, 1];
        placed
    }

    #[test]
    fn dedup_drops_chain_records_already_emitted_explicitly() {
        let mut state = AttemptState::new();
        state.record(placed_ring(), true);

        let structure = state.into_structure(true);
        // Explicit records (1,2), (2,3), (3,1) already cover the chain pair
        // (3,1), so it is dropped.
        assert_eq!(structure.bonds(), &[(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn disabling_dedup_keeps_the_raw_record_stream() {
        let mut state = AttemptState::new();
        state.record(placed_ring(), true);

        let structure = state.into_structure(false);
        assert_eq!(structure.bonds(), &[(1, 2), (2, 3), (3, 1), (3, 1)]);
    }

    #[test]
    fn residues_carry_consecutive_serials() {
        let mut state = AttemptState::new();
        state.record(placed_gly(0, 0.0), false);
        state.record(placed_gly(3, 3.0), false);

        let structure = state.into_structure(true);
        let serials: Vec<_> = structure.residues().iter().map(|r| r.serial).collect();
        assert_eq!(serials, vec![1, 2]);
    }
}
