use super::config::GenerationConfig;
use super::walk;
use crate::core::models::monomer::Monomer;
use nalgebra::{Point3, Vector3};
use rand::Rng;

/// A monomer instance placed into the growing structure: renumbered into the
/// global index space and translated to its final position, together with
/// the random draw that placed it.
#[derive(Debug, Clone)]
pub struct PlacedMonomer {
    pub monomer: Monomer,
    /// The accepted draw; the caller folds this into its cumulative shift.
    pub draw: Vector3<f64>,
}

/// Places one monomer instance without atomic overlap.
///
/// The template is first normalized so its atom #1 sits at the origin, then
/// a clash-free random translation is searched for starting from the current
/// `cumulative_shift`. The z draw is biased by
/// `atom_count x damping_factor`, pushing bulkier monomers farther along the
/// growth axis.
///
/// The template and all shared state are left untouched; the returned
/// monomer is a fully independent instance with atom indices, neighbour
/// references, and link endpoints shifted by `atom_offset`.
///
/// # Return
///
/// `None` when no acceptable draw was found within the configured iteration
/// budget; the caller escalates this into a whole-structure retry.
pub fn place_monomer(
    placed: &[Point3<f64>],
    template: &Monomer,
    atom_offset: usize,
    cumulative_shift: Vector3<f64>,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> Option<PlacedMonomer> {
    let normalized = template.normalized();
    let z_bias = template.atom_count as f64 * config.damping_factor;

    let candidate_base: Vec<Point3<f64>> = normalized
        .atoms
        .iter()
        .map(|atom| atom.position + cumulative_shift)
        .collect();

    let draw = walk::find_placement_shift(
        placed,
        &candidate_base,
        config.min_distance,
        &config.shift,
        z_bias,
        config.max_iterations,
        rng,
    )?;

    let monomer = normalized
        .renumbered(atom_offset)
        .translated(&(cumulative_shift + draw));

    Some(PlacedMonomer { monomer, draw })
}
