use super::config::ShiftBounds;
use crate::core::utils::geometry;
use nalgebra::{Point3, Vector3};
use rand::Rng;

/// Draws one random translation: x and y uniform within their bounds, z
/// uniform within its bounds and scaled by `z_bias`.
pub fn draw_shift(bounds: &ShiftBounds, z_bias: f64, rng: &mut impl Rng) -> Vector3<f64> {
    let x = rng.gen_range(bounds.x_min..=bounds.x_max);
    let y = rng.gen_range(bounds.y_min..=bounds.y_max);
    let z = z_bias * rng.gen_range(bounds.z_min..=bounds.z_max);
    Vector3::new(x, y, z)
}

/// Self-avoiding random-walk search for a clash-free translation.
///
/// Repeatedly draws a shift and tests the translated candidate atoms against
/// every already placed atom. A draw is accepted once the minimum cross
/// distance is at least `min_distance` — inclusive, so a placement landing
/// exactly on the threshold terminates the search rather than retrying
/// forever at a degenerate configuration.
///
/// # Return
///
/// The accepted shift, or `None` once `max_iterations` draws have been
/// rejected.
pub fn find_placement_shift(
    placed: &[Point3<f64>],
    candidate_base: &[Point3<f64>],
    min_distance: f64,
    bounds: &ShiftBounds,
    z_bias: f64,
    max_iterations: usize,
    rng: &mut impl Rng,
) -> Option<Vector3<f64>> {
    let mut candidate = vec![Point3::origin(); candidate_base.len()];

    for _ in 0..max_iterations {
        let shift = draw_shift(bounds, z_bias, rng);
        for (moved, base) in candidate.iter_mut().zip(candidate_base) {
            *moved = base + shift;
        }

        // Distances are compared unrounded; coincident pairs are excluded as
        // self-distances, and a candidate with no non-coincident counterpart
        // cannot clash.
        let accepted = match geometry::min_cross_distance(placed, &candidate) {
            Some(distance) => distance >= min_distance,
            None => true,
        };
        if accepted {
            return Some(shift);
        }
    }

    None
}
