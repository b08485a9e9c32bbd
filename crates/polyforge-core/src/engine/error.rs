use super::config::ShiftBounds;
use crate::core::models::monomer::MonomerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Sequence entry {entry} references catalog index {index}, but the catalog holds {catalog_len} monomers"
    )]
    CatalogIndexOutOfRange {
        entry: usize,
        index: usize,
        catalog_len: usize,
    },

    #[error(transparent)]
    Monomer(#[from] MonomerError),

    #[error(
        "Exhausted {max_cycles} generation cycles without a clash-free structure; \
         re-tune the walk: min_distance = {min_distance}, damping_factor = {damping_factor}, \
         shift bounds = [{x_min}, {x_max}] x [{y_min}, {y_max}] x [{z_min}, {z_max}], \
         max_iterations = {max_iterations}, max_cycles = {max_cycles}",
        x_min = shift.x_min,
        x_max = shift.x_max,
        y_min = shift.y_min,
        y_max = shift.y_max,
        z_min = shift.z_min,
        z_max = shift.z_max
    )]
    CyclesExhausted {
        min_distance: f64,
        damping_factor: f64,
        shift: ShiftBounds,
        max_iterations: usize,
        max_cycles: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_exhaustion_names_every_tunable() {
        let message = EngineError::CyclesExhausted {
            min_distance: 1.5,
            damping_factor: 0.5,
            shift: ShiftBounds::default(),
            max_iterations: 1000,
            max_cycles: 100,
        }
        .to_string();

        assert!(message.contains("min_distance = 1.5"));
        assert!(message.contains("damping_factor = 0.5"));
        assert!(message.contains("[-1, 1]"));
        assert!(message.contains("max_iterations = 1000"));
        assert!(message.contains("100 generation cycles"));
    }
}
