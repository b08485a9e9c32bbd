use crate::core::models::catalog::MonomerCatalog;
use crate::core::models::monomer::Monomer;
use crate::core::models::sequence::Sequence;
use crate::core::models::structure::Structure;
use crate::engine::config::GenerationConfig;
use crate::engine::error::EngineError;
use crate::engine::placement;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::AttemptState;
use rand::Rng;
use tracing::{debug, info, instrument};

/// The outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    pub structure: Structure,
    /// Attempts abandoned before the successful one.
    pub restarts: usize,
}

/// Generates a complete structure for `sequence`, retrying whole attempts
/// under the cycle budget.
///
/// Placement failures are symptomatic of globally mis-tuned walk parameters
/// rather than one unlucky draw, so a failed placement discards the entire
/// attempt and restarts from the first residue.
///
/// # Errors
///
/// Input errors (dangling catalog references, inversion of a polymer unit)
/// surface before any placement begins. [`EngineError::CyclesExhausted`]
/// reports the implicated tunables once `max_cycles` attempts have failed.
#[instrument(skip_all, name = "assembly_workflow")]
pub fn run(
    catalog: &MonomerCatalog,
    sequence: &Sequence,
    config: &GenerationConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<AssemblyResult, EngineError> {
    // === Phase 1: Resolve the sequence against the catalog ===
    let templates = resolve_templates(catalog, sequence)?;
    let total_residues = sequence.total_residues() as u64;
    info!(
        entries = sequence.len(),
        residues = total_residues,
        "starting structure generation"
    );

    // === Phase 2: Bounded whole-structure retry loop ===
    for cycle in 0..config.max_cycles {
        reporter.report(Progress::CycleStart {
            cycle,
            total_residues,
        });

        match attempt(&templates, config, rng, reporter) {
            Some(state) => {
                let structure = state.into_structure(config.dedup_bonds);
                info!(
                    residues = structure.residue_count(),
                    atoms = structure.atom_count(),
                    restarts = cycle,
                    "structure generation complete"
                );
                reporter.report(Progress::Finished {
                    residues: structure.residue_count(),
                    atoms: structure.atom_count(),
                });
                return Ok(AssemblyResult {
                    structure,
                    restarts: cycle,
                });
            }
            None => {
                debug!(cycle, "placement budget exhausted; restarting from the first residue");
                reporter.report(Progress::CycleAbandoned { cycle });
            }
        }
    }

    Err(EngineError::CyclesExhausted {
        min_distance: config.min_distance,
        damping_factor: config.damping_factor,
        shift: config.shift,
        max_iterations: config.max_iterations,
        max_cycles: config.max_cycles,
    })
}

/// Resolves every sequence entry into a ready-to-place template, applying
/// the inversion flag once per entry.
fn resolve_templates(
    catalog: &MonomerCatalog,
    sequence: &Sequence,
) -> Result<Vec<(Monomer, usize)>, EngineError> {
    sequence
        .entries()
        .enumerate()
        .map(|(entry, (index, inverted, reps))| {
            let template =
                catalog
                    .get(index)
                    .ok_or_else(|| EngineError::CatalogIndexOutOfRange {
                        entry: entry + 1,
                        index,
                        catalog_len: catalog.len(),
                    })?;
            let template = if inverted {
                template.invert()?
            } else {
                template.clone()
            };
            Ok((template, reps))
        })
        .collect()
}

/// Runs one generation attempt; `None` means a placement ran out of
/// iterations and the whole attempt is void.
fn attempt(
    templates: &[(Monomer, usize)],
    config: &GenerationConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Option<AttemptState> {
    let mut state = AttemptState::new();

    for (template, reps) in templates {
        for _ in 0..*reps {
            let placed = placement::place_monomer(
                state.coordinates(),
                template,
                state.atom_count(),
                state.cumulative_shift(),
                config,
                rng,
            )?;
            state.record(placed, config.explicit_bonds);
            reporter.report(Progress::ResiduePlaced);
        }
    }

    Some(state)
}
