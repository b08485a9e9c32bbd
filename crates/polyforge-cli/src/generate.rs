use crate::cli::Cli;
use crate::config::{self, AppConfig};
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use polyforge::core::io::{catalog, pdb, sequence};
use polyforge::engine::progress::ProgressReporter;
use polyforge::workflows::assemble;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

pub fn run(args: &Cli) -> Result<()> {
    let AppConfig { generation, seed } = config::build_config(args)?;
    debug!(?generation, ?seed, "resolved generation parameters");

    info!("Loading monomer catalog from {:?}", &args.monomers);
    let catalog =
        catalog::read_catalog_from_path(&args.monomers).map_err(|source| CliError::Catalog {
            path: args.monomers.clone(),
            source,
        })?;
    info!(monomers = catalog.len(), "catalog loaded");

    let sequence = sequence::read_sequence_from_path(&catalog, &args.sequence).map_err(
        |source| CliError::Sequence {
            path: args.sequence.clone(),
            source,
        },
    )?;
    info!(
        entries = sequence.len(),
        residues = sequence.total_residues(),
        "sequence expanded"
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    let result = assemble::run(&catalog, &sequence, &generation, &mut rng, &reporter)?;

    pdb::write_structure_to_path(&result.structure, &args.output).map_err(|source| {
        CliError::Output {
            path: args.output.clone(),
            source,
        }
    })?;

    println!(
        "Created {} with {} residues and {} atoms.",
        args.output.display(),
        result.structure.residue_count(),
        result.structure.atom_count()
    );

    Ok(())
}
