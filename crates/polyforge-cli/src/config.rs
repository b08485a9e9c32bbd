use crate::cli::Cli;
use crate::error::{CliError, Result};
use polyforge::engine::config::{GenerationConfig, GenerationConfigBuilder, ShiftBounds};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional TOML configuration file. Every field has a CLI counterpart that
/// takes precedence; unset fields fall back to the engine defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub walk: WalkSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct WalkSection {
    #[serde(rename = "min-distance")]
    pub min_distance: Option<f64>,
    #[serde(rename = "damping-factor")]
    pub damping_factor: Option<f64>,
    #[serde(rename = "max-iterations")]
    pub max_iterations: Option<usize>,
    /// `[x_min, x_max, y_min, y_max, z_min, z_max]`
    pub shift: Option<[f64; 6]>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    #[serde(rename = "max-cycles")]
    pub max_cycles: Option<usize>,
    #[serde(rename = "explicit-bonds")]
    pub explicit_bonds: Option<bool>,
    #[serde(rename = "dedup-bonds")]
    pub dedup_bonds: Option<bool>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e),
        })
    }
}

/// The fully resolved application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub seed: Option<u64>,
}

/// Merges the configuration layers: engine defaults, then the config file,
/// then CLI flags.
pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    debug!(?file_config, "merging configuration file with CLI arguments");

    let mut builder = GenerationConfigBuilder::new();

    if let Some(value) = args.min_distance.or(file_config.walk.min_distance) {
        builder = builder.min_distance(value);
    }
    if let Some(value) = args.damping.or(file_config.walk.damping_factor) {
        builder = builder.damping_factor(value);
    }
    if let Some([x_min, x_max, y_min, y_max, z_min, z_max]) = file_config.walk.shift {
        builder = builder.shift(ShiftBounds::new(x_min, x_max, y_min, y_max, z_min, z_max));
    }
    if let Some(value) = args.max_iterations.or(file_config.walk.max_iterations) {
        builder = builder.max_iterations(value);
    }
    if let Some(value) = args.max_cycles.or(file_config.generation.max_cycles) {
        builder = builder.max_cycles(value);
    }

    let explicit_bonds =
        args.explicit_bonds || file_config.generation.explicit_bonds.unwrap_or(false);
    let dedup_bonds = if args.keep_duplicate_bonds {
        false
    } else {
        file_config.generation.dedup_bonds.unwrap_or(true)
    };

    let generation = builder
        .explicit_bonds(explicit_bonds)
        .dedup_bonds(dedup_bonds)
        .build()?;
    let seed = args.seed.or(file_config.generation.seed);

    Ok(AppConfig { generation, seed })
}
