use polyforge::core::io::catalog::CatalogFileError;
use polyforge::core::io::pdb::PdbError;
use polyforge::core::io::sequence::SequenceError;
use polyforge::engine::config::ConfigError;
use polyforge::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse config file '{path}': {source}", path = path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to load monomer catalog '{path}': {source}", path = path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogFileError,
    },

    #[error("Failed to read sequence file '{path}': {source}", path = path.display())]
    Sequence {
        path: PathBuf,
        #[source]
        source: SequenceError,
    },

    #[error("Failed to write structure file '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
