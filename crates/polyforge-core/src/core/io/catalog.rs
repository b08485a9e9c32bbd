use crate::core::models::atom::Atom;
use crate::core::models::catalog::MonomerCatalog;
use crate::core::models::monomer::{Monomer, MonomerError, MonomerLink, Resolution};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog entry '{key}': declared atom count {declared} does not match {found} atom records")]
    AtomCountMismatch {
        key: String,
        declared: usize,
        found: usize,
    },

    #[error("Catalog entry '{key}': link lists {found} endpoints, at most 2 are allowed")]
    TooManyLinkEndpoints { key: String, found: usize },

    #[error("Catalog entry '{key}': {source}")]
    Monomer {
        key: String,
        #[source]
        source: MonomerError,
    },
}

/// On-disk atom record: `[ff_identifier, element, x, y, z, [neighbours], index]`.
#[derive(Debug, Serialize, Deserialize)]
struct AtomRecord(
    Option<String>,
    String,
    f64,
    f64,
    f64,
    Vec<usize>,
    usize,
);

#[derive(Debug, Serialize, Deserialize)]
struct MonomerRecord {
    name: String,
    resolution: Resolution,
    atom_count: usize,
    atoms: Vec<AtomRecord>,
    /// Up to two 1-based atom numbers, C-terminus first; `null` marks an
    /// absent endpoint.
    link: Vec<Option<usize>>,
    polymer: bool,
    #[serde(default)]
    inverted: bool,
}

impl From<&Atom> for AtomRecord {
    fn from(atom: &Atom) -> Self {
        AtomRecord(
            atom.ff_identifier.clone(),
            atom.element.clone(),
            atom.position.x,
            atom.position.y,
            atom.position.z,
            atom.neighbours.clone(),
            atom.index,
        )
    }
}

impl From<AtomRecord> for Atom {
    fn from(record: AtomRecord) -> Self {
        let AtomRecord(ff_identifier, element, x, y, z, neighbours, index) = record;
        Atom {
            ff_identifier,
            element,
            position: Point3::new(x, y, z),
            neighbours,
            index,
        }
    }
}

fn link_from_record(key: &str, link: &[Option<usize>]) -> Result<MonomerLink, CatalogFileError> {
    match link {
        [] => Ok(MonomerLink::default()),
        [c] => Ok(MonomerLink::new(*c, None)),
        [c, n] => Ok(MonomerLink::new(*c, *n)),
        more => Err(CatalogFileError::TooManyLinkEndpoints {
            key: key.to_string(),
            found: more.len(),
        }),
    }
}

fn link_to_record(link: MonomerLink) -> Vec<Option<usize>> {
    match (link.c_terminus, link.n_terminus) {
        (None, None) => Vec::new(),
        (c, None) => vec![c],
        (c, n) => vec![c, n],
    }
}

fn monomer_from_record(key: &str, record: MonomerRecord) -> Result<Monomer, CatalogFileError> {
    if record.atom_count != record.atoms.len() {
        return Err(CatalogFileError::AtomCountMismatch {
            key: key.to_string(),
            declared: record.atom_count,
            found: record.atoms.len(),
        });
    }

    let link = link_from_record(key, &record.link)?;
    let atoms = record.atoms.into_iter().map(Atom::from).collect();

    Monomer::new(&record.name, record.resolution, atoms, link, record.polymer).map_err(|source| {
        CatalogFileError::Monomer {
            key: key.to_string(),
            source,
        }
    })
}

/// Reads a monomer catalog from its JSON representation: a map keyed by
/// `"<name>_<resolution>"`, one entry per template. Key order (lexicographic)
/// determines catalog order, so repeated loads of the same document yield
/// identical positional indices.
pub fn read_catalog(reader: &mut impl Read) -> Result<MonomerCatalog, CatalogFileError> {
    let records: BTreeMap<String, MonomerRecord> = serde_json::from_reader(reader)?;

    let mut monomers = Vec::with_capacity(records.len());
    for (key, record) in records {
        monomers.push(monomer_from_record(&key, record)?);
    }
    Ok(MonomerCatalog::from_monomers(monomers))
}

pub fn read_catalog_from_path(path: impl AsRef<Path>) -> Result<MonomerCatalog, CatalogFileError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_catalog(&mut reader)
}

/// Writes a catalog as the JSON document accepted by [`read_catalog`].
pub fn write_catalog(
    catalog: &MonomerCatalog,
    writer: &mut impl Write,
) -> Result<(), CatalogFileError> {
    let records: BTreeMap<String, MonomerRecord> = catalog
        .iter()
        .map(|monomer| {
            let key = format!("{}_{}", monomer.name, monomer.resolution);
            let record = MonomerRecord {
                name: monomer.name.clone(),
                resolution: monomer.resolution,
                atom_count: monomer.atom_count,
                atoms: monomer.atoms.iter().map(AtomRecord::from).collect(),
                link: link_to_record(monomer.link),
                polymer: monomer.polymer,
                inverted: monomer.inverted,
            };
            (key, record)
        })
        .collect();

    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

pub fn write_catalog_to_path(
    catalog: &MonomerCatalog,
    path: impl AsRef<Path>,
) -> Result<(), CatalogFileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_catalog(catalog, &mut writer)
}
