use crate::core::models::catalog::MonomerCatalog;
use crate::core::models::monomer::Resolution;
use crate::core::models::sequence::Sequence;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Sequence line {line}: expected 4 colon-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Sequence line {line}: unknown resolution code '{code}' (expected AA, UA or CG)")]
    UnknownResolution { line: usize, code: String },

    #[error("Sequence line {line}: inversion flag '{value}' is not 0 or 1")]
    InvalidInversion { line: usize, value: String },

    #[error("Sequence line {line}: repeat count '{value}' is not a non-negative integer")]
    InvalidRepeats { line: usize, value: String },

    #[error(
        "Sequence line {line}: monomer '{name}' with {resolution} resolution is not in the catalog"
    )]
    UnknownMonomer {
        line: usize,
        name: String,
        resolution: Resolution,
    },
}

/// Expands a line-oriented sequence specification against a monomer catalog.
///
/// Each non-comment, non-blank line has the form `NAME:RES:INV:REPS` and
/// contributes exactly one `(index, inverted, reps)` triple to the returned
/// [`Sequence`], in input order. `#`-prefixed and blank lines are skipped.
///
/// # Errors
///
/// Any malformed line or unresolvable catalog reference aborts expansion
/// with a [`SequenceError`] carrying the offending 1-based line number; no
/// partial sequence is returned.
pub fn read_sequence(
    catalog: &MonomerCatalog,
    reader: &mut impl BufRead,
) -> Result<Sequence, SequenceError> {
    let mut index = Vec::new();
    let mut inverted = Vec::new();
    let mut reps = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(':').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(SequenceError::FieldCount {
                line: line_num,
                found: fields.len(),
            });
        }

        let name = fields[0];
        let resolution =
            Resolution::from_code(fields[1]).ok_or_else(|| SequenceError::UnknownResolution {
                line: line_num,
                code: fields[1].to_string(),
            })?;

        let entry_index =
            catalog
                .index_of(name, resolution)
                .ok_or_else(|| SequenceError::UnknownMonomer {
                    line: line_num,
                    name: name.to_string(),
                    resolution,
                })?;

        let entry_inverted = match fields[2] {
            "0" => false,
            "1" => true,
            other => {
                return Err(SequenceError::InvalidInversion {
                    line: line_num,
                    value: other.to_string(),
                });
            }
        };

        let entry_reps: usize =
            fields[3]
                .parse()
                .map_err(|_| SequenceError::InvalidRepeats {
                    line: line_num,
                    value: fields[3].to_string(),
                })?;

        index.push(entry_index);
        inverted.push(entry_inverted);
        reps.push(entry_reps);
    }

    Ok(Sequence::new(index, inverted, reps))
}

/// Reads and expands a sequence specification file.
pub fn read_sequence_from_path(
    catalog: &MonomerCatalog,
    path: impl AsRef<Path>,
) -> Result<Sequence, SequenceError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_sequence(catalog, &mut reader)
}
