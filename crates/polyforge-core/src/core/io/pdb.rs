use crate::core::models::structure::Structure;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// The fixed column template shared by ATOM and CONECT records. Field widths
// 7,5,5,4,3,6,8,8,10,7,14, trailing element field unpadded; downstream tools
// parse these columns positionally, so the widths are a wire-format contract.

fn write_atom_records(structure: &Structure, writer: &mut impl Write) -> Result<(), PdbError> {
    for residue in structure.residues() {
        for atom in &residue.atoms {
            writeln!(
                writer,
                "{:<7}{:<5}{:<5}{:<4}{:<3}{:<6}{:<8.3}{:<8.3}{:<10.3}{:<7}{:<14}{}",
                "ATOM",
                atom.index,
                atom.label(),
                residue.name,
                "A",
                residue.serial,
                atom.position.x,
                atom.position.y,
                atom.position.z,
                "1.0",
                "0.0",
                atom.element,
            )?;
        }
    }
    Ok(())
}

fn write_bond_records(structure: &Structure, writer: &mut impl Write) -> Result<(), PdbError> {
    for &(first, second) in structure.bonds() {
        writeln!(
            writer,
            "{:<7}{:<5}{:<5}{:<4}{:<3}{:<6}{:<8}{:<8}{:<10}{:<7}{:<14}",
            "CONECT", first, second, "", "", "", "", "", "", "", "",
        )?;
    }
    Ok(())
}

fn write_trailer(atom_count: usize, writer: &mut impl Write) -> Result<(), PdbError> {
    writeln!(
        writer,
        "{:<11}{:<5}{:<5}{:<4}{:<5}{:<5}{:<5}{:<5}{:<5}{:<5}{:<5}{:<5}{}",
        "MASTER", 0, 0, 0, 0, 0, 0, 0, 0, atom_count, 0, atom_count, 0,
    )?;
    write!(writer, "END")?;
    Ok(())
}

/// Renders a completed structure as fixed-column ATOM records, CONECT bond
/// records, and the closing MASTER/END trailer carrying the total atom
/// count.
pub fn write_structure(structure: &Structure, writer: &mut impl Write) -> Result<(), PdbError> {
    write_atom_records(structure, writer)?;
    write_bond_records(structure, writer)?;
    write_trailer(structure.atom_count(), writer)
}

/// Writes a structure file at `path`, truncating any previous content.
pub fn write_structure_to_path(
    structure: &Structure,
    path: impl AsRef<Path>,
) -> Result<(), PdbError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_structure(structure, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::structure::PlacedResidue;
    use nalgebra::Point3;

    fn sample_structure() -> Structure {
        let mut n = Atom::new("N", Point3::new(1.234, -0.5, 3.0), 1);
        n.ff_identifier = Some("N".to_string());
        let c = Atom::new("C", Point3::new(2.0, 0.25, 3.5), 2);

        Structure::new(
            vec![PlacedResidue {
                name: "GLY".to_string(),
                serial: 1,
                atoms: vec![n, c],
            }],
            vec![(1, 2)],
        )
    }

    fn render(structure: &Structure) -> String {
        let mut buffer = Vec::new();
        write_structure(structure, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn atom_records_use_the_fixed_column_template() {
        let output = render(&sample_structure());
        let first_line = output.lines().next().unwrap();

        assert_eq!(
            first_line,
            "ATOM   1    N    GLY A  1     1.234   -0.500  3.000     1.0    0.0           N"
        );
    }

    #[test]
    fn atoms_without_ff_identifier_fall_back_to_the_element() {
        let output = render(&sample_structure());
        let second_line = output.lines().nth(1).unwrap();

        assert_eq!(
            second_line,
            "ATOM   2    C    GLY A  1     2.000   0.250   3.500     1.0    0.0           C"
        );
    }

    #[test]
    fn bond_records_leave_the_remaining_fields_blank() {
        let output = render(&sample_structure());
        let conect = output.lines().nth(2).unwrap();

        assert_eq!(conect.trim_end(), "CONECT 1    2");
        // Blank fields are padded out to the full record width.
        assert_eq!(conect.len(), 77);
    }

    #[test]
    fn trailer_reports_the_atom_count_twice() {
        let output = render(&sample_structure());
        let mut lines = output.lines().rev();

        assert_eq!(lines.next().unwrap(), "END");
        assert_eq!(
            lines.next().unwrap(),
            "MASTER     0    0    0   0    0    0    0    0    2    0    2    0"
        );
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn file_output_matches_buffer_output() {
        let structure = sample_structure();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdb");

        write_structure_to_path(&structure, &path).unwrap();
        let from_file = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_file, render(&structure));
    }
}
