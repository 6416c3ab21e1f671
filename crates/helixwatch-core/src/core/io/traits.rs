use crate::core::structure::StructureMap;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading per-residue secondary-structure assignments.
///
/// Implementors handle format-specific parsing of the text produced by a
/// secondary-structure assignment program.
pub trait SecondaryStructureFile {
    /// The error type for parsing and I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure map from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<StructureMap, Self::Error>;

    /// Reads a structure map from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<StructureMap, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Parses an in-memory string.
    fn read_from_str(content: &str) -> Result<StructureMap, Self::Error> {
        let mut reader = content.as_bytes();
        Self::read_from(&mut reader)
    }
}
