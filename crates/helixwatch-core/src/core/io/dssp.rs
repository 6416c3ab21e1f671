use crate::core::io::traits::SecondaryStructureFile;
use crate::core::structure::{SecondaryStructure, StructureMap};
use std::io::{self, BufRead};
use thiserror::Error;

/// Text expected in columns 3-25 of the line that introduces the per-residue table.
pub const RESIDUE_TABLE_HEADER: &str = "#  RESIDUE AA STRUCTURE";

const HEADER_COLUMNS: (usize, usize) = (2, 25);
const RESIDUE_NUMBER_COLUMNS: (usize, usize) = (5, 10);
const STRUCTURE_COLUMN: usize = 16;

#[derive(Debug, Error)]
pub enum DsspError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: DsspParseErrorKind },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DsspParseErrorKind {
    #[error("Invalid residue number in columns {columns} (value: '{value}')")]
    InvalidResidueNumber { columns: String, value: String },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn is_residue_table_header(line: &str) -> bool {
    line.get(HEADER_COLUMNS.0..HEADER_COLUMNS.1) == Some(RESIDUE_TABLE_HEADER)
}

fn structure_code(line: &str) -> char {
    line.get(STRUCTURE_COLUMN..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(' ')
}

/// Parser for the classic fixed-column DSSP output format.
///
/// Everything before the residue table header is ignored. Output that never
/// contains the header yields an empty [`StructureMap`].
pub struct DsspFile;

impl SecondaryStructureFile for DsspFile {
    type Error = DsspError;

    fn read_from(reader: &mut impl BufRead) -> Result<StructureMap, Self::Error> {
        let mut map = StructureMap::new();
        let mut in_residue_table = false;

        // DSSP echoes header records from the input verbatim, so lines are decoded lossily.
        for (line_num, line_res) in reader.split(b'\n').enumerate() {
            let bytes = line_res?;
            let text = String::from_utf8_lossy(&bytes);
            let line = text.strip_suffix('\r').unwrap_or(&text);
            let line_num = line_num + 1;

            if !in_residue_table {
                in_residue_table = is_residue_table_header(line);
                continue;
            }

            let residue_str = slice_and_trim(line, RESIDUE_NUMBER_COLUMNS.0, RESIDUE_NUMBER_COLUMNS.1);
            // Chain breaks ('!') have no residue number.
            if residue_str.is_empty() {
                continue;
            }

            let residue_number: i32 = residue_str.parse().map_err(|_| DsspError::Parse {
                line: line_num,
                kind: DsspParseErrorKind::InvalidResidueNumber {
                    columns: "6-10".into(),
                    value: residue_str.into(),
                },
            })?;

            map.push(
                SecondaryStructure::from_code(structure_code(line)),
                residue_number,
            );
        }

        Ok(map)
    }
}
