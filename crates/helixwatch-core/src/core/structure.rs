use std::collections::BTreeMap;
use std::fmt;

/// A DSSP secondary-structure assignment for a single residue.
///
/// The single-character codes follow the DSSP output convention. Any code
/// outside the documented alphabet is preserved verbatim in [`SecondaryStructure::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryStructure {
    /// `H`: alpha helix (4-12 helix).
    AlphaHelix,
    /// `B`: residue in an isolated beta bridge.
    IsolatedBridge,
    /// `E`: extended strand in a parallel or anti-parallel beta sheet.
    Strand,
    /// `G`: 3-10 helix.
    Helix310,
    /// `I`: pi helix.
    PiHelix,
    /// `P`: polyproline II helix.
    Polyproline,
    /// `T`: hydrogen-bonded turn.
    Turn,
    /// `S`: bend.
    Bend,
    /// Blank code: loop or irregular region.
    Coil,
    Other(char),
}

impl SecondaryStructure {
    pub fn from_code(code: char) -> Self {
        match code {
            'H' => Self::AlphaHelix,
            'B' => Self::IsolatedBridge,
            'E' => Self::Strand,
            'G' => Self::Helix310,
            'I' => Self::PiHelix,
            'P' => Self::Polyproline,
            'T' => Self::Turn,
            'S' => Self::Bend,
            ' ' => Self::Coil,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::AlphaHelix => 'H',
            Self::IsolatedBridge => 'B',
            Self::Strand => 'E',
            Self::Helix310 => 'G',
            Self::PiHelix => 'I',
            Self::Polyproline => 'P',
            Self::Turn => 'T',
            Self::Bend => 'S',
            Self::Coil => ' ',
            Self::Other(c) => c,
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Residue numbers of one structure file, grouped by their assigned secondary structure.
///
/// Residue lists keep the order in which records were added; they are not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureMap {
    residues: BTreeMap<SecondaryStructure, Vec<i32>>,
}

impl StructureMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, structure: SecondaryStructure, residue_number: i32) {
        self.residues
            .entry(structure)
            .or_default()
            .push(residue_number);
    }

    pub fn residues(&self, structure: SecondaryStructure) -> &[i32] {
        self.residues
            .get(&structure)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn helix_residues(&self) -> &[i32] {
        self.residues(SecondaryStructure::AlphaHelix)
    }

    pub fn total_residues(&self) -> usize {
        self.residues.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_residues() == 0
    }

    pub fn structures(&self) -> impl Iterator<Item = (SecondaryStructure, &[i32])> {
        self.residues.iter().map(|(s, r)| (*s, r.as_slice()))
    }
}

impl FromIterator<(SecondaryStructure, i32)> for StructureMap {
    fn from_iter<T: IntoIterator<Item = (SecondaryStructure, i32)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (structure, residue_number) in iter {
            map.push(structure, residue_number);
        }
        map
    }
}
