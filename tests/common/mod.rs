/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Test-only reader for LAMMPS data files
//!
//! A deliberately minimal parser used to verify round-trip properties of
//! the structure writer; it understands exactly the subset of the format
//! the writer emits.

use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ParsedStructure {
    pub atoms: usize,
    pub atom_types: usize,
    pub xhi: f64,
    pub yhi: f64,
    pub zhi: f64,
    /// (type id, mass) pairs from the Masses section
    pub masses: Vec<(u32, f64)>,
    /// (site id, type id, x, y, z) tuples from the Atoms section
    pub sites: Vec<(usize, u32, f64, f64, f64)>,
}

pub fn read_data_file(path: &Path) -> ParsedStructure {
    let content = fs::read_to_string(path).unwrap();
    let mut parsed = ParsedStructure::default();

    #[derive(PartialEq)]
    enum Section {
        Header,
        Masses,
        Atoms,
    }
    let mut section = Section::Header;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == "Masses" {
            section = Section::Masses;
            continue;
        }
        if line.starts_with("Atoms") {
            section = Section::Atoms;
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match section {
            Section::Header => {
                if line.ends_with(" atoms") {
                    parsed.atoms = tokens[0].parse().unwrap();
                } else if line.ends_with(" atom types") {
                    parsed.atom_types = tokens[0].parse().unwrap();
                } else if line.ends_with("xlo xhi") {
                    parsed.xhi = tokens[1].parse().unwrap();
                } else if line.ends_with("ylo yhi") {
                    parsed.yhi = tokens[1].parse().unwrap();
                } else if line.ends_with("zlo zhi") {
                    parsed.zhi = tokens[1].parse().unwrap();
                }
            }
            Section::Masses => {
                parsed
                    .masses
                    .push((tokens[0].parse().unwrap(), tokens[1].parse().unwrap()));
            }
            Section::Atoms => {
                parsed.sites.push((
                    tokens[0].parse().unwrap(),
                    tokens[1].parse().unwrap(),
                    tokens[2].parse().unwrap(),
                    tokens[3].parse().unwrap(),
                    tokens[4].parse().unwrap(),
                ));
            }
        }
    }

    parsed
}
