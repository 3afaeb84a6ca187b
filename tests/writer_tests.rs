/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

mod common;

use approx::assert_relative_eq;
use sfe_rs::assign::{assign, AssignmentResult};
use sfe_rs::atoms::Element;
use sfe_rs::composition::Composition;
use sfe_rs::lattice::{lattice_for, Replication, Variant};
use sfe_rs::supercell::build;
use sfe_rs::writer::write_data_file;
use std::fs;
use tempfile::tempdir;

fn assignment_for(seed: u64) -> AssignmentResult {
    let composition = Composition::new(0.25, 0.50, 0.25).unwrap();
    let spec = lattice_for(&composition, Variant::Fcc, Replication::new(3, 3, 3)).unwrap();
    let supercell = build(&spec).unwrap();
    assign(supercell, &composition, seed).unwrap()
}

#[test]
fn test_round_trip_preserves_structure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("structure_fcc.data");

    let result = assignment_for(42);
    write_data_file(&result, &path).unwrap();

    let parsed = common::read_data_file(&path);
    let supercell = result.supercell();
    let (lx, ly, lz) = supercell.box_lengths();

    assert_eq!(parsed.atoms, supercell.site_count());
    assert_eq!(parsed.atom_types, 3);
    assert_relative_eq!(parsed.xhi, lx, epsilon = 1e-6);
    assert_relative_eq!(parsed.yhi, ly, epsilon = 1e-6);
    assert_relative_eq!(parsed.zhi, lz, epsilon = 1e-6);

    assert_eq!(parsed.sites.len(), supercell.site_count());
    for ((id, type_id, x, y, z), (site, label)) in parsed
        .sites
        .iter()
        .zip(supercell.sites().iter().zip(result.labels()))
    {
        assert_eq!(*id, site.id());
        assert_eq!(*type_id, label.type_id());
        let p = site.position();
        assert_relative_eq!(*x, p.x, epsilon = 1e-6);
        assert_relative_eq!(*y, p.y, epsilon = 1e-6);
        assert_relative_eq!(*z, p.z, epsilon = 1e-6);
    }
}

#[test]
fn test_masses_section_matches_element_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("structure.data");
    write_data_file(&assignment_for(7), &path).unwrap();

    let parsed = common::read_data_file(&path);
    assert_eq!(parsed.masses.len(), 3);
    for (type_id, mass) in parsed.masses {
        let element = Element::from_type_id(type_id).unwrap();
        assert_relative_eq!(mass, element.mass(), epsilon = 1e-6);
    }
}

#[test]
fn test_same_seed_writes_identical_bytes() {
    let dir = tempdir().unwrap();
    let first_path = dir.path().join("first.data");
    let second_path = dir.path().join("second.data");

    write_data_file(&assignment_for(9), &first_path).unwrap();
    write_data_file(&assignment_for(9), &second_path).unwrap();

    let first = fs::read(&first_path).unwrap();
    let second = fs::read(&second_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_write_different_files() {
    let dir = tempdir().unwrap();
    let first_path = dir.path().join("first.data");
    let second_path = dir.path().join("second.data");

    write_data_file(&assignment_for(9), &first_path).unwrap();
    write_data_file(&assignment_for(10), &second_path).unwrap();

    assert_ne!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}

#[test]
fn test_write_to_invalid_destination_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_subdir").join("structure.data");
    assert!(write_data_file(&assignment_for(1), &path).is_err());
}
