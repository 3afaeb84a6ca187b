/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic data for the Al-Fe-Ni system
//!
//! This module provides the element table (symbols, masses, LAMMPS type
//! ids), the `Vector3D` position type, and the lattice `Site` record shared
//! by the supercell builder and the structure writer.

pub mod element;
pub mod site;
pub mod vector;

pub use element::Element;
pub use site::Site;
pub use vector::Vector3D;
