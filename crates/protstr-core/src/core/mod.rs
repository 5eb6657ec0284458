//! # Core Module
//!
//! The stateless foundation of protstr: data models for a protein backbone and its
//! derived features, vector helpers, and file I/O.
//!
//! - **Backbone Representation** ([`models`]) - Validated central-carbon chains and the
//!   per-residue feature records computed from them
//! - **Geometry** ([`utils`]) - Plane normals, signed plane offsets, and angle scaling
//! - **File I/O** ([`io`]) - Whitespace tables and CSV, for coordinates in and features out

pub mod io;
pub mod models;
pub mod utils;
