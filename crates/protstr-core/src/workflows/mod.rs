//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::engine`] tasks together.
//!
//! - **Conversion Workflow** ([`convert`]) - Absolute backbone coordinates to the
//!   five-column relative structure, one record per residue.

pub mod convert;
