//! # Engine Module
//!
//! The computational layer of protstr: the geometric analyses that derive relative
//! features from an absolute backbone, together with their configuration, error types,
//! and progress reporting.
//!
//! ## Architecture
//!
//! - **Tasks** ([`tasks`]) - Bond angles, forward/backward torsions, and the combiner
//! - **Configuration** ([`config`]) - Policies for degenerate input geometry
//! - **Progress Monitoring** ([`progress`]) - Per-pass progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **Rotation- and translation-invariant descriptors** computed purely from positions
//! - **Explicit degenerate-geometry handling** for collinear and coincident residues
//! - **Single torsion algorithm** reused for the backward pass by mirroring the chain
//! - **Optional parallelism** of the independent passes via the `parallel` feature

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
