//! # protstr
//!
//! Converts the absolute 3D backbone of a protein (one central-carbon position per residue)
//! into a relative, rotation- and translation-invariant encoding: for every residue a bond
//! angle plus forward and backward torsion angles with their directions.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BackboneChain`,
//!   `ResidueFeatures`), geometric helpers, and coordinate/feature file formats.
//!
//! - **[`engine`]: The Analyses.** The bond-angle and torsion passes, the combiner that
//!   zips them into per-residue records, configuration, errors, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** [`workflows::convert::run`] performs the complete
//!   conversion in one call.
//!
//! ## Example
//!
//! ```
//! use protstr::core::models::chain::BackboneChain;
//! use protstr::engine::config::ConversionConfig;
//! use protstr::engine::progress::ProgressReporter;
//! use protstr::workflows::convert;
//!
//! let chain = BackboneChain::from_rows([
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [1.0, 1.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 1.0, 1.0],
//! ])
//! .unwrap();
//!
//! let features =
//!     convert::run(&chain, &ConversionConfig::default(), &ProgressReporter::new()).unwrap();
//! assert_eq!(features.len(), 5);
//! assert!((features[1].bond_angle - 0.5).abs() < 1e-12);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
