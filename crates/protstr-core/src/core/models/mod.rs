//! # Core Models Module
//!
//! Data structures describing a protein backbone and the relative features derived from it.
//!
//! ## Key Components
//!
//! - [`chain`] - The ordered, validated list of central-carbon positions ([`chain::BackboneChain`])
//! - [`features`] - Per-residue outputs: torsion handedness, torsion profiles, and the combined
//!   five-column [`features::ResidueFeatures`] record
//!
//! ## Usage
//!
//! ```
//! use protstr::core::models::chain::BackboneChain;
//!
//! let chain = BackboneChain::from_rows([[0.0, 0.0, 0.0], [3.8, 0.0, 0.0]]).unwrap();
//! assert_eq!(chain.len(), 2);
//! ```

pub mod chain;
pub mod features;
