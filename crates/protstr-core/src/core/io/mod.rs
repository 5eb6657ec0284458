//! Reading backbone coordinates and writing relative features.
//!
//! Both sides sit behind the [`traits::ChainFile`] and [`traits::FeatureFile`] traits, so
//! front ends can pick a format at run time while the engine only ever sees a
//! [`crate::core::models::chain::BackboneChain`] and a slice of
//! [`crate::core::models::features::ResidueFeatures`].

pub mod csv;
pub mod table;
pub mod traits;
