//! The three analyses that turn a backbone chain into relative features.
//!
//! Each task is a pure function of its inputs. [`bond_angle`] and [`torsion`] read only
//! the chain and may run concurrently; [`combine`] merges their outputs.

pub mod bond_angle;
pub mod combine;
pub mod torsion;
