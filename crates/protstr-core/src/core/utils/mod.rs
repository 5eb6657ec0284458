//! Shared numerical helpers.

pub mod geometry;
