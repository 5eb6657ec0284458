use crate::core::models::chain::BackboneChain;
use crate::core::models::features::ResidueFeatures;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Formatting knobs shared by the feature writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFormatOptions {
    /// Fixed number of decimals for angle columns. `None` writes the shortest
    /// representation that round-trips.
    pub precision: Option<usize>,
}

impl FeatureFormatOptions {
    pub fn format_angle(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        }
    }

    /// The five columns of `features` as text, in header order.
    pub fn format_record(&self, features: &ResidueFeatures) -> [String; 5] {
        [
            self.format_angle(features.bond_angle),
            self.format_angle(features.forward_angle),
            features.forward_direction.to_string(),
            self.format_angle(features.backward_angle),
            features.backward_direction.to_string(),
        ]
    }
}

/// A source of backbone coordinates in some on-disk format.
pub trait ChainFile {
    /// The error type for parsing and I/O.
    type Error: Error + From<io::Error>;

    /// Reads a chain from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a well-formed coordinate table or
    /// reading fails.
    fn read_from(reader: &mut impl BufRead) -> Result<BackboneChain, Self::Error>;

    /// Reads a chain from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<BackboneChain, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// A sink rendering per-residue features in some text format.
pub trait FeatureFile {
    /// The error type for serialization and I/O.
    type Error: Error + From<io::Error>;

    /// Writes a header followed by one record per residue, in residue order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        features: &[ResidueFeatures],
        options: &FeatureFormatOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes features to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        features: &[ResidueFeatures],
        options: &FeatureFormatOptions,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(features, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
