use crate::core::io::traits::{ChainFile, FeatureFile, FeatureFormatOptions};
use crate::core::models::chain::{BackboneChain, ChainError};
use crate::core::models::features::ResidueFeatures;
use ::csv::{ReaderBuilder, Trim, WriterBuilder};
use nalgebra::Point3;
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Invalid coordinates: {0}")]
    Chain(#[from] ChainError),
}

#[derive(Debug, Deserialize)]
struct CoordinateRow {
    x: f64,
    y: f64,
    z: f64,
}

/// Comma-separated values with a header row: `x,y,z` for input, the five feature
/// columns for output.
pub struct CsvFile;

impl ChainFile for CsvFile {
    type Error = CsvError;

    fn read_from(reader: &mut impl BufRead) -> Result<BackboneChain, CsvError> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let points = csv_reader
            .deserialize::<CoordinateRow>()
            .map(|row| row.map(|r| Point3::new(r.x, r.y, r.z)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BackboneChain::new(points)?)
    }
}

impl FeatureFile for CsvFile {
    type Error = CsvError;

    fn write_to(
        features: &[ResidueFeatures],
        options: &FeatureFormatOptions,
        writer: &mut impl Write,
    ) -> Result<(), CsvError> {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(options.precision.is_none())
            .from_writer(writer);

        match options.precision {
            None => {
                for residue in features {
                    csv_writer.serialize(residue)?;
                }
                if features.is_empty() {
                    csv_writer.write_record(ResidueFeatures::COLUMNS)?;
                }
            }
            Some(_) => {
                csv_writer.write_record(ResidueFeatures::COLUMNS)?;
                for residue in features {
                    csv_writer.write_record(options.format_record(residue))?;
                }
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
