use crate::core::io::traits::{ChainFile, FeatureFile, FeatureFormatOptions};
use crate::core::models::chain::{BackboneChain, ChainError};
use crate::core::models::features::ResidueFeatures;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TableParseErrorKind,
    },
    #[error("Invalid coordinates: {0}")]
    Chain(#[from] ChainError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableParseErrorKind {
    #[error("Expected 3 columns (x y z), found {found}")]
    WrongColumnCount { found: usize },
    #[error("Invalid float in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
}

/// Whitespace-delimited plain text: one `x y z` row per residue for input, a header line
/// and five columns per residue for output. Blank lines and `#` comments are skipped on
/// input.
pub struct TableFile;

impl TableFile {
    fn parse_row(line: &str, line_num: usize) -> Result<Point3<f64>, TableError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(TableError::Parse {
                line: line_num,
                kind: TableParseErrorKind::WrongColumnCount {
                    found: fields.len(),
                },
            });
        }

        let mut coords = [0.0; 3];
        for (column, (slot, field)) in coords.iter_mut().zip(&fields).enumerate() {
            *slot = field.parse().map_err(|_| TableError::Parse {
                line: line_num,
                kind: TableParseErrorKind::InvalidFloat {
                    column: column + 1,
                    value: (*field).to_string(),
                },
            })?;
        }
        Ok(Point3::new(coords[0], coords[1], coords[2]))
    }
}

impl ChainFile for TableFile {
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<BackboneChain, TableError> {
        let mut points = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            points.push(Self::parse_row(content, line_num)?);
        }

        Ok(BackboneChain::new(points)?)
    }
}

impl FeatureFile for TableFile {
    type Error = TableError;

    fn write_to(
        features: &[ResidueFeatures],
        options: &FeatureFormatOptions,
        writer: &mut impl Write,
    ) -> Result<(), TableError> {
        writeln!(writer, "{}", ResidueFeatures::COLUMNS.join(" "))?;
        for residue in features {
            writeln!(writer, "{}", options.format_record(residue).join(" "))?;
        }
        Ok(())
    }
}
