use nalgebra::Point3;
use thiserror::Error;

/// Errors raised while assembling a [`BackboneChain`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChainError {
    #[error("Coordinate of residue {index} is not finite: ({x}, {y}, {z})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64, z: f64 },
}

/// An ordered sequence of central-carbon positions, one per residue.
///
/// Index `i` of the chain is the `i`-th residue in sequence order. The chain is
/// read-only once built; every analysis produces fresh output and never mutates it.
///
/// All coordinates are guaranteed to be finite, so downstream vector arithmetic can
/// only degenerate through geometry (coincident or collinear points), never through
/// NaN or infinity leaking in from the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackboneChain {
    points: Vec<Point3<f64>>,
}

impl BackboneChain {
    /// Builds a chain from an ordered list of positions.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NonFiniteCoordinate`] for the first position holding a
    /// NaN or infinite component.
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self, ChainError> {
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(ChainError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
                z: p.z,
            });
        }
        Ok(Self { points })
    }

    /// Builds a chain from raw `[x, y, z]` rows.
    pub fn from_rows<I>(rows: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        Self::new(
            rows.into_iter()
                .map(|[x, y, z]| Point3::new(x, y, z))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns a copy of the chain with its residue order mirrored.
    ///
    /// Residue `i` of the result is residue `len - 1 - i` of `self`.
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

impl std::ops::Index<usize> for BackboneChain {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl TryFrom<Vec<Point3<f64>>> for BackboneChain {
    type Error = ChainError;

    fn try_from(points: Vec<Point3<f64>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
