use serde::Serialize;
use std::fmt;

/// The handedness of a torsion: the side of the reference plane the next residue falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "i8")]
pub enum TorsionDirection {
    /// Below the reference plane (sign −1).
    Negative,
    /// On the plane, or no torsion defined at this residue (sign 0).
    #[default]
    Coplanar,
    /// Above the reference plane (sign +1).
    Positive,
}

impl TorsionDirection {
    /// Classifies a signed point-to-plane distance by its sign. Exact zero is coplanar.
    pub fn from_signed_distance(distance: f64) -> Self {
        if distance > 0.0 {
            TorsionDirection::Positive
        } else if distance < 0.0 {
            TorsionDirection::Negative
        } else {
            TorsionDirection::Coplanar
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            TorsionDirection::Negative => -1,
            TorsionDirection::Coplanar => 0,
            TorsionDirection::Positive => 1,
        }
    }
}

impl From<TorsionDirection> for i8 {
    fn from(direction: TorsionDirection) -> Self {
        direction.as_i8()
    }
}

impl fmt::Display for TorsionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Per-residue output of one torsion pass over a chain.
///
/// `angles[i]` is the scaled angle between the planes meeting at residue `i`
/// (0 = 0°, 1 = 180°) and `directions[i]` its handedness. Both vectors always have
/// the length of the analyzed chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorsionProfile {
    pub angles: Vec<f64>,
    pub directions: Vec<TorsionDirection>,
}

impl TorsionProfile {
    /// A profile of `len` residues with no torsion defined anywhere.
    pub fn neutral(len: usize) -> Self {
        Self {
            angles: vec![0.0; len],
            directions: vec![TorsionDirection::Coplanar; len],
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The same profile with its index order mirrored.
    pub fn reversed(mut self) -> Self {
        self.angles.reverse();
        self.directions.reverse();
        self
    }
}

/// The relative, rotation- and translation-invariant description of one residue.
///
/// Field names serialize to the column headers used by the table and CSV writers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResidueFeatures {
    /// Scaled angle between the incoming and outgoing bond vectors.
    #[serde(rename = "CCA")]
    pub bond_angle: f64,
    /// Scaled torsion angle looking forward along the chain.
    #[serde(rename = "CCPTA_F")]
    pub forward_angle: f64,
    #[serde(rename = "CCPTD_F")]
    pub forward_direction: TorsionDirection,
    /// Scaled torsion angle looking backward along the chain.
    #[serde(rename = "CCPTA_B")]
    pub backward_angle: f64,
    #[serde(rename = "CCPTD_B")]
    pub backward_direction: TorsionDirection,
}

impl ResidueFeatures {
    /// Column headers in output order.
    pub const COLUMNS: [&'static str; 5] = ["CCA", "CCPTA_F", "CCPTD_F", "CCPTA_B", "CCPTD_B"];
}
