use crate::core::models::features::{ResidueFeatures, TorsionProfile};
use crate::engine::error::EngineError;
use itertools::izip;
use tracing::instrument;

/// Zips bond angles with the forward and backward torsion profiles, residue by residue.
///
/// # Errors
///
/// Returns [`EngineError::LengthMismatch`] when the five sequences do not all have the
/// same length. No partial output is produced in that case.
#[instrument(skip_all, name = "combine_task")]
pub fn run(
    bond_angles: &[f64],
    forward: &TorsionProfile,
    backward: &TorsionProfile,
) -> Result<Vec<ResidueFeatures>, EngineError> {
    let len = bond_angles.len();
    let lengths = [
        forward.angles.len(),
        forward.directions.len(),
        backward.angles.len(),
        backward.directions.len(),
    ];
    if lengths.iter().any(|&l| l != len) {
        return Err(EngineError::LengthMismatch {
            bond_angles: len,
            forward_angles: lengths[0],
            forward_directions: lengths[1],
            backward_angles: lengths[2],
            backward_directions: lengths[3],
        });
    }

    Ok(izip!(
        bond_angles,
        &forward.angles,
        &forward.directions,
        &backward.angles,
        &backward.directions
    )
    .map(
        |(&bond_angle, &forward_angle, &forward_direction, &backward_angle, &backward_direction)| {
            ResidueFeatures {
                bond_angle,
                forward_angle,
                forward_direction,
                backward_angle,
                backward_direction,
            }
        },
    )
    .collect())
}
