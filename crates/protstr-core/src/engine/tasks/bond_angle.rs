use crate::core::models::chain::BackboneChain;
use crate::core::utils::geometry::{cosine_between, displacement, is_degenerate, scaled_angle};
use crate::engine::config::DegenerateBondPolicy;
use crate::engine::error::EngineError;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

/// Computes the scaled bond angle at every residue of `chain`.
///
/// For an interior residue `i` the angle is taken between the incoming bond
/// `chain[i] - chain[i-1]` and the outgoing bond `chain[i+1] - chain[i]`, then mapped
/// onto `[0, 1]` (0° → 0, 180° → 1). Both chain ends have no angle and are reported as 0.
/// The output always has `chain.len()` entries.
///
/// # Errors
///
/// With [`DegenerateBondPolicy::Error`], returns [`EngineError::DegenerateGeometry`]
/// for the first interior residue adjacent to a zero-length bond.
#[instrument(skip_all, name = "bond_angle_task")]
pub fn run(chain: &BackboneChain, policy: DegenerateBondPolicy) -> Result<Vec<f64>, EngineError> {
    let len = chain.len();
    let mut angles = Vec::with_capacity(len);
    if len == 0 {
        return Ok(angles);
    }

    angles.push(0.0);
    for (offset, (prev, current, next)) in chain.points().iter().tuple_windows().enumerate() {
        let index = offset + 1;
        let incoming = displacement(prev, current);
        let outgoing = displacement(current, next);

        if is_degenerate(&incoming) || is_degenerate(&outgoing) {
            match policy {
                DegenerateBondPolicy::Error => {
                    return Err(EngineError::DegenerateGeometry { index });
                }
                DegenerateBondPolicy::Zero => {
                    warn!(index, "Zero-length bond next to residue, bond angle set to 0.");
                    angles.push(0.0);
                    continue;
                }
            }
        }

        // acos is undefined just outside [-1, 1], where nearly straight segments can land.
        let cosine = cosine_between(&incoming, &outgoing).clamp(-1.0, 1.0);
        angles.push(scaled_angle(cosine));
    }
    if len > 1 {
        angles.push(0.0);
    }

    debug!(residues = len, "Bond angles computed.");
    Ok(angles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn chain(rows: &[[f64; 3]]) -> BackboneChain {
        BackboneChain::from_rows(rows.iter().copied()).unwrap()
    }

    #[test]
    fn output_length_matches_chain_length() {
        for n in 0..6 {
            let rows: Vec<[f64; 3]> = (0..n).map(|k| [k as f64, (k * k) as f64, 0.0]).collect();
            let angles = run(&chain(&rows), DegenerateBondPolicy::Error).unwrap();
            assert_eq!(angles.len(), n);
        }
    }

    #[test]
    fn chain_ends_are_zero() {
        let angles = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[3], 0.0);
    }

    #[test]
    fn right_angle_turn_scales_to_one_half() {
        let angles = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert!(f64_approx_equal(angles[1], 0.5));
    }

    #[test]
    fn straight_segment_has_zero_angle_and_reversal_has_full_angle() {
        let straight = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert!(f64_approx_equal(straight[1], 0.0));

        let folded_back = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert!(f64_approx_equal(folded_back[1], 1.0));
    }

    #[test]
    fn nearly_straight_segment_never_yields_nan() {
        let angles = run(
            &chain(&[[0.0, 0.0, 0.0], [0.1, 0.1, 0.1], [0.3, 0.3, 0.3]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert!(angles[1].is_finite());
        assert!((0.0..=1.0).contains(&angles[1]));
    }

    #[test]
    fn coincident_points_fail_under_error_policy() {
        let result = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 1.0, 0.0]]),
            DegenerateBondPolicy::Error,
        );
        assert_eq!(result, Err(EngineError::DegenerateGeometry { index: 1 }));
    }

    #[test]
    fn coincident_points_yield_zero_under_zero_policy() {
        let angles = run(
            &chain(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]),
            DegenerateBondPolicy::Zero,
        )
        .unwrap();
        assert_eq!(angles, vec![0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn coincident_chain_ends_are_not_degenerate() {
        let angles = run(
            &chain(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]),
            DegenerateBondPolicy::Error,
        )
        .unwrap();
        assert_eq!(angles, vec![0.0, 0.0]);
    }

    #[test]
    fn extreme_coordinate_scales_keep_right_angle() {
        for scale in [1e160, 1e300, 1e-160, 1e-300] {
            let angles = run(
                &chain(&[[0.0, 0.0, 0.0], [scale, 0.0, 0.0], [scale, scale, 0.0]]),
                DegenerateBondPolicy::Error,
            )
            .unwrap();
            assert!(f64_approx_equal(angles[1], 0.5), "scale {scale}: {:?}", angles);
        }
    }
}
