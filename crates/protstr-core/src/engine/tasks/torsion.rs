use crate::core::models::chain::BackboneChain;
use crate::core::models::features::{TorsionDirection, TorsionProfile};
use crate::core::utils::geometry::{
    COSINE_DECIMALS, cosine_between, is_degenerate, plane_normal, round_to_decimals,
    scaled_angle, signed_plane_offset,
};
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument, trace};

/// Outcome of looking for a usable reference plane behind a residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneSearch {
    Found(Vector3<f64>),
    NotFound,
}

/// Finds the normal of the plane `p` preceding residue `i`.
///
/// The plane through `points[i-2..=i]` is tried first. While it is degenerate the
/// window slides one residue toward the chain start, down to the triple starting at
/// residue 0. Requires `i >= 2`.
pub fn find_reference_plane(points: &[Point3<f64>], i: usize) -> PlaneSearch {
    (2..=i)
        .rev()
        .map(|j| plane_normal(&points[j - 2], &points[j - 1], &points[j]))
        .find(|normal| !is_degenerate(normal))
        .map_or(PlaneSearch::NotFound, PlaneSearch::Found)
}

fn torsion_at(points: &[Point3<f64>], i: usize) -> Option<(f64, TorsionDirection)> {
    let n_q = plane_normal(&points[i - 1], &points[i], &points[i + 1]);
    if is_degenerate(&n_q) {
        trace!(index = i, "Plane q is degenerate.");
        return None;
    }

    let PlaneSearch::Found(n_p) = find_reference_plane(points, i) else {
        trace!(index = i, "No non-degenerate plane p before residue.");
        return None;
    };

    let cosine = round_to_decimals(cosine_between(&n_p, &n_q), COSINE_DECIMALS);
    let angle = scaled_angle(cosine);

    // Plane p is anchored at residue i even when its normal came from an earlier window.
    let offset = signed_plane_offset(&n_p, &points[i], &points[i + 1]);

    Some((angle, TorsionDirection::from_signed_distance(offset)))
}

/// Computes forward-looking torsion angles and directions for every residue.
///
/// Residues 0, 1 and the last residue lack the context for a torsion and stay at the
/// neutral value (angle 0, [`TorsionDirection::Coplanar`]), as does any residue whose
/// plane `q` is degenerate or that has no non-degenerate plane `p` behind it.
#[instrument(skip_all, name = "torsion_task")]
pub fn run(chain: &BackboneChain) -> TorsionProfile {
    let points = chain.points();
    let len = points.len();
    let mut profile = TorsionProfile::neutral(len);
    let mut degenerate = 0usize;

    for i in 2..len.saturating_sub(1) {
        match torsion_at(points, i) {
            Some((angle, direction)) => {
                profile.angles[i] = angle;
                profile.directions[i] = direction;
            }
            None => degenerate += 1,
        }
    }

    debug!(residues = len, degenerate, "Torsions computed.");
    profile
}

/// Backward-looking torsions: the forward pass over the mirrored chain, mapped back
/// to the original residue order.
pub fn run_backward(chain: &BackboneChain) -> TorsionProfile {
    run(&chain.reversed()).reversed()
}
