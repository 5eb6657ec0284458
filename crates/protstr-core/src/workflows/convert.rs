use crate::core::models::chain::BackboneChain;
use crate::core::models::features::{ResidueFeatures, TorsionProfile};
use crate::engine::config::ConversionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Pass, Progress, ProgressReporter};
use crate::engine::tasks::{bond_angle, combine, torsion};
use tracing::{info, instrument};

type PassOutputs = (
    Result<Vec<f64>, EngineError>,
    TorsionProfile,
    TorsionProfile,
);

/// Converts an absolute backbone into its relative structure.
///
/// Residue `i` of the output describes residue `i` of `chain`: its bond angle and its
/// forward and backward torsion angle/direction pairs. The output has exactly
/// `chain.len()` records.
///
/// # Errors
///
/// Propagates [`EngineError::DegenerateGeometry`] from the bond-angle pass under the
/// `Error` policy, and [`EngineError::LengthMismatch`] should the passes ever disagree.
#[instrument(skip_all, name = "conversion_workflow")]
pub fn run(
    chain: &BackboneChain,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<ResidueFeatures>, EngineError> {
    let residues = chain.len();
    info!(
        residues,
        policy = %config.degenerate_bonds,
        "Converting absolute structure to relative structure."
    );

    let (bond_angles, forward, backward) = run_passes(chain, config, reporter);
    let bond_angles = bond_angles?;

    let features = reporter.track(Pass::Combine, residues, || {
        combine::run(&bond_angles, &forward, &backward)
    })?;

    reporter.report(Progress::Message(format!(
        "Computed features for {} residue(s).",
        features.len()
    )));
    info!(residues = features.len(), "Conversion complete.");
    Ok(features)
}

#[cfg(feature = "parallel")]
fn run_passes(
    chain: &BackboneChain,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> PassOutputs {
    let residues = chain.len();
    let (bond_angles, (forward, backward)) = rayon::join(
        || {
            reporter.track(Pass::BondAngles, residues, || {
                bond_angle::run(chain, config.degenerate_bonds)
            })
        },
        || {
            rayon::join(
                || reporter.track(Pass::ForwardTorsions, residues, || torsion::run(chain)),
                || {
                    reporter.track(Pass::BackwardTorsions, residues, || {
                        torsion::run_backward(chain)
                    })
                },
            )
        },
    );
    (bond_angles, forward, backward)
}

#[cfg(not(feature = "parallel"))]
fn run_passes(
    chain: &BackboneChain,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> PassOutputs {
    let residues = chain.len();
    let bond_angles = reporter.track(Pass::BondAngles, residues, || {
        bond_angle::run(chain, config.degenerate_bonds)
    });
    let forward = reporter.track(Pass::ForwardTorsions, residues, || torsion::run(chain));
    let backward = reporter.track(Pass::BackwardTorsions, residues, || {
        torsion::run_backward(chain)
    });
    (bond_angles, forward, backward)
}
