use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(
        "Degenerate geometry at residue {index}: a neighbouring bond vector has zero length (coincident consecutive positions)"
    )]
    DegenerateGeometry { index: usize },

    #[error(
        "Feature sequences disagree in length (bond angles: {bond_angles}, forward angles: {forward_angles}, forward directions: {forward_directions}, backward angles: {backward_angles}, backward directions: {backward_directions})"
    )]
    LengthMismatch {
        bond_angles: usize,
        forward_angles: usize,
        forward_directions: usize,
        backward_angles: usize,
        backward_directions: usize,
    },
}
