//! Caller preconditions of the entry points
//!
//! The draw path does not report errors. Hosts may call the validators up front;
//! debug builds run them inside the entry points and panic on a violation.

use std::fmt;

use tesser_math::{ModelTransform, POSITION_STRIDE};

use crate::draw::VECTORS_PER_VERTEX;

/// A broken caller precondition
#[derive(Clone, Debug, PartialEq)]
pub enum ContractViolation {
    /// Transform descriptor does not hold exactly eight reals
    TransformArity(usize),
    /// Position buffer length is not a multiple of the stride
    PositionStride(usize),
    /// Draw element count for this many positions does not fit a `u32`
    ElementCount(usize),
    /// Clip planes do not satisfy `0 < near < far`
    DegenerateClipPlanes { near: f64, far: f64 },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::TransformArity(len) => write!(
                f,
                "transform descriptor has {} values, expected {}",
                len,
                ModelTransform::DESCRIPTOR_LEN
            ),
            ContractViolation::PositionStride(len) => write!(
                f,
                "position buffer of {} reals is not a multiple of {}",
                len, POSITION_STRIDE
            ),
            ContractViolation::ElementCount(positions) => write!(
                f,
                "{} positions need more than {} draw elements",
                positions,
                u32::MAX
            ),
            ContractViolation::DegenerateClipPlanes { near, far } => {
                write!(f, "degenerate clip planes near={} far={}", near, far)
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Check the inputs of a geometry draw
pub fn validate_draw_inputs(transform: &[f64], positions: &[f64]) -> Result<(), ContractViolation> {
    if transform.len() != ModelTransform::DESCRIPTOR_LEN {
        return Err(ContractViolation::TransformArity(transform.len()));
    }
    if positions.len() % POSITION_STRIDE != 0 {
        return Err(ContractViolation::PositionStride(positions.len()));
    }
    element_count(positions.len() / POSITION_STRIDE)?;
    Ok(())
}

/// Line-list element count drawn for `position_count` positions
pub fn element_count(position_count: usize) -> Result<u32, ContractViolation> {
    position_count
        .checked_mul(VECTORS_PER_VERTEX)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or(ContractViolation::ElementCount(position_count))
}

/// Check perspective clip planes
pub fn validate_clip_planes(near: f64, far: f64) -> Result<(), ContractViolation> {
    if near > 0.0 && far > near {
        Ok(())
    } else {
        Err(ContractViolation::DegenerateClipPlanes { near, far })
    }
}
