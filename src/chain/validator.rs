use crate::foundation::core::{Circle, is_well_formed, overlaps};
use crate::foundation::error::AttemptError;

/// Check the closed chain: every circle well formed, no pair overlapping.
///
/// Placement only guarantees tangency with the predecessor, and the closing circle is never
/// checked during placement, so every unordered pair is tested. O(n²).
pub fn validate_chain(circles: &[Circle]) -> Result<(), AttemptError> {
    if let Some(index) = circles.iter().position(|c| !is_well_formed(c)) {
        return Err(AttemptError::DegenerateCircle { index });
    }
    for (first, a) in circles.iter().enumerate() {
        for (offset, b) in circles[first + 1..].iter().enumerate() {
            if overlaps(a, b) {
                return Err(AttemptError::OverlapRejected {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    Ok(())
}

pub fn is_valid(circles: &[Circle]) -> bool {
    validate_chain(circles).is_ok()
}

#[cfg(test)]
#[path = "../../tests/unit/chain/validator.rs"]
mod tests;
