//! Scoring errors

use thiserror::Error;

/// Precondition failures surfaced by the scorer
///
/// Unknown ability and enchantment ids are not errors; they contribute nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The item store has no entry for this id
    #[error("Unknown item: {0}")]
    UnknownItem(u32),

    /// A weapon with zero, negative or non-finite attack speed
    #[error("Invalid weapon speed {speed} on item {item_id}")]
    InvalidWeaponSpeed { item_id: u32, speed: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoreError::UnknownItem(19019);
        assert!(err.to_string().contains("19019"));

        let err = ScoreError::InvalidWeaponSpeed { item_id: 5, speed: 0.0 };
        let display = err.to_string();
        assert!(display.contains("speed 0"));
        assert!(display.contains("item 5"));
    }
}
