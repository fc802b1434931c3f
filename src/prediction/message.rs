//! Chat message composition.
//!
//! Which lines are sent depends on where the chain currently is:
//!
//! ```text
//! current < auction_start               → auction line + lease line
//! auction_start <= current < lease      → lease line only
//! current >= lease_period_start         → nothing (no dispatch)
//! ```

use crate::prediction::format::format_utc;
use crate::prediction::types::{Prediction, PredictionResult, TargetBlocks};

/// Line announcing the auction start.
pub fn auction_line(date: &str, block: u64) -> String {
    format!("I predict that the *auction starts* on *{}* (block #{})", date, block)
}

/// Line announcing the lease period start.
pub fn lease_line(date: &str, block: u64) -> String {
    format!("I predict that *the lease slot starts* on *{}* (block #{})", date, block)
}

/// Compose the message for `current_block`, or `None` once the lease period has started.
pub fn compose_message(
    current_block: u64,
    targets: TargetBlocks,
    prediction: &Prediction,
) -> PredictionResult<Option<String>> {
    if current_block >= targets.lease_period_start {
        return Ok(None);
    }

    let lease = lease_line(
        &format_utc(prediction.lease_period_start_ms)?,
        targets.lease_period_start,
    );

    if current_block < targets.auction_start {
        let auction = auction_line(
            &format_utc(prediction.auction_start_ms)?,
            targets.auction_start,
        );
        Ok(Some(format!("{}\n{}", auction, lease)))
    } else {
        Ok(Some(lease))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: TargetBlocks = TargetBlocks {
        auction_start: 13_374_400,
        lease_period_start: 14_238_400,
    };

    fn prediction() -> Prediction {
        Prediction {
            average_block_time_ms: 6_000.0,
            // September 11, 2022, at 08:12:54 (UTC)
            auction_start_ms: 1_662_883_974_000,
            // January 05, 2023, at 03:04:05 (UTC)
            lease_period_start_ms: 1_672_887_845_000,
        }
    }

    #[test]
    fn test_before_auction_has_both_lines() {
        let message = compose_message(TARGETS.auction_start - 1, TARGETS, &prediction())
            .unwrap()
            .unwrap();

        assert_eq!(
            message,
            "I predict that the *auction starts* on *September 11, 2022, at 08:12:54 (UTC)* \
             (block #13374400)\n\
             I predict that *the lease slot starts* on *January 05, 2023, at 03:04:05 (UTC)* \
             (block #14238400)"
        );
    }

    #[test]
    fn test_at_auction_start_has_lease_line_only() {
        let message = compose_message(TARGETS.auction_start, TARGETS, &prediction())
            .unwrap()
            .unwrap();

        assert_eq!(
            message,
            "I predict that *the lease slot starts* on *January 05, 2023, at 03:04:05 (UTC)* \
             (block #14238400)"
        );
    }

    #[test]
    fn test_just_before_lease_has_lease_line_only() {
        let message = compose_message(TARGETS.lease_period_start - 1, TARGETS, &prediction())
            .unwrap()
            .unwrap();
        assert!(!message.contains('\n'));
        assert!(message.contains("lease slot"));
    }

    #[test]
    fn test_at_or_after_lease_has_no_message() {
        assert_eq!(
            compose_message(TARGETS.lease_period_start, TARGETS, &prediction()),
            Ok(None)
        );
        assert_eq!(
            compose_message(TARGETS.lease_period_start + 1_000, TARGETS, &prediction()),
            Ok(None)
        );
    }

    #[test]
    fn test_unformattable_prediction_is_an_error() {
        let mut prediction = prediction();
        prediction.lease_period_start_ms = i64::MAX;
        assert!(compose_message(TARGETS.auction_start, TARGETS, &prediction).is_err());
    }
}
