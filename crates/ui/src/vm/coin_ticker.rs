//! Intermediate balance readings for the claim-coins animation.

pub const TICK_STEPS: i64 = 20;
pub const TICK_INTERVAL_MS: u64 = 40;

/// Balances to display while counting up from `start` to `end`, oldest
/// first. The last reading is always the exact final balance, so a render
/// that drops intermediate frames still lands on the right number.
#[must_use]
pub fn ticker_values(start: i64, end: i64) -> Vec<i64> {
    if end <= start {
        return vec![end];
    }
    let span = end - start;
    (1..=TICK_STEPS)
        .map(|step| start + span * step / TICK_STEPS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_counts_up_and_lands_exactly_on_the_final_balance() {
        let values = ticker_values(100, 150);
        assert_eq!(values.len(), TICK_STEPS as usize);
        assert_eq!(*values.last().unwrap(), 150);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| *value > 100 && *value <= 150));
    }

    #[test]
    fn small_increments_never_overshoot() {
        let values = ticker_values(0, 3);
        assert_eq!(*values.last().unwrap(), 3);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn unchanged_or_lower_balance_yields_a_single_reading() {
        assert_eq!(ticker_values(50, 50), vec![50]);
        assert_eq!(ticker_values(80, 30), vec![30]);
    }
}
