use anchor_lang::prelude::*;

use crate::constants::{REPUTATION_SCALE, REPUTATION_STEP};
use crate::utils::math::mul_div;

/// Bond floor for opening a dispute, inversely scaled by reputation: a
/// fresh 50% participant posts 1.5x the base bond, a 0% participant 2x,
/// a perfect record 1x. Monotone non-increasing, never below `floor`.
pub fn minimum_bond(reputation: u64, base_bond: u64, floor: u64) -> Result<u64> {
    let rep = reputation.min(REPUTATION_SCALE);
    let scaled = mul_div(base_bond, 2 * REPUTATION_SCALE - rep, REPUTATION_SCALE)?;
    Ok(scaled.max(floor))
}

/// One won round, saturating at the scale ceiling.
pub fn reputation_after_win(reputation: u64) -> u64 {
    reputation
        .saturating_add(REPUTATION_STEP)
        .min(REPUTATION_SCALE)
}

/// One lost round, saturating at zero.
pub fn reputation_after_loss(reputation: u64) -> u64 {
    reputation.saturating_sub(REPUTATION_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INITIAL_REPUTATION;

    #[test]
    fn minimum_bond_is_monotone_non_increasing() {
        let base = 1_000_000;
        let mut prev = u64::MAX;
        for rep in (0..=REPUTATION_SCALE).step_by(50_000) {
            let bond = minimum_bond(rep, base, 0).unwrap();
            assert!(bond <= prev, "bond rose at reputation {rep}");
            prev = bond;
        }
    }

    #[test]
    fn minimum_bond_anchor_points() {
        let base = 1_000_000;
        assert_eq!(minimum_bond(0, base, 0).unwrap(), 2_000_000);
        assert_eq!(minimum_bond(INITIAL_REPUTATION, base, 0).unwrap(), 1_500_000);
        assert_eq!(minimum_bond(REPUTATION_SCALE, base, 0).unwrap(), 1_000_000);
        // Out-of-range reputation clamps rather than underflowing.
        assert_eq!(minimum_bond(u64::MAX, base, 0).unwrap(), 1_000_000);
    }

    #[test]
    fn minimum_bond_never_below_floor() {
        assert_eq!(minimum_bond(REPUTATION_SCALE, 10, 5_000).unwrap(), 5_000);
        assert_eq!(minimum_bond(0, 0, 5_000).unwrap(), 5_000);
    }

    #[test]
    fn reputation_saturates_at_bounds() {
        assert_eq!(reputation_after_win(INITIAL_REPUTATION), 525_000);
        assert_eq!(reputation_after_loss(INITIAL_REPUTATION), 475_000);
        assert_eq!(reputation_after_win(REPUTATION_SCALE), REPUTATION_SCALE);
        assert_eq!(reputation_after_win(REPUTATION_SCALE - 1), REPUTATION_SCALE);
        assert_eq!(reputation_after_loss(0), 0);
        assert_eq!(reputation_after_loss(REPUTATION_STEP - 1), 0);
    }
}
