use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::TribunalError;
use crate::state::dispute::DisputeOutcome;
use crate::state::escrow::RoundResult;
use crate::state::protocol::ProtocolConfig;
use crate::state::records::JurorRecord;

/// Fee parameters snapshotted from config at resolution time. Passed
/// explicitly so the settlement math has no ambient state.
#[derive(Clone, Copy, Debug)]
pub struct FeeSchedule {
    pub fee_bps: u16,
    pub juror_share_bps: u16,
    pub no_participation_fee_bps: u16,
}

impl FeeSchedule {
    pub fn from_config(config: &ProtocolConfig) -> Self {
        Self {
            fee_bps: config.fee_bps,
            juror_share_bps: config.juror_share_bps,
            no_participation_fee_bps: config.no_participation_fee_bps,
        }
    }
}

/// The per-round pool split, written once into the RoundResult.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementSplit {
    pub winner_pool: u64,
    pub juror_pool: u64,
    pub treasury_pool: u64,
    pub safe_bond: u64,
}

/// Tally the weighted votes. Zero total weight is NoParticipation; ties
/// favor the incumbent defender.
pub fn resolve_outcome(votes_for_challenger: u64, votes_for_defender: u64) -> DisputeOutcome {
    if votes_for_challenger == 0 && votes_for_defender == 0 {
        DisputeOutcome::NoParticipation
    } else if votes_for_challenger > votes_for_defender {
        DisputeOutcome::ChallengerWins
    } else {
        DisputeOutcome::DefenderWins
    }
}

/// Defender bond exposed to a round. In match mode challengers only put at
/// risk what their stake matches; otherwise the full bond rides.
pub fn bond_exposure(available_bond: u64, total_stake: u64, match_mode: bool) -> u64 {
    if match_mode {
        available_bond.min(total_stake)
    } else {
        available_bond
    }
}

/// Split the round's pools. All arithmetic is integer with truncating
/// division; every truncation remainder lands in the treasury pool.
///
/// Invariant: `winner_pool + juror_pool + treasury_pool + safe_bond ==
/// total_stake + bond_at_risk + safe_bond`.
pub fn compute_settlement(
    outcome: DisputeOutcome,
    total_stake: u64,
    bond_at_risk: u64,
    safe_bond: u64,
    is_restore: bool,
    fees: &FeeSchedule,
) -> Result<SettlementSplit> {
    let risk_pool = total_stake
        .checked_add(bond_at_risk)
        .ok_or(TribunalError::MathOverflow)?;

    match outcome {
        DisputeOutcome::None => err!(TribunalError::DisputeNotPending),
        DisputeOutcome::NoParticipation => {
            // Both sides refund at (100% - fee); the fee and all rounding
            // dust go to treasury. The refund entitlement is stored as the
            // winner pool.
            let refund_bps = BPS_DENOM - u64::from(fees.no_participation_fee_bps);
            let challenger_refund = mul_div(total_stake, refund_bps, BPS_DENOM)?;
            let defender_refund = mul_div(bond_at_risk, refund_bps, BPS_DENOM)?;
            let winner_pool = challenger_refund
                .checked_add(defender_refund)
                .ok_or(TribunalError::MathOverflow)?;
            Ok(SettlementSplit {
                winner_pool,
                juror_pool: 0,
                treasury_pool: risk_pool - winner_pool,
                safe_bond,
            })
        }
        DisputeOutcome::ChallengerWins | DisputeOutcome::DefenderWins => {
            let total_fees = mul_div(risk_pool, u64::from(fees.fee_bps), BPS_DENOM)?;
            let juror_pool = mul_div(total_fees, u64::from(fees.juror_share_bps), BPS_DENOM)?;
            let treasury_pool = total_fees - juror_pool;
            let winner_pool = risk_pool - total_fees;

            // A rejected restoration has no winning participant side; the
            // pool that would have paid a winner goes to treasury.
            if is_restore && outcome == DisputeOutcome::DefenderWins {
                Ok(SettlementSplit {
                    winner_pool: 0,
                    juror_pool,
                    treasury_pool: treasury_pool
                        .checked_add(winner_pool)
                        .ok_or(TribunalError::MathOverflow)?,
                    safe_bond,
                })
            } else {
                Ok(SettlementSplit {
                    winner_pool,
                    juror_pool,
                    treasury_pool,
                    safe_bond,
                })
            }
        }
    }
}

/// Juror reward from the immutable round snapshot: pro-rata slice of the
/// juror pool, paid only when the recorded choice matches the outcome.
pub fn juror_reward(result: &RoundResult, record: &JurorRecord) -> Result<u64> {
    if !record.voted_with(result.outcome) {
        return Ok(0);
    }
    pro_rata(result.juror_pool, record.voting_power, result.total_vote_weight)
}

/// Challenger reward from the immutable round snapshot.
pub fn challenger_reward(result: &RoundResult, stake: u64) -> Result<u64> {
    match result.outcome {
        DisputeOutcome::ChallengerWins => pro_rata(result.winner_pool, stake, result.total_stake),
        DisputeOutcome::NoParticipation => pro_rata(result.winner_pool, stake, result.risk_pool()),
        _ => Ok(0),
    }
}

/// Defender reward from the immutable round snapshot. The safe-bond share
/// returns regardless of outcome; the at-risk share pays out only on a
/// defender win or a no-participation refund.
pub fn defender_reward(result: &RoundResult, bond: u64) -> Result<u64> {
    let total_bond = result.total_defender_bond();
    let safe_share = pro_rata(result.safe_bond, bond, total_bond)?;
    let risk_share = match result.outcome {
        DisputeOutcome::DefenderWins => pro_rata(result.winner_pool, bond, total_bond)?,
        DisputeOutcome::NoParticipation => {
            let at_risk = pro_rata(result.bond_at_risk, bond, total_bond)?;
            pro_rata(result.winner_pool, at_risk, result.risk_pool())?
        }
        _ => 0,
    };
    safe_share
        .checked_add(risk_share)
        .ok_or(error!(TribunalError::MathOverflow))
}

/// `amount * numerator / denominator` through u128, overflow-checked.
pub fn mul_div(amount: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(TribunalError::MathOverflow)?
        .checked_div(denominator as u128)
        .ok_or(TribunalError::MathOverflow)?;
    u64::try_from(value).map_err(|_| error!(TribunalError::MathOverflow))
}

/// Pro-rata slice of `pool`: zero when the whole is zero.
pub fn pro_rata(pool: u64, part: u64, whole: u64) -> Result<u64> {
    if whole == 0 {
        return Ok(0);
    }
    mul_div(pool, part, whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::VoteChoice;

    const FEES: FeeSchedule = FeeSchedule {
        fee_bps: 2_000,
        juror_share_bps: 9_500,
        no_participation_fee_bps: 100,
    };

    fn settle(
        outcome: DisputeOutcome,
        total_stake: u64,
        bond_at_risk: u64,
        safe_bond: u64,
        is_restore: bool,
    ) -> SettlementSplit {
        compute_settlement(outcome, total_stake, bond_at_risk, safe_bond, is_restore, &FEES)
            .unwrap()
    }

    fn round_result(outcome: DisputeOutcome, split: SettlementSplit, stake: u64, at_risk: u64) -> RoundResult {
        RoundResult {
            subject: Pubkey::new_unique(),
            round: 0,
            is_restore: false,
            outcome,
            total_stake: stake,
            bond_at_risk: at_risk,
            safe_bond: split.safe_bond,
            total_vote_weight: 0,
            winner_pool: split.winner_pool,
            juror_pool: split.juror_pool,
            treasury_pool: split.treasury_pool,
            juror_count: 0,
            challenger_count: 0,
            defender_count: 0,
            juror_claims: 0,
            challenger_claims: 0,
            defender_claims: 0,
            stake_unlocks: 0,
            resolved_at: 0,
            bump: 255,
        }
    }

    fn assert_conserved(split: &SettlementSplit, total_stake: u64, bond_at_risk: u64) {
        let total_pool = total_stake + bond_at_risk + split.safe_bond;
        assert_eq!(
            split.winner_pool + split.juror_pool + split.treasury_pool + split.safe_bond,
            total_pool,
        );
    }

    #[test]
    fn million_unit_pool_splits_80_19_1() {
        let split = settle(DisputeOutcome::ChallengerWins, 600_000, 400_000, 0, false);
        assert_eq!(split.juror_pool, 190_000);
        assert_eq!(split.treasury_pool, 10_000);
        assert_eq!(split.winner_pool, 800_000);
        assert_conserved(&split, 600_000, 400_000);
    }

    #[test]
    fn juror_with_half_the_weight_claims_95_000() {
        let split = settle(DisputeOutcome::ChallengerWins, 600_000, 400_000, 0, false);
        let mut result = round_result(DisputeOutcome::ChallengerWins, split, 600_000, 400_000);
        result.total_vote_weight = 2_000;
        let record = JurorRecord {
            subject: result.subject,
            juror: Pubkey::new_unique(),
            round: 0,
            choice: VoteChoice::Challenger,
            voting_power: 1_000,
            stake_allocation: 1_000,
            reward_claimed: false,
            stake_unlocked: false,
            voted_at: 1,
            bump: 255,
        };
        assert_eq!(juror_reward(&result, &record).unwrap(), 95_000);

        // Losing side earns nothing; principal unlock is separate.
        let loser = JurorRecord {
            choice: VoteChoice::Defender,
            ..record
        };
        assert_eq!(juror_reward(&result, &loser).unwrap(), 0);
    }

    #[test]
    fn no_participation_refunds_99_percent() {
        let split = settle(DisputeOutcome::NoParticipation, 1_000_000, 0, 0, false);
        assert_eq!(split.winner_pool, 990_000);
        assert_eq!(split.juror_pool, 0);
        assert_eq!(split.treasury_pool, 10_000);
        assert_conserved(&split, 1_000_000, 0);

        let result = round_result(DisputeOutcome::NoParticipation, split, 1_000_000, 0);
        assert_eq!(challenger_reward(&result, 1_000_000).unwrap(), 990_000);
    }

    #[test]
    fn no_participation_splits_refund_across_sides() {
        let split = settle(DisputeOutcome::NoParticipation, 300_000, 200_000, 50_000, false);
        assert_conserved(&split, 300_000, 200_000);
        let result = round_result(DisputeOutcome::NoParticipation, split, 300_000, 200_000);
        // 99% of each side's contribution, truncating.
        assert_eq!(challenger_reward(&result, 300_000).unwrap(), 297_000);
        // Sole defender: full safe bond plus 99% of the at-risk portion.
        assert_eq!(defender_reward(&result, 250_000).unwrap(), 50_000 + 198_000);
    }

    #[test]
    fn conservation_holds_under_truncation() {
        let cases: &[(u64, u64, u64)] = &[
            (1, 0, 0),
            (7, 3, 1),
            (99, 101, 13),
            (1_000_003, 999_999, 17),
            (u32::MAX as u64, 12_345_678, 9_999),
            (123_456_789_123, 987_654_321, 55_555),
        ];
        for &(stake, at_risk, safe) in cases {
            for outcome in [
                DisputeOutcome::ChallengerWins,
                DisputeOutcome::DefenderWins,
                DisputeOutcome::NoParticipation,
            ] {
                let split = settle(outcome, stake, at_risk, safe, false);
                assert_conserved(&split, stake, at_risk);
            }
        }
    }

    #[test]
    fn tie_break_always_favors_defender() {
        assert_eq!(resolve_outcome(0, 0), DisputeOutcome::NoParticipation);
        assert_eq!(resolve_outcome(500, 500), DisputeOutcome::DefenderWins);
        assert_eq!(resolve_outcome(1, 1), DisputeOutcome::DefenderWins);
        assert_eq!(resolve_outcome(501, 500), DisputeOutcome::ChallengerWins);
        assert_eq!(resolve_outcome(499, 500), DisputeOutcome::DefenderWins);
        // Weight on one side only still resolves, never NoParticipation.
        assert_eq!(resolve_outcome(0, 1), DisputeOutcome::DefenderWins);
        assert_eq!(resolve_outcome(1, 0), DisputeOutcome::ChallengerWins);
    }

    #[test]
    fn rejected_restoration_sweeps_winner_pool_to_treasury() {
        let split = settle(DisputeOutcome::DefenderWins, 1_000_000, 0, 0, true);
        assert_eq!(split.winner_pool, 0);
        assert_eq!(split.juror_pool, 190_000);
        assert_eq!(split.treasury_pool, 810_000);
        assert_conserved(&split, 1_000_000, 0);
    }

    #[test]
    fn successful_restoration_pays_the_restorer_pool() {
        let split = settle(DisputeOutcome::ChallengerWins, 1_000_000, 0, 0, true);
        assert_eq!(split.winner_pool, 800_000);
        let result = round_result(DisputeOutcome::ChallengerWins, split, 1_000_000, 0);
        assert_eq!(challenger_reward(&result, 1_000_000).unwrap(), 800_000);
    }

    #[test]
    fn defender_win_returns_safe_bond_and_winnings() {
        // match mode: stake 400k vs bond 500k leaves 100k safe
        let at_risk = bond_exposure(500_000, 400_000, true);
        assert_eq!(at_risk, 400_000);
        let split = settle(DisputeOutcome::DefenderWins, 400_000, at_risk, 100_000, false);
        assert_conserved(&split, 400_000, at_risk);
        let result = round_result(DisputeOutcome::DefenderWins, split, 400_000, at_risk);

        // Two defenders, 300k and 200k of the 500k bond.
        let a = defender_reward(&result, 300_000).unwrap();
        let b = defender_reward(&result, 200_000).unwrap();
        assert_eq!(a, 60_000 + 384_000); // 3/5 safe + 3/5 winner pool
        assert_eq!(b, 40_000 + 256_000);
        assert_eq!(a + b, split.safe_bond + split.winner_pool);

        // On a challenger win only the safe share returns.
        let lost = round_result(DisputeOutcome::ChallengerWins, split, 400_000, at_risk);
        assert_eq!(defender_reward(&lost, 300_000).unwrap(), 60_000);
    }

    #[test]
    fn full_exposure_without_match_mode() {
        assert_eq!(bond_exposure(500_000, 100, false), 500_000);
        assert_eq!(bond_exposure(500_000, 700_000, true), 500_000);
        assert_eq!(bond_exposure(0, 700_000, true), 0);
    }

    #[test]
    fn challenger_loss_pays_nothing() {
        let split = settle(DisputeOutcome::DefenderWins, 400_000, 400_000, 0, false);
        let result = round_result(DisputeOutcome::DefenderWins, split, 400_000, 400_000);
        assert_eq!(challenger_reward(&result, 400_000).unwrap(), 0);
    }

    #[test]
    fn pro_rata_zero_whole_is_zero() {
        assert_eq!(pro_rata(1_000, 10, 0).unwrap(), 0);
        assert_eq!(pro_rata(0, 10, 100).unwrap(), 0);
    }

    #[test]
    fn mul_div_overflow_guard() {
        assert!(mul_div(u64::MAX, u64::MAX, 1).is_err());
        assert_eq!(mul_div(u64::MAX, 1, 1).unwrap(), u64::MAX);
    }
}
