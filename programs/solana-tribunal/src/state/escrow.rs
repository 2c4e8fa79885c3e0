use anchor_lang::prelude::*;

use crate::constants::STAKE_UNLOCK_PERIOD;
use crate::errors::TribunalError;
use crate::state::dispute::DisputeOutcome;

/// Per-subject lamport vault. `balance` is the ledger figure; the PDA's
/// lamports additionally carry the rent-exempt minimum.
#[account]
pub struct Escrow {
    pub subject: Pubkey, // 32
    pub balance: u64,    // 8
    pub rounds: u64,     // 8 (resolved rounds recorded against this escrow)
    pub bump: u8,        // 1
}

impl Escrow {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TribunalError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TribunalError::InsufficientEscrow)?;
        Ok(())
    }
}

/// Immutable settlement snapshot written once per resolved round. Claim
/// paths read only this account; the claim counters are the only fields
/// that change afterwards.
#[account]
pub struct RoundResult {
    pub subject: Pubkey,
    pub round: u64,
    pub is_restore: bool,
    pub outcome: DisputeOutcome,
    pub total_stake: u64,       // challenger-side stake (restore stake for restorations)
    pub bond_at_risk: u64,
    pub safe_bond: u64,
    pub total_vote_weight: u64,
    pub winner_pool: u64,       // refund pool on NoParticipation rounds
    pub juror_pool: u64,
    pub treasury_pool: u64,
    pub juror_count: u32,
    pub challenger_count: u32,
    pub defender_count: u32,
    pub juror_claims: u32,
    pub challenger_claims: u32,
    pub defender_claims: u32,
    pub stake_unlocks: u32,
    pub resolved_at: i64,
    pub bump: u8,
}

impl RoundResult {
    // 8 (discriminator)
    // 32 (subject) + 8 (round) + 1 (is_restore) + 1 (outcome)
    // 8 * 7 (stake/bond/weight/pool figures)
    // 4 * 7 (counts and claim counters)
    // 8 (resolved_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 8 + 1 + 1 + 8 * 7 + 4 * 7 + 8 + 1;

    /// Sum of the risk-bearing contributions settled this round.
    pub fn risk_pool(&self) -> u64 {
        // total_stake + bond_at_risk, both settled from u64 ledgers at
        // resolution; the sum was range-checked there.
        self.total_stake.saturating_add(self.bond_at_risk)
    }

    pub fn total_defender_bond(&self) -> u64 {
        self.bond_at_risk.saturating_add(self.safe_bond)
    }

    pub fn unlock_ready_at(&self) -> i64 {
        self.resolved_at.saturating_add(STAKE_UNLOCK_PERIOD)
    }

    /// Juror principal unlocks at the boundary, not after it.
    pub fn stake_unlockable(&self, now: i64) -> bool {
        now >= self.unlock_ready_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_balance_is_checked() {
        let mut escrow = Escrow {
            subject: Pubkey::new_unique(),
            balance: 100,
            rounds: 0,
            bump: 255,
        };
        escrow.credit(50).unwrap();
        assert_eq!(escrow.balance, 150);
        escrow.debit(150).unwrap();
        assert_eq!(escrow.balance, 0);
        assert!(escrow.debit(1).is_err());
        escrow.balance = u64::MAX;
        assert!(escrow.credit(1).is_err());
    }

    #[test]
    fn unlock_opens_exactly_at_the_boundary() {
        let result = RoundResult {
            subject: Pubkey::new_unique(),
            round: 0,
            is_restore: false,
            outcome: DisputeOutcome::DefenderWins,
            total_stake: 0,
            bond_at_risk: 0,
            safe_bond: 0,
            total_vote_weight: 0,
            winner_pool: 0,
            juror_pool: 0,
            treasury_pool: 0,
            juror_count: 0,
            challenger_count: 0,
            defender_count: 0,
            juror_claims: 0,
            challenger_claims: 0,
            defender_claims: 0,
            stake_unlocks: 0,
            resolved_at: 1_700_000_000,
            bump: 255,
        };
        let ready = result.unlock_ready_at();
        assert_eq!(ready, 1_700_000_000 + 7 * 86_400);
        assert!(!result.stake_unlockable(ready - 1));
        assert!(result.stake_unlockable(ready));
        assert!(result.stake_unlockable(ready + 1));
    }
}
