use anchor_lang::prelude::*;

use crate::errors::TribunalError;
use crate::state::records::VoteChoice;

/// One contest account per subject, reset and reused each round. Settlement
/// math never reads these fields after resolution; the per-round snapshot
/// lives in `RoundResult`.
#[account]
pub struct Dispute {
    pub subject: Pubkey,
    pub round: u64,
    pub status: DisputeStatus,
    pub is_restore: bool,
    pub total_stake: u64,          // challenger-side stake (regular rounds)
    pub bond_at_risk: u64,         // defender bond exposed this round
    pub restore_stake: u64,        // restorer-side stake (restorations)
    pub challenger_count: u32,
    pub defender_count: u32,
    pub votes_for_challenger: u64, // weighted
    pub votes_for_defender: u64,   // weighted
    pub vote_count: u32,           // initial votes, not add-to-vote events
    pub voting_starts_at: i64,
    pub voting_ends_at: i64,
    pub outcome: DisputeOutcome,
    pub resolved_at: i64,
    pub bump: u8,
}

impl Dispute {
    // 8 (discriminator)
    // 32 (subject) + 8 (round) + 1 (status) + 1 (is_restore)
    // 8 (total_stake) + 8 (bond_at_risk) + 8 (restore_stake)
    // 4 (challenger_count) + 4 (defender_count)
    // 8 (votes_for_challenger) + 8 (votes_for_defender) + 4 (vote_count)
    // 8 (voting_starts_at) + 8 (voting_ends_at)
    // 1 (outcome) + 8 (resolved_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 8 + 1 + 1 + 8 * 3 + 4 * 2 + 8 * 2 + 4 + 8 * 2 + 1 + 8 + 1;

    /// Reset the account for a fresh round. Clears every tally left over
    /// from the previous contest.
    pub fn begin(
        &mut self,
        subject: Pubkey,
        round: u64,
        is_restore: bool,
        now: i64,
        voting_period: i64,
        bump: u8,
    ) -> Result<()> {
        self.subject = subject;
        self.round = round;
        self.status = DisputeStatus::Pending;
        self.is_restore = is_restore;
        self.total_stake = 0;
        self.bond_at_risk = 0;
        self.restore_stake = 0;
        self.challenger_count = 0;
        self.defender_count = 0;
        self.votes_for_challenger = 0;
        self.votes_for_defender = 0;
        self.vote_count = 0;
        self.voting_starts_at = now;
        self.voting_ends_at = now
            .checked_add(voting_period)
            .ok_or(TribunalError::MathOverflow)?;
        self.outcome = DisputeOutcome::None;
        self.resolved_at = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn is_voting_open(&self, now: i64) -> bool {
        self.status == DisputeStatus::Pending && now < self.voting_ends_at
    }

    /// Record an initial vote: one tally bump plus the vote counter.
    pub fn record_vote(&mut self, choice: VoteChoice, weight: u64) -> Result<()> {
        self.add_weight(choice, weight)?;
        self.vote_count = self
            .vote_count
            .checked_add(1)
            .ok_or(TribunalError::MathOverflow)?;
        Ok(())
    }

    /// Add weight to an existing vote's side without counting a new voter.
    pub fn add_weight(&mut self, choice: VoteChoice, weight: u64) -> Result<()> {
        let tally = match choice {
            VoteChoice::Challenger => &mut self.votes_for_challenger,
            VoteChoice::Defender => &mut self.votes_for_defender,
        };
        *tally = tally
            .checked_add(weight)
            .ok_or(TribunalError::MathOverflow)?;
        Ok(())
    }

    pub fn total_vote_weight(&self) -> Result<u64> {
        self.votes_for_challenger
            .checked_add(self.votes_for_defender)
            .ok_or(error!(TribunalError::MathOverflow))
    }

    /// Challenger-side stake regardless of contest kind.
    pub fn contest_stake(&self) -> u64 {
        if self.is_restore {
            self.restore_stake
        } else {
            self.total_stake
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisputeStatus {
    None,
    Pending,
    Resolved,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisputeOutcome {
    None,
    ChallengerWins,
    DefenderWins,
    NoParticipation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_dispute() -> Dispute {
        let mut dispute = Dispute {
            subject: Pubkey::new_unique(),
            round: 3,
            status: DisputeStatus::Resolved,
            is_restore: true,
            total_stake: 9,
            bond_at_risk: 9,
            restore_stake: 9,
            challenger_count: 9,
            defender_count: 9,
            votes_for_challenger: 9,
            votes_for_defender: 9,
            vote_count: 9,
            voting_starts_at: 0,
            voting_ends_at: 0,
            outcome: DisputeOutcome::DefenderWins,
            resolved_at: 9,
            bump: 254,
        };
        dispute
            .begin(dispute.subject, 4, false, 1_000, 86_400, 254)
            .unwrap();
        dispute
    }

    #[test]
    fn begin_clears_previous_round() {
        let dispute = pending_dispute();
        assert_eq!(dispute.status, DisputeStatus::Pending);
        assert_eq!(dispute.round, 4);
        assert_eq!(dispute.total_stake, 0);
        assert_eq!(dispute.votes_for_challenger, 0);
        assert_eq!(dispute.votes_for_defender, 0);
        assert_eq!(dispute.vote_count, 0);
        assert_eq!(dispute.outcome, DisputeOutcome::None);
        assert_eq!(dispute.voting_ends_at, 1_000 + 86_400);
    }

    #[test]
    fn voting_window_boundaries() {
        let dispute = pending_dispute();
        assert!(dispute.is_voting_open(1_000));
        assert!(dispute.is_voting_open(1_000 + 86_399));
        // The boundary itself is closed.
        assert!(!dispute.is_voting_open(1_000 + 86_400));
    }

    #[test]
    fn tallies_accumulate_per_side() {
        let mut dispute = pending_dispute();
        dispute.record_vote(VoteChoice::Challenger, 100).unwrap();
        dispute.record_vote(VoteChoice::Defender, 40).unwrap();
        dispute.add_weight(VoteChoice::Challenger, 25).unwrap();
        assert_eq!(dispute.votes_for_challenger, 125);
        assert_eq!(dispute.votes_for_defender, 40);
        // add_weight is not a new voter
        assert_eq!(dispute.vote_count, 2);
        assert_eq!(dispute.total_vote_weight().unwrap(), 165);
    }

    #[test]
    fn tally_overflow_is_an_error() {
        let mut dispute = pending_dispute();
        dispute.record_vote(VoteChoice::Challenger, u64::MAX).unwrap();
        assert!(dispute.add_weight(VoteChoice::Challenger, 1).is_err());
    }
}
