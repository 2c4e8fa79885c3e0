use anchor_lang::prelude::*;

use crate::constants::MAX_CID_LEN;
use crate::state::dispute::DisputeOutcome;

/// Created at most once per (juror, subject, round). Reward claim and
/// principal unlock are independent one-way flips; both must be set before
/// the record can close.
#[account]
pub struct JurorRecord {
    pub subject: Pubkey,
    pub juror: Pubkey,
    pub round: u64,
    pub choice: VoteChoice,     // for restorations, Challenger = for restoration
    pub voting_power: u64,
    pub stake_allocation: u64,
    pub reward_claimed: bool,
    pub stake_unlocked: bool,
    pub voted_at: i64,
    pub bump: u8,
}

impl JurorRecord {
    // 8 (discriminator)
    // 32 (subject) + 32 (juror) + 8 (round) + 1 (choice)
    // 8 (voting_power) + 8 (stake_allocation)
    // 1 (reward_claimed) + 1 (stake_unlocked) + 8 (voted_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1 + 8 + 8 + 1 + 1 + 8 + 1;

    pub fn voted_with(&self, outcome: DisputeOutcome) -> bool {
        matches!(
            (self.choice, outcome),
            (VoteChoice::Challenger, DisputeOutcome::ChallengerWins)
                | (VoteChoice::Defender, DisputeOutcome::DefenderWins)
        )
    }

    pub fn closeable(&self) -> bool {
        self.reward_claimed && self.stake_unlocked
    }
}

#[account]
pub struct ChallengerRecord {
    pub subject: Pubkey,
    pub challenger: Pubkey,
    pub round: u64,
    pub stake: u64,
    pub details_cid: String, // max 64 chars
    pub reward_claimed: bool,
    pub bump: u8,
}

impl ChallengerRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + (4 + MAX_CID_LEN) + 1 + 1;
}

#[account]
pub struct DefenderRecord {
    pub subject: Pubkey,
    pub defender: Pubkey,
    pub round: u64,
    pub bond: u64,
    pub source: BondSource,
    pub reward_claimed: bool,
    pub bump: u8,
}

impl DefenderRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1 + 1 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteChoice {
    Challenger,
    Defender,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BondSource {
    Pool,
    Direct,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(choice: VoteChoice) -> JurorRecord {
        JurorRecord {
            subject: Pubkey::new_unique(),
            juror: Pubkey::new_unique(),
            round: 1,
            choice,
            voting_power: 500,
            stake_allocation: 500,
            reward_claimed: false,
            stake_unlocked: false,
            voted_at: 1_000,
            bump: 255,
        }
    }

    #[test]
    fn winning_side_detection() {
        let challenger_vote = record(VoteChoice::Challenger);
        assert!(challenger_vote.voted_with(DisputeOutcome::ChallengerWins));
        assert!(!challenger_vote.voted_with(DisputeOutcome::DefenderWins));

        let defender_vote = record(VoteChoice::Defender);
        assert!(defender_vote.voted_with(DisputeOutcome::DefenderWins));
        assert!(!defender_vote.voted_with(DisputeOutcome::ChallengerWins));

        // Nobody is on the winning side of a no-participation round.
        assert!(!challenger_vote.voted_with(DisputeOutcome::NoParticipation));
        assert!(!defender_vote.voted_with(DisputeOutcome::NoParticipation));
    }

    #[test]
    fn close_requires_claim_and_unlock() {
        let mut rec = record(VoteChoice::Challenger);
        assert!(!rec.closeable());
        rec.reward_claimed = true;
        assert!(!rec.closeable());
        rec.stake_unlocked = true;
        assert!(rec.closeable());
    }
}
