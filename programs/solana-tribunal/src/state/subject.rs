use anchor_lang::prelude::*;

use crate::constants::MAX_CID_LEN;
use crate::state::dispute::DisputeOutcome;

#[account]
pub struct Subject {
    pub subject_id: u64,
    pub creator: Pubkey,
    pub round: u64,                // increments at every resolution
    pub status: SubjectStatus,
    pub available_bond: u64,       // defender collateral backing the current round
    pub defender_count: u32,
    pub voting_period: i64,        // seconds; restorations vote for 2x this
    pub match_mode: bool,          // limit bond at risk to matched challenger stake
    pub last_round_pool: u64,      // risk pool of the last resolved round
    pub details_cid: String,       // max 64 chars
    pub seq: u64,                  // mutation counter for the read-model mirror
    pub bump: u8,
}

impl Subject {
    // 8 (discriminator)
    // 8 (subject_id) + 32 (creator) + 8 (round) + 1 (status)
    // 8 (available_bond) + 4 (defender_count) + 8 (voting_period)
    // 1 (match_mode) + 8 (last_round_pool)
    // 4 + 64 (details_cid) + 8 (seq) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + 8 + 1 + 8 + 4 + 8 + 1 + 8 + (4 + MAX_CID_LEN) + 8 + 1;

    /// Bond may be added or withdrawn only while no contest is open.
    pub fn is_open_for_bond(&self) -> bool {
        matches!(self.status, SubjectStatus::Dormant | SubjectStatus::Valid)
    }

    pub fn has_open_contest(&self) -> bool {
        matches!(self.status, SubjectStatus::Disputed | SubjectStatus::Restoring)
    }

    /// Status the subject lands in once a round resolves with `outcome`.
    pub fn status_after(outcome: DisputeOutcome, is_restore: bool) -> SubjectStatus {
        match (is_restore, outcome) {
            (false, DisputeOutcome::ChallengerWins) => SubjectStatus::Invalid,
            (false, _) => SubjectStatus::Valid,
            (true, DisputeOutcome::ChallengerWins) => SubjectStatus::Valid,
            (true, _) => SubjectStatus::Invalid,
        }
    }

    pub fn touch(&mut self) {
        self.seq = self.seq.wrapping_add(1);
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubjectStatus {
    Dormant,
    Valid,
    Disputed,
    Invalid,
    Restoring,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_round_transitions() {
        assert_eq!(
            Subject::status_after(DisputeOutcome::ChallengerWins, false),
            SubjectStatus::Invalid
        );
        assert_eq!(
            Subject::status_after(DisputeOutcome::DefenderWins, false),
            SubjectStatus::Valid
        );
        assert_eq!(
            Subject::status_after(DisputeOutcome::NoParticipation, false),
            SubjectStatus::Valid
        );
    }

    #[test]
    fn restoration_transitions() {
        assert_eq!(
            Subject::status_after(DisputeOutcome::ChallengerWins, true),
            SubjectStatus::Valid
        );
        assert_eq!(
            Subject::status_after(DisputeOutcome::DefenderWins, true),
            SubjectStatus::Invalid
        );
        // A restoration nobody voted on leaves the subject invalid.
        assert_eq!(
            Subject::status_after(DisputeOutcome::NoParticipation, true),
            SubjectStatus::Invalid
        );
    }

    #[test]
    fn bond_gating_follows_status() {
        let mut subject = Subject {
            subject_id: 1,
            creator: Pubkey::default(),
            round: 0,
            status: SubjectStatus::Dormant,
            available_bond: 0,
            defender_count: 0,
            voting_period: 86_400,
            match_mode: false,
            last_round_pool: 0,
            details_cid: String::new(),
            seq: 0,
            bump: 255,
        };
        assert!(subject.is_open_for_bond());
        subject.status = SubjectStatus::Disputed;
        assert!(!subject.is_open_for_bond());
        assert!(subject.has_open_contest());
        subject.status = SubjectStatus::Invalid;
        assert!(!subject.is_open_for_bond());
        assert!(!subject.has_open_contest());
    }
}
