use anchor_lang::prelude::*;

use crate::state::dispute::DisputeOutcome;
use crate::state::pools::PoolRole;
use crate::state::records::{BondSource, VoteChoice};

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub fee_bps: u16,
    pub juror_share_bps: u16,
}

#[event]
pub struct FeesUpdated {
    pub fee_bps: u16,
    pub juror_share_bps: u16,
    pub no_participation_fee_bps: u16,
    pub base_bond: u64,
    pub min_bond_floor: u64,
}

#[event]
pub struct TreasuryUpdated {
    pub treasury: Pubkey,
}

#[event]
pub struct StakeDeposited {
    pub owner: Pubkey,
    pub role: PoolRole,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub owner: Pubkey,
    pub role: PoolRole,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct SubjectRegistered {
    pub subject_id: u64,
    pub creator: Pubkey,
    pub voting_period: i64,
    pub match_mode: bool,
}

/// Emitted when a dispute attempt finds a subject with no bond backing;
/// no dispute is created and no stake moves.
#[event]
pub struct SubjectDeactivated {
    pub subject_id: u64,
    pub round: u64,
}

#[event]
pub struct BondAdded {
    pub subject_id: u64,
    pub defender: Pubkey,
    pub round: u64,
    pub amount: u64,
    pub source: BondSource,
    pub available_bond: u64,
}

#[event]
pub struct BondWithdrawn {
    pub subject_id: u64,
    pub defender: Pubkey,
    pub round: u64,
    pub amount: u64,
    pub available_bond: u64,
}

#[event]
pub struct DisputeOpened {
    pub subject_id: u64,
    pub challenger: Pubkey,
    pub round: u64,
    pub stake: u64,
    pub voting_ends_at: i64,
}

#[event]
pub struct DisputeSupported {
    pub subject_id: u64,
    pub challenger: Pubkey,
    pub round: u64,
    pub stake: u64,
    pub total_stake: u64,
}

#[event]
pub struct RestorationOpened {
    pub subject_id: u64,
    pub restorer: Pubkey,
    pub round: u64,
    pub stake: u64,
    pub voting_ends_at: i64,
}

#[event]
pub struct VoteSubmitted {
    pub subject_id: u64,
    pub juror: Pubkey,
    pub round: u64,
    pub choice: VoteChoice,
    pub weight: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoteIncreased {
    pub subject_id: u64,
    pub juror: Pubkey,
    pub round: u64,
    pub added: u64,
    pub voting_power: u64,
}

#[event]
pub struct DisputeResolved {
    pub subject_id: u64,
    pub round: u64,
    pub is_restore: bool,
    pub outcome: DisputeOutcome,
    pub total_vote_weight: u64,
    pub winner_pool: u64,
    pub juror_pool: u64,
    pub treasury_pool: u64,
    pub safe_bond: u64,
    pub resolved_at: i64,
}

#[event]
pub struct RewardClaimed {
    pub subject_id: u64,
    pub participant: Pubkey,
    pub role: PoolRole,
    pub round: u64,
    pub amount: u64,
}

#[event]
pub struct StakeUnlocked {
    pub subject_id: u64,
    pub juror: Pubkey,
    pub round: u64,
    pub amount: u64,
}

#[event]
pub struct RecordClosed {
    pub subject_id: u64,
    pub participant: Pubkey,
    pub role: PoolRole,
    pub round: u64,
}

/// Per-record failure report from a batch instruction; `code` is the error
/// the equivalent single-record call would have returned.
#[event]
pub struct RecordSkipped {
    pub record: Pubkey,
    pub code: u32,
}
