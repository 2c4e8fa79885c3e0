use anchor_lang::prelude::*;

/// Seed for the protocol config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for subject PDAs (keyed by subject_id)
pub const SUBJECT_SEED: &[u8] = b"subject";

/// Seed for the per-subject escrow vault
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Seed for the per-subject dispute PDA (one account, reused across rounds)
pub const DISPUTE_SEED: &[u8] = b"dispute";

/// Seed for immutable per-round settlement results
pub const ROUND_RESULT_SEED: &[u8] = b"round";

/// Seeds for per-round participant records
pub const JUROR_RECORD_SEED: &[u8] = b"juror";
pub const CHALLENGER_RECORD_SEED: &[u8] = b"challenger";
pub const DEFENDER_RECORD_SEED: &[u8] = b"defender";

/// Seeds for per-owner stake pools
pub const JUROR_POOL_SEED: &[u8] = b"juror_pool";
pub const CHALLENGER_POOL_SEED: &[u8] = b"challenger_pool";
pub const DEFENDER_POOL_SEED: &[u8] = b"defender_pool";

/// Basis-point denominator shared by all fee math
pub const BPS_DENOM: u64 = 10_000;

/// Protocol fee on the risk pool (20%)
pub const DEFAULT_FEE_BPS: u16 = 2_000;

/// Juror share of the protocol fee (95% of the fee, 19% of the pool)
pub const DEFAULT_JUROR_SHARE_BPS: u16 = 9_500;

/// Fee retained when a round ends with no participation (1%)
pub const DEFAULT_NO_PARTICIPATION_FEE_BPS: u16 = 100;

/// Hard cap on the protocol fee (30%)
pub const MAX_FEE_BPS: u16 = 3_000;

/// Hard cap on the no-participation fee (10%)
pub const MAX_NO_PARTICIPATION_FEE_BPS: u16 = 1_000;

/// Reputation fixed point: parts-per-million, 50% = 500_000
pub const REPUTATION_SCALE: u64 = 1_000_000;

/// Reputation assigned to a freshly created pool
pub const INITIAL_REPUTATION: u64 = 500_000;

/// Reputation step applied per won or lost round
pub const REPUTATION_STEP: u64 = 25_000;

/// Cooling-off period before juror principal unlocks (7 days)
pub const STAKE_UNLOCK_PERIOD: i64 = 7 * 86_400;

/// Voting period bounds for a subject (1 hour .. 30 days)
pub const MIN_VOTING_PERIOD: i64 = 3_600;
pub const MAX_VOTING_PERIOD: i64 = 30 * 86_400;

/// Restorations vote for twice the subject's configured period
pub const RESTORE_PERIOD_MULTIPLIER: i64 = 2;

/// Max length for content identifiers (CIDv1 base32 is 59 chars)
pub const MAX_CID_LEN: usize = 64;
