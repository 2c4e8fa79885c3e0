use anchor_lang::prelude::*;

#[error_code]
pub enum TribunalError {
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Fee exceeds maximum (30%)")]
    FeeExceedsMax,
    #[msg("Share exceeds 100%")]
    ShareExceedsMax,
    #[msg("Voting period out of bounds")]
    InvalidVotingPeriod,
    #[msg("Content identifier too long (max 64)")]
    CidTooLong,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Subject is not valid")]
    SubjectNotValid,
    #[msg("Subject is not invalid")]
    SubjectNotInvalid,
    #[msg("Subject has an open dispute or restoration")]
    SubjectContested,
    #[msg("Dispute is not pending")]
    DisputeNotPending,
    #[msg("Dispute already resolved")]
    AlreadyResolved,
    #[msg("Voting window has closed")]
    VotingClosed,
    #[msg("Voting window is still open")]
    VotingStillOpen,
    #[msg("Juror already voted this round")]
    DuplicateVote,
    #[msg("No vote on record for this round")]
    NoVote,
    #[msg("Stake below the reputation-scaled minimum bond")]
    BelowMinimumBond,
    #[msg("Stake below the prior round's pool")]
    InsufficientStake,
    #[msg("Pool balance insufficient")]
    InsufficientPoolBalance,
    #[msg("Pool-sourced bond exceeds the pool's max bond")]
    MaxBondExceeded,
    #[msg("Bond source does not match the existing record")]
    BondSourceMismatch,
    #[msg("Pool account required for pool-sourced bond")]
    MissingPoolAccount,
    #[msg("Reward already claimed")]
    AlreadyClaimed,
    #[msg("Stake already unlocked")]
    AlreadyUnlocked,
    #[msg("Stake unlock period has not elapsed")]
    UnlockNotReady,
    #[msg("Record not ready to close (claim reward and unlock stake first)")]
    CloseNotReady,
    #[msg("Record does not match the given subject, owner, or round")]
    RecordMismatch,
    #[msg("Record holds no stake or bond")]
    EmptyRecord,
    #[msg("Escrow balance insufficient")]
    InsufficientEscrow,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}

impl TribunalError {
    /// Numeric code as surfaced to clients; custom program errors sit
    /// above Anchor's reserved range.
    pub fn code(self) -> u32 {
        self as u32 + anchor_lang::error::ERROR_CODE_OFFSET
    }
}
