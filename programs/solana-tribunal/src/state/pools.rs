use anchor_lang::prelude::*;

/// Per-owner stake ledgers, one PDA per role. The PDA itself holds the
/// deposited lamports; `balance` is the spendable figure on top of the
/// rent-exempt minimum. Committed stake leaves the pool for the subject's
/// escrow and only returns through unlock/withdraw paths.
#[account]
pub struct JurorPool {
    pub owner: Pubkey,      // 32
    pub balance: u64,       // 8
    pub reputation: u64,    // 8 (parts-per-million)
    pub subject_count: u32, // 4 (open records backed by this pool)
    pub bump: u8,           // 1
}

impl JurorPool {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 4 + 1;
}

#[account]
pub struct ChallengerPool {
    pub owner: Pubkey,
    pub balance: u64,
    pub reputation: u64,
    pub subject_count: u32,
    pub bump: u8,
}

impl ChallengerPool {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 4 + 1;
}

#[account]
pub struct DefenderPool {
    pub owner: Pubkey,
    pub balance: u64,
    pub reputation: u64,
    pub max_bond: u64, // cap per pool-backed subject bond; 0 = unlimited
    pub subject_count: u32,
    pub bump: u8,
}

impl DefenderPool {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 4 + 1;
}

/// Role tag carried by pool and claim events.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PoolRole {
    Juror,
    Challenger,
    Defender,
}
