use anchor_lang::prelude::*;

#[account]
pub struct ProtocolConfig {
    pub admin: Pubkey,                 // 32
    pub treasury: Pubkey,              // 32
    pub fee_bps: u16,                  // 2
    pub juror_share_bps: u16,          // 2
    pub no_participation_fee_bps: u16, // 2
    pub base_bond: u64,                // 8 (lamports, scaled by reputation)
    pub min_bond_floor: u64,           // 8 (lamports, absolute floor)
    pub paused: bool,                  // 1
    pub total_subjects: u64,           // 8
    pub bump: u8,                      // 1
}

impl ProtocolConfig {
    pub const LEN: usize = 8 + 32 + 32 + 2 + 2 + 2 + 8 + 8 + 1 + 8 + 1;
}
