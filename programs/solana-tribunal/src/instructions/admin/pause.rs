use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::TribunalError;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct ProtocolAdmin<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ TribunalError::Unauthorized
    )]
    pub config: Account<'info, ProtocolConfig>,
    pub admin: Signer<'info>,
}

// Pausing stops new registrations, deposits, disputes, and votes.
// Resolutions, claims, unlocks, and withdrawals stay open so a pause can
// never trap funds.

pub fn pause_protocol(ctx: Context<ProtocolAdmin>) -> Result<()> {
    ctx.accounts.config.paused = true;
    Ok(())
}

pub fn unpause_protocol(ctx: Context<ProtocolAdmin>) -> Result<()> {
    ctx.accounts.config.paused = false;
    Ok(())
}
