use anchor_lang::prelude::*;

use crate::constants::DEFENDER_POOL_SEED;
use crate::errors::TribunalError;
use crate::state::DefenderPool;

#[derive(Accounts)]
pub struct ConfigureDefenderPool<'info> {
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, owner.key().as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ TribunalError::Unauthorized
    )]
    pub pool: Account<'info, DefenderPool>,

    pub owner: Signer<'info>,
}

/// Cap the bond this pool will back per subject; 0 removes the cap.
/// Applies to new bond commitments only.
pub fn process_set_max_bond(ctx: Context<ConfigureDefenderPool>, max_bond: u64) -> Result<()> {
    ctx.accounts.pool.max_bond = max_bond;
    Ok(())
}
