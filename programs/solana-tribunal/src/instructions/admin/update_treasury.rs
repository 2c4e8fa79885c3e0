use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::TribunalError;
use crate::events::TreasuryUpdated;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct UpdateTreasury<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ TribunalError::Unauthorized
    )]
    pub config: Account<'info, ProtocolConfig>,
    pub admin: Signer<'info>,
    /// CHECK: New treasury wallet; trusted by the admin signer
    pub new_treasury: AccountInfo<'info>,
}

pub fn process_update_treasury(ctx: Context<UpdateTreasury>) -> Result<()> {
    ctx.accounts.config.treasury = ctx.accounts.new_treasury.key();
    emit!(TreasuryUpdated {
        treasury: ctx.accounts.config.treasury,
    });
    Ok(())
}
