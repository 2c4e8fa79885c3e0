use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::TribunalError;
use crate::events::FeesUpdated;
use crate::instructions::admin::init_protocol::{validate_params, ProtocolParams};
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct UpdateFees<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.admin == admin.key() @ TribunalError::Unauthorized
    )]
    pub config: Account<'info, ProtocolConfig>,
    pub admin: Signer<'info>,
}

/// New fee parameters take effect for rounds resolved after this point;
/// already-written RoundResults keep their snapshotted split.
pub fn process_update_fees(ctx: Context<UpdateFees>, params: ProtocolParams) -> Result<()> {
    validate_params(&params)?;

    let config = &mut ctx.accounts.config;
    config.fee_bps = params.fee_bps;
    config.juror_share_bps = params.juror_share_bps;
    config.no_participation_fee_bps = params.no_participation_fee_bps;
    config.base_bond = params.base_bond;
    config.min_bond_floor = params.min_bond_floor;

    emit!(FeesUpdated {
        fee_bps: config.fee_bps,
        juror_share_bps: config.juror_share_bps,
        no_participation_fee_bps: config.no_participation_fee_bps,
        base_bond: config.base_bond,
        min_bond_floor: config.min_bond_floor,
    });

    Ok(())
}
