use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_FEE_BPS, MAX_NO_PARTICIPATION_FEE_BPS};
use crate::errors::TribunalError;
use crate::events::ProtocolInitialized;
use crate::state::ProtocolConfig;

#[derive(Accounts)]
pub struct InitProtocol<'info> {
    #[account(
        init,
        seeds = [CONFIG_SEED],
        bump,
        payer = admin,
        space = ProtocolConfig::LEN
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: Treasury wallet that receives protocol fees; trusted at deploy time
    pub treasury: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ProtocolParams {
    pub fee_bps: u16,
    pub juror_share_bps: u16,
    pub no_participation_fee_bps: u16,
    pub base_bond: u64,
    pub min_bond_floor: u64,
}

pub fn validate_params(params: &ProtocolParams) -> Result<()> {
    require!(params.fee_bps <= MAX_FEE_BPS, TribunalError::FeeExceedsMax);
    require!(params.juror_share_bps <= 10_000, TribunalError::ShareExceedsMax);
    require!(
        params.no_participation_fee_bps <= MAX_NO_PARTICIPATION_FEE_BPS,
        TribunalError::FeeExceedsMax
    );
    require!(params.base_bond > 0, TribunalError::ZeroAmount);
    require!(
        params.base_bond >= params.min_bond_floor,
        TribunalError::InsufficientStake
    );
    Ok(())
}

pub fn process_init_protocol(ctx: Context<InitProtocol>, params: ProtocolParams) -> Result<()> {
    validate_params(&params)?;

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.treasury = ctx.accounts.treasury.key();
    config.fee_bps = params.fee_bps;
    config.juror_share_bps = params.juror_share_bps;
    config.no_participation_fee_bps = params.no_participation_fee_bps;
    config.base_bond = params.base_bond;
    config.min_bond_floor = params.min_bond_floor;
    config.paused = false;
    config.total_subjects = 0;
    config.bump = ctx.bumps.config;

    emit!(ProtocolInitialized {
        admin: config.admin,
        treasury: config.treasury,
        fee_bps: config.fee_bps,
        juror_share_bps: config.juror_share_bps,
    });

    Ok(())
}
