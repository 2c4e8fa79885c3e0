use anchor_lang::prelude::*;

use crate::constants::{CHALLENGER_POOL_SEED, DEFENDER_POOL_SEED, JUROR_POOL_SEED};
use crate::errors::TribunalError;
use crate::events::StakeWithdrawn;
use crate::state::{ChallengerPool, DefenderPool, JurorPool, PoolRole};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct WithdrawJurorStake<'info> {
    #[account(
        mut,
        seeds = [JUROR_POOL_SEED, owner.key().as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ TribunalError::Unauthorized
    )]
    pub pool: Account<'info, JurorPool>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct WithdrawChallengerStake<'info> {
    #[account(
        mut,
        seeds = [CHALLENGER_POOL_SEED, owner.key().as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ TribunalError::Unauthorized
    )]
    pub pool: Account<'info, ChallengerPool>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct WithdrawDefenderStake<'info> {
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, owner.key().as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ TribunalError::Unauthorized
    )]
    pub pool: Account<'info, DefenderPool>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// The pool PDA must stay rent-exempt after the lamports leave; `balance`
/// only tracks funds above that minimum, but the explicit check keeps a
/// drained account from ever dropping below rent.
fn checked_pool_withdraw<'info>(
    pool_info: &AccountInfo<'info>,
    owner_info: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(pool_info.data_len());
    let remaining = pool_info
        .lamports()
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientPoolBalance)?;
    require!(remaining >= rent, TribunalError::InsufficientPoolBalance);
    move_lamports(pool_info, owner_info, amount)
}

pub fn process_withdraw_juror_stake(ctx: Context<WithdrawJurorStake>, amount: u64) -> Result<()> {
    require!(amount > 0, TribunalError::ZeroAmount);
    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientPoolBalance)?;

    checked_pool_withdraw(
        &pool.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(StakeWithdrawn {
        owner: pool.owner,
        role: PoolRole::Juror,
        amount,
        balance: pool.balance,
    });

    Ok(())
}

pub fn process_withdraw_challenger_stake(
    ctx: Context<WithdrawChallengerStake>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, TribunalError::ZeroAmount);
    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientPoolBalance)?;

    checked_pool_withdraw(
        &pool.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(StakeWithdrawn {
        owner: pool.owner,
        role: PoolRole::Challenger,
        amount,
        balance: pool.balance,
    });

    Ok(())
}

pub fn process_withdraw_defender_stake(
    ctx: Context<WithdrawDefenderStake>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, TribunalError::ZeroAmount);
    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientPoolBalance)?;

    checked_pool_withdraw(
        &pool.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(StakeWithdrawn {
        owner: pool.owner,
        role: PoolRole::Defender,
        amount,
        balance: pool.balance,
    });

    Ok(())
}
