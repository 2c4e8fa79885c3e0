use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{
    CHALLENGER_POOL_SEED, CONFIG_SEED, DEFENDER_POOL_SEED, INITIAL_REPUTATION, JUROR_POOL_SEED,
};
use crate::errors::TribunalError;
use crate::events::StakeDeposited;
use crate::state::{ChallengerPool, DefenderPool, JurorPool, PoolRole, ProtocolConfig};

#[derive(Accounts)]
pub struct DepositJurorStake<'info> {
    #[account(
        init_if_needed,
        seeds = [JUROR_POOL_SEED, owner.key().as_ref()],
        bump,
        payer = owner,
        space = JurorPool::LEN
    )]
    pub pool: Account<'info, JurorPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DepositChallengerStake<'info> {
    #[account(
        init_if_needed,
        seeds = [CHALLENGER_POOL_SEED, owner.key().as_ref()],
        bump,
        payer = owner,
        space = ChallengerPool::LEN
    )]
    pub pool: Account<'info, ChallengerPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DepositDefenderStake<'info> {
    #[account(
        init_if_needed,
        seeds = [DEFENDER_POOL_SEED, owner.key().as_ref()],
        bump,
        payer = owner,
        space = DefenderPool::LEN
    )]
    pub pool: Account<'info, DefenderPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_deposit_juror_stake(ctx: Context<DepositJurorStake>, amount: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(amount > 0, TribunalError::ZeroAmount);

    let pool = &mut ctx.accounts.pool;
    if pool.owner == Pubkey::default() {
        pool.owner = ctx.accounts.owner.key();
        pool.reputation = INITIAL_REPUTATION;
        pool.bump = ctx.bumps.pool;
    }

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: pool.to_account_info(),
            },
        ),
        amount,
    )?;

    pool.balance = pool
        .balance
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;

    emit!(StakeDeposited {
        owner: pool.owner,
        role: PoolRole::Juror,
        amount,
        balance: pool.balance,
    });

    Ok(())
}

pub fn process_deposit_challenger_stake(
    ctx: Context<DepositChallengerStake>,
    amount: u64,
) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(amount > 0, TribunalError::ZeroAmount);

    let pool = &mut ctx.accounts.pool;
    if pool.owner == Pubkey::default() {
        pool.owner = ctx.accounts.owner.key();
        pool.reputation = INITIAL_REPUTATION;
        pool.bump = ctx.bumps.pool;
    }

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: pool.to_account_info(),
            },
        ),
        amount,
    )?;

    pool.balance = pool
        .balance
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;

    emit!(StakeDeposited {
        owner: pool.owner,
        role: PoolRole::Challenger,
        amount,
        balance: pool.balance,
    });

    Ok(())
}

pub fn process_deposit_defender_stake(
    ctx: Context<DepositDefenderStake>,
    amount: u64,
) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(amount > 0, TribunalError::ZeroAmount);

    let pool = &mut ctx.accounts.pool;
    if pool.owner == Pubkey::default() {
        pool.owner = ctx.accounts.owner.key();
        pool.reputation = INITIAL_REPUTATION;
        pool.max_bond = 0; // unlimited until the owner sets a cap
        pool.bump = ctx.bumps.pool;
    }

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: pool.to_account_info(),
            },
        ),
        amount,
    )?;

    pool.balance = pool
        .balance
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;

    emit!(StakeDeposited {
        owner: pool.owner,
        role: PoolRole::Defender,
        amount,
        balance: pool.balance,
    });

    Ok(())
}
