use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::{
    CONFIG_SEED, DEFENDER_POOL_SEED, DEFENDER_RECORD_SEED, ESCROW_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::BondAdded;
use crate::state::{
    BondSource, DefenderPool, DefenderRecord, Escrow, ProtocolConfig, Subject, SubjectStatus,
};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct AddBond<'info> {
    #[account(
        mut,
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(
        init_if_needed,
        seeds = [
            DEFENDER_RECORD_SEED,
            subject.key().as_ref(),
            defender.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump,
        payer = defender,
        space = DefenderRecord::LEN
    )]
    pub record: Account<'info, DefenderRecord>,

    /// Required for pool-sourced bond; ignored for direct bond.
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, defender.key().as_ref()],
        bump = defender_pool.bump,
    )]
    pub defender_pool: Option<Account<'info, DefenderPool>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub defender: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_add_bond(ctx: Context<AddBond>, amount: u64, source: BondSource) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(amount > 0, TribunalError::ZeroAmount);

    let subject = &mut ctx.accounts.subject;
    require!(subject.is_open_for_bond(), TribunalError::SubjectContested);

    let record = &mut ctx.accounts.record;
    let is_new_record = record.defender == Pubkey::default();
    if is_new_record {
        record.subject = subject.key();
        record.defender = ctx.accounts.defender.key();
        record.round = subject.round;
        record.bond = 0;
        record.source = source;
        record.reward_claimed = false;
        record.bump = ctx.bumps.record;
    } else {
        require!(record.source == source, TribunalError::BondSourceMismatch);
    }

    let new_bond = record
        .bond
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;

    match source {
        BondSource::Direct => {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.defender.to_account_info(),
                        to: ctx.accounts.escrow.to_account_info(),
                    },
                ),
                amount,
            )?;
        }
        BondSource::Pool => {
            let pool = ctx
                .accounts
                .defender_pool
                .as_mut()
                .ok_or(TribunalError::MissingPoolAccount)?;
            if pool.max_bond > 0 {
                require!(new_bond <= pool.max_bond, TribunalError::MaxBondExceeded);
            }
            pool.balance = pool
                .balance
                .checked_sub(amount)
                .ok_or(TribunalError::InsufficientPoolBalance)?;
            if is_new_record {
                pool.subject_count = pool
                    .subject_count
                    .checked_add(1)
                    .ok_or(TribunalError::MathOverflow)?;
            }
            move_lamports(
                &pool.to_account_info(),
                &ctx.accounts.escrow.to_account_info(),
                amount,
            )?;
        }
    }

    record.bond = new_bond;
    subject.available_bond = subject
        .available_bond
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;
    if is_new_record {
        subject.defender_count = subject
            .defender_count
            .checked_add(1)
            .ok_or(TribunalError::MathOverflow)?;
    }
    if subject.status == SubjectStatus::Dormant {
        subject.status = SubjectStatus::Valid;
    }
    subject.touch();
    ctx.accounts.escrow.credit(amount)?;

    emit!(BondAdded {
        subject_id: subject.subject_id,
        defender: ctx.accounts.defender.key(),
        round: subject.round,
        amount,
        source,
        available_bond: subject.available_bond,
    });

    Ok(())
}
