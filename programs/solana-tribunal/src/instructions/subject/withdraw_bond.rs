use anchor_lang::prelude::*;

use crate::constants::{DEFENDER_POOL_SEED, DEFENDER_RECORD_SEED, ESCROW_SEED, SUBJECT_SEED};
use crate::errors::TribunalError;
use crate::events::BondWithdrawn;
use crate::state::{BondSource, DefenderPool, DefenderRecord, Escrow, Subject, SubjectStatus};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct WithdrawBond<'info> {
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

    /// Current-round record only; settled rounds pay out through claims.
    #[account(
        mut,
        seeds = [
            DEFENDER_RECORD_SEED,
            subject.key().as_ref(),
            defender.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump = record.bump,
        constraint = record.defender == defender.key() @ TribunalError::Unauthorized,
    )]
    pub record: Account<'info, DefenderRecord>,

    /// Required when the record's bond came from a pool.
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, defender.key().as_ref()],
        bump = defender_pool.bump,
    )]
    pub defender_pool: Option<Account<'info, DefenderPool>>,

    #[account(mut)]
    pub defender: Signer<'info>,
}

pub fn process_withdraw_bond(ctx: Context<WithdrawBond>, amount: u64) -> Result<()> {
    require!(amount > 0, TribunalError::ZeroAmount);

    let subject = &mut ctx.accounts.subject;
    require!(subject.is_open_for_bond(), TribunalError::SubjectContested);

    let record = &mut ctx.accounts.record;
    record.bond = record
        .bond
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientStake)?;
    subject.available_bond = subject
        .available_bond
        .checked_sub(amount)
        .ok_or(TribunalError::MathOverflow)?;
    ctx.accounts.escrow.debit(amount)?;

    match record.source {
        BondSource::Direct => {
            move_lamports(
                &ctx.accounts.escrow.to_account_info(),
                &ctx.accounts.defender.to_account_info(),
                amount,
            )?;
        }
        BondSource::Pool => {
            let pool = ctx
                .accounts
                .defender_pool
                .as_mut()
                .ok_or(TribunalError::MissingPoolAccount)?;
            pool.balance = pool
                .balance
                .checked_add(amount)
                .ok_or(TribunalError::MathOverflow)?;
            move_lamports(
                &ctx.accounts.escrow.to_account_info(),
                &pool.to_account_info(),
                amount,
            )?;
        }
    }

    if subject.available_bond == 0 && subject.status == SubjectStatus::Valid {
        subject.status = SubjectStatus::Dormant;
    }
    subject.touch();

    emit!(BondWithdrawn {
        subject_id: subject.subject_id,
        defender: ctx.accounts.defender.key(),
        round: subject.round,
        amount,
        available_bond: subject.available_bond,
    });

    Ok(())
}
