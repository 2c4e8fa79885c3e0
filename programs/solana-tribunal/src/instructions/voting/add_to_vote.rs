use anchor_lang::prelude::*;

use crate::constants::{
    CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED, JUROR_POOL_SEED, JUROR_RECORD_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::VoteIncreased;
use crate::state::{
    Dispute, DisputeStatus, Escrow, JurorPool, JurorRecord, ProtocolConfig, Subject,
};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct AddToVote<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        seeds = [DISPUTE_SEED, subject.key().as_ref()],
        bump = dispute.bump,
    )]
    pub dispute: Account<'info, Dispute>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(
        mut,
        seeds = [
            JUROR_RECORD_SEED,
            subject.key().as_ref(),
            juror.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump = record.bump,
        constraint = record.juror == juror.key() @ TribunalError::Unauthorized,
    )]
    pub record: Account<'info, JurorRecord>,

    #[account(
        mut,
        seeds = [JUROR_POOL_SEED, juror.key().as_ref()],
        bump = juror_pool.bump,
        constraint = juror_pool.owner == juror.key() @ TribunalError::Unauthorized,
    )]
    pub juror_pool: Account<'info, JurorPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    pub juror: Signer<'info>,
}

/// Add stake behind an existing vote. The recorded choice is immutable;
/// only its weight grows.
pub fn process_add_to_vote(ctx: Context<AddToVote>, stake: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(stake > 0, TribunalError::ZeroAmount);

    let dispute = &mut ctx.accounts.dispute;
    require!(
        dispute.status == DisputeStatus::Pending,
        TribunalError::DisputeNotPending
    );
    let clock = Clock::get()?;
    require!(
        clock.unix_timestamp < dispute.voting_ends_at,
        TribunalError::VotingClosed
    );

    let record = &mut ctx.accounts.record;
    require!(record.voted_at != 0, TribunalError::NoVote);
    require!(record.round == dispute.round, TribunalError::RecordMismatch);

    let pool = &mut ctx.accounts.juror_pool;
    pool.balance = pool
        .balance
        .checked_sub(stake)
        .ok_or(TribunalError::InsufficientPoolBalance)?;
    move_lamports(
        &pool.to_account_info(),
        &ctx.accounts.escrow.to_account_info(),
        stake,
    )?;
    ctx.accounts.escrow.credit(stake)?;

    record.stake_allocation = record
        .stake_allocation
        .checked_add(stake)
        .ok_or(TribunalError::MathOverflow)?;
    record.voting_power = record
        .voting_power
        .checked_add(stake)
        .ok_or(TribunalError::MathOverflow)?;

    dispute.add_weight(record.choice, stake)?;

    emit!(VoteIncreased {
        subject_id: ctx.accounts.subject.subject_id,
        juror: record.juror,
        round: record.round,
        added: stake,
        voting_power: record.voting_power,
    });

    Ok(())
}
