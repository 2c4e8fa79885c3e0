use anchor_lang::prelude::*;

use crate::constants::{
    CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED, JUROR_POOL_SEED, JUROR_RECORD_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::VoteSubmitted;
use crate::state::{
    Dispute, DisputeStatus, Escrow, JurorPool, JurorRecord, ProtocolConfig, Subject, VoteChoice,
};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct SubmitVote<'info> {
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
        init_if_needed,
        seeds = [
            JUROR_RECORD_SEED,
            subject.key().as_ref(),
            juror.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump,
        payer = juror,
        space = JurorRecord::LEN
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

    #[account(mut)]
    pub juror: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// One initial vote per juror per round; the stake *is* the voting power.
/// Topping up goes through add_to_vote and never changes the choice.
pub fn process_submit_vote(ctx: Context<SubmitVote>, choice: VoteChoice, stake: u64) -> Result<()> {
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
    require!(record.voted_at == 0, TribunalError::DuplicateVote);

    let pool = &mut ctx.accounts.juror_pool;
    pool.balance = pool
        .balance
        .checked_sub(stake)
        .ok_or(TribunalError::InsufficientPoolBalance)?;
    pool.subject_count = pool
        .subject_count
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;
    move_lamports(
        &pool.to_account_info(),
        &ctx.accounts.escrow.to_account_info(),
        stake,
    )?;
    ctx.accounts.escrow.credit(stake)?;

    record.subject = ctx.accounts.subject.key();
    record.juror = ctx.accounts.juror.key();
    record.round = dispute.round;
    record.choice = choice;
    record.voting_power = stake;
    record.stake_allocation = stake;
    record.reward_claimed = false;
    record.stake_unlocked = false;
    record.voted_at = clock.unix_timestamp;
    record.bump = ctx.bumps.record;

    dispute.record_vote(choice, stake)?;

    emit!(VoteSubmitted {
        subject_id: ctx.accounts.subject.subject_id,
        juror: record.juror,
        round: record.round,
        choice,
        weight: stake,
        timestamp: record.voted_at,
    });

    Ok(())
}
