use anchor_lang::prelude::*;

use crate::constants::{
    CHALLENGER_POOL_SEED, CHALLENGER_RECORD_SEED, CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED,
    MAX_CID_LEN, RESTORE_PERIOD_MULTIPLIER, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::RestorationOpened;
use crate::state::{
    ChallengerPool, ChallengerRecord, Dispute, Escrow, ProtocolConfig, Subject, SubjectStatus,
};
use crate::utils::move_lamports;

#[derive(Accounts)]
pub struct OpenRestoration<'info> {
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
        seeds = [DISPUTE_SEED, subject.key().as_ref()],
        bump,
        payer = restorer,
        space = Dispute::LEN
    )]
    pub dispute: Account<'info, Dispute>,

    #[account(
        init_if_needed,
        seeds = [
            CHALLENGER_RECORD_SEED,
            subject.key().as_ref(),
            restorer.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump,
        payer = restorer,
        space = ChallengerRecord::LEN
    )]
    pub record: Account<'info, ChallengerRecord>,

    #[account(
        mut,
        seeds = [CHALLENGER_POOL_SEED, restorer.key().as_ref()],
        bump = restorer_pool.bump,
        constraint = restorer_pool.owner == restorer.key() @ TribunalError::Unauthorized,
    )]
    pub restorer_pool: Account<'info, ChallengerPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub restorer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Contest an Invalid status. The restorer must match the full pool of the
/// round that invalidated the subject, and the vote runs twice as long as
/// a regular dispute.
pub fn process_open_restoration(
    ctx: Context<OpenRestoration>,
    stake: u64,
    details_cid: String,
) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(stake > 0, TribunalError::ZeroAmount);
    require!(details_cid.len() <= MAX_CID_LEN, TribunalError::CidTooLong);

    let subject = &mut ctx.accounts.subject;
    require!(
        subject.status == SubjectStatus::Invalid,
        TribunalError::SubjectNotInvalid
    );
    require!(
        stake >= subject.last_round_pool,
        TribunalError::InsufficientStake
    );

    let pool = &mut ctx.accounts.restorer_pool;
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

    let clock = Clock::get()?;
    let voting_period = subject
        .voting_period
        .checked_mul(RESTORE_PERIOD_MULTIPLIER)
        .ok_or(TribunalError::MathOverflow)?;

    let dispute = &mut ctx.accounts.dispute;
    dispute.begin(
        subject.key(),
        subject.round,
        true,
        clock.unix_timestamp,
        voting_period,
        ctx.bumps.dispute,
    )?;
    dispute.restore_stake = stake;
    dispute.challenger_count = 1;

    let record = &mut ctx.accounts.record;
    record.subject = subject.key();
    record.challenger = ctx.accounts.restorer.key();
    record.round = subject.round;
    record.stake = stake;
    record.details_cid = details_cid;
    record.reward_claimed = false;
    record.bump = ctx.bumps.record;

    subject.status = SubjectStatus::Restoring;
    subject.touch();

    emit!(RestorationOpened {
        subject_id: subject.subject_id,
        restorer: record.challenger,
        round: subject.round,
        stake,
        voting_ends_at: dispute.voting_ends_at,
    });

    Ok(())
}
