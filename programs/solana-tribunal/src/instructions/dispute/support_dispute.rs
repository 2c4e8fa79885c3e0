use anchor_lang::prelude::*;

use crate::constants::{
    CHALLENGER_POOL_SEED, CHALLENGER_RECORD_SEED, CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED,
    MAX_CID_LEN, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::DisputeSupported;
use crate::state::{
    ChallengerPool, ChallengerRecord, Dispute, DisputeStatus, Escrow, ProtocolConfig, Subject,
};
use crate::utils::{bond_exposure, move_lamports};

#[derive(Accounts)]
pub struct SupportDispute<'info> {
    #[account(
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
        mut,
        seeds = [DISPUTE_SEED, subject.key().as_ref()],
        bump = dispute.bump,
    )]
    pub dispute: Account<'info, Dispute>,

    #[account(
        init_if_needed,
        seeds = [
            CHALLENGER_RECORD_SEED,
            subject.key().as_ref(),
            challenger.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump,
        payer = challenger,
        space = ChallengerRecord::LEN
    )]
    pub record: Account<'info, ChallengerRecord>,

    #[account(
        mut,
        seeds = [CHALLENGER_POOL_SEED, challenger.key().as_ref()],
        bump = challenger_pool.bump,
        constraint = challenger_pool.owner == challenger.key() @ TribunalError::Unauthorized,
    )]
    pub challenger_pool: Account<'info, ChallengerPool>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub challenger: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Join the open contest on the challenger/restorer side, or top up an
/// existing position. No reputation-scaled minimum applies to supporters.
pub fn process_support_dispute(
    ctx: Context<SupportDispute>,
    stake: u64,
    details_cid: String,
) -> Result<()> {
    require!(!ctx.accounts.config.paused, TribunalError::ProtocolPaused);
    require!(stake > 0, TribunalError::ZeroAmount);
    require!(details_cid.len() <= MAX_CID_LEN, TribunalError::CidTooLong);

    let subject = &ctx.accounts.subject;
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

    let pool = &mut ctx.accounts.challenger_pool;
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

    let record = &mut ctx.accounts.record;
    let is_new_record = record.challenger == Pubkey::default();
    if is_new_record {
        record.subject = subject.key();
        record.challenger = ctx.accounts.challenger.key();
        record.round = subject.round;
        record.stake = 0;
        record.details_cid = details_cid;
        record.reward_claimed = false;
        record.bump = ctx.bumps.record;
        dispute.challenger_count = dispute
            .challenger_count
            .checked_add(1)
            .ok_or(TribunalError::MathOverflow)?;
        pool.subject_count = pool
            .subject_count
            .checked_add(1)
            .ok_or(TribunalError::MathOverflow)?;
    }
    record.stake = record
        .stake
        .checked_add(stake)
        .ok_or(TribunalError::MathOverflow)?;

    let side_total = if dispute.is_restore {
        dispute.restore_stake = dispute
            .restore_stake
            .checked_add(stake)
            .ok_or(TribunalError::MathOverflow)?;
        dispute.restore_stake
    } else {
        dispute.total_stake = dispute
            .total_stake
            .checked_add(stake)
            .ok_or(TribunalError::MathOverflow)?;
        dispute.bond_at_risk =
            bond_exposure(subject.available_bond, dispute.total_stake, subject.match_mode);
        dispute.total_stake
    };

    emit!(DisputeSupported {
        subject_id: subject.subject_id,
        challenger: ctx.accounts.challenger.key(),
        round: subject.round,
        stake,
        total_stake: side_total,
    });

    Ok(())
}
