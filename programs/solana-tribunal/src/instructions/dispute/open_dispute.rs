use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::constants::{
    CHALLENGER_POOL_SEED, CHALLENGER_RECORD_SEED, CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED,
    MAX_CID_LEN, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::{DisputeOpened, SubjectDeactivated};
use crate::state::{
    ChallengerPool, ChallengerRecord, Dispute, Escrow, ProtocolConfig, Subject, SubjectStatus,
};
use crate::utils::{bond_exposure, minimum_bond, move_lamports};

#[derive(Accounts)]
pub struct OpenDispute<'info> {
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
        payer = challenger,
        space = Dispute::LEN
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

pub fn process_open_dispute(
    ctx: Context<OpenDispute>,
    stake: u64,
    details_cid: String,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(!config.paused, TribunalError::ProtocolPaused);
    require!(details_cid.len() <= MAX_CID_LEN, TribunalError::CidTooLong);

    let subject = &mut ctx.accounts.subject;
    require!(
        subject.status == SubjectStatus::Valid,
        TribunalError::SubjectNotValid
    );

    // A subject with nothing backing it cannot be disputed: it goes dormant
    // instead, no stake moves, and no dispute opens. Callers re-read state.
    if subject.available_bond == 0 {
        subject.status = SubjectStatus::Dormant;
        subject.touch();
        // Refund rent on accounts this attempt created. The record PDA is
        // keyed by this challenger; a dispute left over from an earlier
        // round stays untouched.
        if ctx.accounts.dispute.subject == Pubkey::default() {
            ctx.accounts
                .dispute
                .close(ctx.accounts.challenger.to_account_info())?;
        }
        ctx.accounts
            .record
            .close(ctx.accounts.challenger.to_account_info())?;
        emit!(SubjectDeactivated {
            subject_id: subject.subject_id,
            round: subject.round,
        });
        return Ok(());
    }

    require!(stake > 0, TribunalError::ZeroAmount);

    let pool = &mut ctx.accounts.challenger_pool;
    let min_bond = minimum_bond(pool.reputation, config.base_bond, config.min_bond_floor)?;
    require!(stake >= min_bond, TribunalError::BelowMinimumBond);

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
    let dispute = &mut ctx.accounts.dispute;
    dispute.begin(
        subject.key(),
        subject.round,
        false,
        clock.unix_timestamp,
        subject.voting_period,
        ctx.bumps.dispute,
    )?;
    dispute.total_stake = stake;
    dispute.challenger_count = 1;
    dispute.defender_count = subject.defender_count;
    dispute.bond_at_risk = bond_exposure(subject.available_bond, stake, subject.match_mode);

    let record = &mut ctx.accounts.record;
    record.subject = subject.key();
    record.challenger = ctx.accounts.challenger.key();
    record.round = subject.round;
    record.stake = stake;
    record.details_cid = details_cid;
    record.reward_claimed = false;
    record.bump = ctx.bumps.record;

    subject.status = SubjectStatus::Disputed;
    subject.touch();

    emit!(DisputeOpened {
        subject_id: subject.subject_id,
        challenger: record.challenger,
        round: subject.round,
        stake,
        voting_ends_at: dispute.voting_ends_at,
    });

    Ok(())
}
