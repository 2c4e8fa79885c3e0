use anchor_lang::prelude::*;

use crate::constants::{
    CHALLENGER_POOL_SEED, CHALLENGER_RECORD_SEED, ESCROW_SEED, ROUND_RESULT_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::RewardClaimed;
use crate::state::{
    ChallengerPool, ChallengerRecord, DisputeOutcome, Escrow, PoolRole, RoundResult, Subject,
};
use crate::utils::{
    challenger_reward, move_lamports, reputation_after_loss, reputation_after_win,
};

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct ClaimChallengerReward<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        seeds = [
            ROUND_RESULT_SEED,
            subject.key().as_ref(),
            round.to_le_bytes().as_ref(),
        ],
        bump = round_result.bump,
    )]
    pub round_result: Account<'info, RoundResult>,

    #[account(
        mut,
        seeds = [
            CHALLENGER_RECORD_SEED,
            subject.key().as_ref(),
            challenger.key().as_ref(),
            round.to_le_bytes().as_ref(),
        ],
        bump = record.bump,
        constraint = record.challenger == challenger.key() @ TribunalError::Unauthorized,
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
        mut,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(mut)]
    pub challenger: Signer<'info>,
}

/// Pay the challenger's (or restorer's) share of the round: pro-rata
/// winner pool on a win, a 99% refund on no participation, zero on a
/// loss. Zero-value claims still flip the record so it can close.
pub fn process_claim_challenger_reward(
    ctx: Context<ClaimChallengerReward>,
    _round: u64,
) -> Result<()> {
    let record = &mut ctx.accounts.record;
    let result = &mut ctx.accounts.round_result;

    require!(!record.reward_claimed, TribunalError::AlreadyClaimed);
    require!(record.stake > 0, TribunalError::EmptyRecord);

    let reward = challenger_reward(result, record.stake)?;
    if reward > 0 {
        ctx.accounts.escrow.debit(reward)?;
        move_lamports(
            &ctx.accounts.escrow.to_account_info(),
            &ctx.accounts.challenger.to_account_info(),
            reward,
        )?;
    }

    record.reward_claimed = true;
    result.challenger_claims = result
        .challenger_claims
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    let pool = &mut ctx.accounts.challenger_pool;
    match result.outcome {
        DisputeOutcome::ChallengerWins => pool.reputation = reputation_after_win(pool.reputation),
        DisputeOutcome::DefenderWins => pool.reputation = reputation_after_loss(pool.reputation),
        _ => {}
    }

    emit!(RewardClaimed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.challenger,
        role: PoolRole::Challenger,
        round: record.round,
        amount: reward,
    });

    Ok(())
}
