use anchor_lang::prelude::*;

use crate::constants::{
    ESCROW_SEED, JUROR_POOL_SEED, JUROR_RECORD_SEED, ROUND_RESULT_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::RewardClaimed;
use crate::state::{
    DisputeOutcome, Escrow, JurorPool, JurorRecord, PoolRole, RoundResult, Subject,
};
use crate::utils::{juror_reward, move_lamports, reputation_after_loss, reputation_after_win};

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct ClaimJurorReward<'info> {
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
            JUROR_RECORD_SEED,
            subject.key().as_ref(),
            juror.key().as_ref(),
            round.to_le_bytes().as_ref(),
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
        mut,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(mut)]
    pub juror: Signer<'info>,
}

/// Pay the juror's slice of the round's juror pool. A losing vote claims
/// zero but still flips the record so it can eventually close; the
/// principal stake goes through unlock separately.
pub fn process_claim_juror_reward(ctx: Context<ClaimJurorReward>, _round: u64) -> Result<()> {
    let record = &mut ctx.accounts.record;
    let result = &mut ctx.accounts.round_result;

    require!(!record.reward_claimed, TribunalError::AlreadyClaimed);
    require!(record.voted_at != 0, TribunalError::EmptyRecord);

    let reward = juror_reward(result, record)?;
    if reward > 0 {
        ctx.accounts.escrow.debit(reward)?;
        move_lamports(
            &ctx.accounts.escrow.to_account_info(),
            &ctx.accounts.juror.to_account_info(),
            reward,
        )?;
    }

    record.reward_claimed = true;
    result.juror_claims = result
        .juror_claims
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    // Accuracy feeds the pool's reputation; a no-participation round (no
    // juror records) can never reach this path.
    let pool = &mut ctx.accounts.juror_pool;
    if result.outcome != DisputeOutcome::NoParticipation {
        pool.reputation = if record.voted_with(result.outcome) {
            reputation_after_win(pool.reputation)
        } else {
            reputation_after_loss(pool.reputation)
        };
    }

    emit!(RewardClaimed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.juror,
        role: PoolRole::Juror,
        round: record.round,
        amount: reward,
    });

    Ok(())
}
