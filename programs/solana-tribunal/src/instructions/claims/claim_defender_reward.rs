use anchor_lang::prelude::*;

use crate::constants::{
    DEFENDER_POOL_SEED, DEFENDER_RECORD_SEED, ESCROW_SEED, ROUND_RESULT_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::RewardClaimed;
use crate::state::{
    BondSource, DefenderPool, DefenderRecord, DisputeOutcome, Escrow, PoolRole, RoundResult,
    Subject,
};
use crate::utils::{defender_reward, move_lamports, reputation_after_loss, reputation_after_win};

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct ClaimDefenderReward<'info> {
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
            DEFENDER_RECORD_SEED,
            subject.key().as_ref(),
            defender.key().as_ref(),
            round.to_le_bytes().as_ref(),
        ],
        bump = record.bump,
        constraint = record.defender == defender.key() @ TribunalError::Unauthorized,
    )]
    pub record: Account<'info, DefenderRecord>,

    /// Present when the bond was pool-backed (and for any defender who
    /// keeps a pool and wants the reputation update).
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, defender.key().as_ref()],
        bump = defender_pool.bump,
    )]
    pub defender_pool: Option<Account<'info, DefenderPool>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(mut)]
    pub defender: Signer<'info>,
}

/// Return the defender's safe-bond share plus, on a defender win or a
/// no-participation refund, the at-risk payout. Pool-sourced bond flows
/// back into the pool ledger; direct bond pays the wallet.
pub fn process_claim_defender_reward(ctx: Context<ClaimDefenderReward>, _round: u64) -> Result<()> {
    let record = &mut ctx.accounts.record;
    let result = &mut ctx.accounts.round_result;

    require!(!record.reward_claimed, TribunalError::AlreadyClaimed);
    require!(record.bond > 0, TribunalError::EmptyRecord);

    let reward = defender_reward(result, record.bond)?;
    if reward > 0 {
        ctx.accounts.escrow.debit(reward)?;
        match record.source {
            BondSource::Direct => {
                move_lamports(
                    &ctx.accounts.escrow.to_account_info(),
                    &ctx.accounts.defender.to_account_info(),
                    reward,
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
                    .checked_add(reward)
                    .ok_or(TribunalError::MathOverflow)?;
                move_lamports(
                    &ctx.accounts.escrow.to_account_info(),
                    &pool.to_account_info(),
                    reward,
                )?;
            }
        }
    }

    record.reward_claimed = true;
    result.defender_claims = result
        .defender_claims
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    if let Some(pool) = ctx.accounts.defender_pool.as_mut() {
        match result.outcome {
            DisputeOutcome::DefenderWins => {
                pool.reputation = reputation_after_win(pool.reputation)
            }
            DisputeOutcome::ChallengerWins => {
                pool.reputation = reputation_after_loss(pool.reputation)
            }
            _ => {}
        }
    }

    emit!(RewardClaimed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.defender,
        role: PoolRole::Defender,
        round: record.round,
        amount: reward,
    });

    Ok(())
}
