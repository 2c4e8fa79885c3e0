use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, DISPUTE_SEED, ESCROW_SEED, ROUND_RESULT_SEED, SUBJECT_SEED};
use crate::errors::TribunalError;
use crate::events::DisputeResolved;
use crate::state::{
    Dispute, DisputeStatus, Escrow, ProtocolConfig, RoundResult, Subject,
};
use crate::utils::{bond_exposure, compute_settlement, move_lamports, resolve_outcome, FeeSchedule};

#[derive(Accounts)]
pub struct ResolveDispute<'info> {
    #[account(
        mut,
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

    /// The immutable settlement snapshot for this round. Its existence is
    /// also the idempotency backstop: a round can only ever be written once.
    #[account(
        init,
        seeds = [
            ROUND_RESULT_SEED,
            subject.key().as_ref(),
            subject.round.to_le_bytes().as_ref(),
        ],
        bump,
        payer = resolver,
        space = RoundResult::LEN
    )]
    pub round_result: Account<'info, RoundResult>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// CHECK: Fee destination, validated against the stored config
    #[account(mut, constraint = treasury.key() == config.treasury @ TribunalError::Unauthorized)]
    pub treasury: AccountInfo<'info>,

    /// Permissionless crank: anyone may resolve once voting closes.
    #[account(mut)]
    pub resolver: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_resolve_dispute(ctx: Context<ResolveDispute>) -> Result<()> {
    let subject = &mut ctx.accounts.subject;
    let dispute = &mut ctx.accounts.dispute;

    match dispute.status {
        DisputeStatus::Pending => {}
        DisputeStatus::Resolved => return err!(TribunalError::AlreadyResolved),
        DisputeStatus::None => return err!(TribunalError::DisputeNotPending),
    }

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(now >= dispute.voting_ends_at, TribunalError::VotingStillOpen);

    let is_restore = dispute.is_restore;
    let total_stake = dispute.contest_stake();
    let (bond_at_risk, safe_bond) = if is_restore {
        (0, 0)
    } else {
        let at_risk = bond_exposure(subject.available_bond, total_stake, subject.match_mode);
        (at_risk, subject.available_bond - at_risk)
    };

    let outcome = resolve_outcome(dispute.votes_for_challenger, dispute.votes_for_defender);
    let total_vote_weight = dispute.total_vote_weight()?;
    let fees = FeeSchedule::from_config(&ctx.accounts.config);
    let split = compute_settlement(outcome, total_stake, bond_at_risk, safe_bond, is_restore, &fees)?;

    // Treasury takes its cut now; winner and juror pools leave escrow as
    // participants claim against the snapshot below.
    if split.treasury_pool > 0 {
        ctx.accounts.escrow.debit(split.treasury_pool)?;
        move_lamports(
            &ctx.accounts.escrow.to_account_info(),
            &ctx.accounts.treasury.to_account_info(),
            split.treasury_pool,
        )?;
    }

    let result = &mut ctx.accounts.round_result;
    result.subject = subject.key();
    result.round = dispute.round;
    result.is_restore = is_restore;
    result.outcome = outcome;
    result.total_stake = total_stake;
    result.bond_at_risk = bond_at_risk;
    result.safe_bond = safe_bond;
    result.total_vote_weight = total_vote_weight;
    result.winner_pool = split.winner_pool;
    result.juror_pool = split.juror_pool;
    result.treasury_pool = split.treasury_pool;
    result.juror_count = dispute.vote_count;
    result.challenger_count = dispute.challenger_count;
    result.defender_count = if is_restore { 0 } else { subject.defender_count };
    result.juror_claims = 0;
    result.challenger_claims = 0;
    result.defender_claims = 0;
    result.stake_unlocks = 0;
    result.resolved_at = now;
    result.bump = ctx.bumps.round_result;

    dispute.status = DisputeStatus::Resolved;
    dispute.outcome = outcome;
    dispute.bond_at_risk = bond_at_risk;
    dispute.resolved_at = now;

    let risk_pool = total_stake
        .checked_add(bond_at_risk)
        .ok_or(TribunalError::MathOverflow)?;
    subject.status = Subject::status_after(outcome, is_restore);
    subject.last_round_pool = risk_pool;
    if !is_restore {
        // The whole bond settled into this round; defenders recover safe
        // bond and winnings through claims and must re-bond for the next.
        subject.available_bond = 0;
        subject.defender_count = 0;
    }
    subject.round = subject
        .round
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;
    subject.touch();

    ctx.accounts.escrow.rounds = ctx
        .accounts
        .escrow
        .rounds
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    msg!(
        "subject {} round {} resolved: {:?}",
        subject.subject_id,
        result.round,
        outcome
    );

    emit!(DisputeResolved {
        subject_id: subject.subject_id,
        round: result.round,
        is_restore,
        outcome,
        total_vote_weight,
        winner_pool: split.winner_pool,
        juror_pool: split.juror_pool,
        treasury_pool: split.treasury_pool,
        safe_bond,
        resolved_at: now,
    });

    Ok(())
}
