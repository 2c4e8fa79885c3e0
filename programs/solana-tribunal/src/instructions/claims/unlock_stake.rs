use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::constants::{
    ESCROW_SEED, JUROR_POOL_SEED, JUROR_RECORD_SEED, ROUND_RESULT_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::{RecordSkipped, StakeUnlocked};
use crate::state::{Escrow, JurorPool, JurorRecord, RoundResult, Subject};
use crate::utils::move_lamports;

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct UnlockJurorStake<'info> {
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

    pub juror: Signer<'info>,
}

/// Return a juror's principal to their pool once the cooling-off period
/// after resolution has elapsed. Independent of the reward claim and of
/// which side won.
pub fn process_unlock_juror_stake(ctx: Context<UnlockJurorStake>, _round: u64) -> Result<()> {
    let record = &mut ctx.accounts.record;
    let result = &mut ctx.accounts.round_result;

    require!(record.voted_at != 0, TribunalError::EmptyRecord);
    require!(!record.stake_unlocked, TribunalError::AlreadyUnlocked);

    let clock = Clock::get()?;
    require!(
        result.stake_unlockable(clock.unix_timestamp),
        TribunalError::UnlockNotReady
    );

    let amount = record.stake_allocation;
    ctx.accounts.escrow.debit(amount)?;
    let pool = &mut ctx.accounts.juror_pool;
    pool.balance = pool
        .balance
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;
    move_lamports(
        &ctx.accounts.escrow.to_account_info(),
        &pool.to_account_info(),
        amount,
    )?;

    record.stake_unlocked = true;
    result.stake_unlocks = result
        .stake_unlocks
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    emit!(StakeUnlocked {
        subject_id: ctx.accounts.subject.subject_id,
        juror: record.juror,
        round: record.round,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UnlockJurorStakes<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

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

    pub juror: Signer<'info>,
    // remaining accounts: (juror record, round result) pairs, all writable
}

/// Batch unlock across rounds of one subject. Each pair is validated and
/// settled independently; an ineligible record is reported through
/// `RecordSkipped` and never fails the batch.
pub fn process_unlock_juror_stakes<'info>(
    ctx: Context<'_, '_, 'info, 'info, UnlockJurorStakes<'info>>,
) -> Result<()> {
    let subject_key = ctx.accounts.subject.key();
    let juror_key = ctx.accounts.juror.key();
    let now = Clock::get()?.unix_timestamp;

    for pair in ctx.remaining_accounts.chunks(2) {
        if pair.len() != 2 {
            emit!(RecordSkipped {
                record: pair[0].key(),
                code: TribunalError::RecordMismatch.code(),
            });
            continue;
        }
        let record_info = &pair[0];
        let result_info = &pair[1];

        match unlock_one(
            record_info,
            result_info,
            &subject_key,
            &juror_key,
            now,
            &mut ctx.accounts.escrow,
            &mut ctx.accounts.juror_pool,
        ) {
            Ok((round, amount)) => emit!(StakeUnlocked {
                subject_id: ctx.accounts.subject.subject_id,
                juror: juror_key,
                round,
                amount,
            }),
            Err(code) => emit!(RecordSkipped {
                record: record_info.key(),
                code: code.code(),
            }),
        }
    }

    Ok(())
}

fn unlock_one<'info>(
    record_info: &'info AccountInfo<'info>,
    result_info: &'info AccountInfo<'info>,
    subject_key: &Pubkey,
    juror_key: &Pubkey,
    now: i64,
    escrow: &mut Account<'info, Escrow>,
    pool: &mut Account<'info, JurorPool>,
) -> std::result::Result<(u64, u64), TribunalError> {
    if !record_info.is_writable || !result_info.is_writable {
        return Err(TribunalError::RecordMismatch);
    }

    let mut record: Account<JurorRecord> =
        Account::try_from(record_info).map_err(|_| TribunalError::RecordMismatch)?;
    let mut result: Account<RoundResult> =
        Account::try_from(result_info).map_err(|_| TribunalError::RecordMismatch)?;

    if record.subject != *subject_key
        || record.juror != *juror_key
        || result.subject != *subject_key
        || result.round != record.round
    {
        return Err(TribunalError::RecordMismatch);
    }
    if record.voted_at == 0 {
        return Err(TribunalError::EmptyRecord);
    }
    if record.stake_unlocked {
        return Err(TribunalError::AlreadyUnlocked);
    }
    if !result.stake_unlockable(now) {
        return Err(TribunalError::UnlockNotReady);
    }

    // Validate every figure before the first write: a skipped record must
    // leave the shared escrow and pool ledgers untouched.
    let amount = record.stake_allocation;
    let new_escrow_balance = escrow
        .balance
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientEscrow)?;
    let new_pool_balance = pool
        .balance
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;
    let new_unlocks = result
        .stake_unlocks
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    move_lamports(&escrow.to_account_info(), &pool.to_account_info(), amount)
        .map_err(|_| TribunalError::InsufficientEscrow)?;
    escrow.balance = new_escrow_balance;
    pool.balance = new_pool_balance;
    record.stake_unlocked = true;
    result.stake_unlocks = new_unlocks;

    let round = record.round;
    record
        .exit(&crate::ID)
        .map_err(|_| TribunalError::RecordMismatch)?;
    result
        .exit(&crate::ID)
        .map_err(|_| TribunalError::RecordMismatch)?;

    Ok((round, amount))
}
