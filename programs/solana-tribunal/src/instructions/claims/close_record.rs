use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::constants::{
    CHALLENGER_POOL_SEED, CHALLENGER_RECORD_SEED, DEFENDER_POOL_SEED, DEFENDER_RECORD_SEED,
    JUROR_POOL_SEED, JUROR_RECORD_SEED, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::{RecordClosed, RecordSkipped};
use crate::state::{
    BondSource, ChallengerPool, ChallengerRecord, DefenderPool, DefenderRecord, JurorPool,
    JurorRecord, PoolRole, Subject,
};

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct CloseJurorRecord<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        close = juror,
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

    #[account(mut)]
    pub juror: Signer<'info>,
}

/// Reclaim the record's rent. Jurors must have claimed the reward and
/// unlocked the principal first.
pub fn process_close_juror_record(ctx: Context<CloseJurorRecord>, _round: u64) -> Result<()> {
    let record = &ctx.accounts.record;
    require!(record.closeable(), TribunalError::CloseNotReady);

    let pool = &mut ctx.accounts.juror_pool;
    pool.subject_count = pool.subject_count.saturating_sub(1);

    emit!(RecordClosed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.juror,
        role: PoolRole::Juror,
        round: record.round,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct CloseChallengerRecord<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        close = challenger,
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

    #[account(mut)]
    pub challenger: Signer<'info>,
}

pub fn process_close_challenger_record(
    ctx: Context<CloseChallengerRecord>,
    _round: u64,
) -> Result<()> {
    let record = &ctx.accounts.record;
    require!(record.reward_claimed, TribunalError::CloseNotReady);

    let pool = &mut ctx.accounts.challenger_pool;
    pool.subject_count = pool.subject_count.saturating_sub(1);

    emit!(RecordClosed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.challenger,
        role: PoolRole::Challenger,
        round: record.round,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(round: u64)]
pub struct CloseDefenderRecord<'info> {
    #[account(
        seeds = [SUBJECT_SEED, subject.subject_id.to_le_bytes().as_ref()],
        bump = subject.bump,
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        mut,
        close = defender,
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

    /// Required for pool-backed bonds so the engagement count stays honest.
    #[account(
        mut,
        seeds = [DEFENDER_POOL_SEED, defender.key().as_ref()],
        bump = defender_pool.bump,
    )]
    pub defender_pool: Option<Account<'info, DefenderPool>>,

    #[account(mut)]
    pub defender: Signer<'info>,
}

pub fn process_close_defender_record(
    ctx: Context<CloseDefenderRecord>,
    _round: u64,
) -> Result<()> {
    let record = &ctx.accounts.record;
    require!(record.reward_claimed, TribunalError::CloseNotReady);

    if record.source == BondSource::Pool {
        let pool = ctx
            .accounts
            .defender_pool
            .as_mut()
            .ok_or(TribunalError::MissingPoolAccount)?;
        pool.subject_count = pool.subject_count.saturating_sub(1);
    }

    emit!(RecordClosed {
        subject_id: ctx.accounts.subject.subject_id,
        participant: record.defender,
        role: PoolRole::Defender,
        round: record.round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseJurorRecords<'info> {
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

    #[account(mut)]
    pub juror: Signer<'info>,
    // remaining accounts: juror records to close, all writable
}

/// Batch close across rounds of one subject. Records that are not yet
/// closeable are reported through `RecordSkipped` and left intact.
pub fn process_close_juror_records<'info>(
    ctx: Context<'_, '_, 'info, 'info, CloseJurorRecords<'info>>,
) -> Result<()> {
    let subject_key = ctx.accounts.subject.key();
    let juror_key = ctx.accounts.juror.key();

    for record_info in ctx.remaining_accounts.iter() {
        match close_one(
            record_info,
            &subject_key,
            &juror_key,
            &ctx.accounts.juror.to_account_info(),
        ) {
            Ok(round) => {
                let pool = &mut ctx.accounts.juror_pool;
                pool.subject_count = pool.subject_count.saturating_sub(1);
                emit!(RecordClosed {
                    subject_id: ctx.accounts.subject.subject_id,
                    participant: juror_key,
                    role: PoolRole::Juror,
                    round,
                });
            }
            Err(code) => emit!(RecordSkipped {
                record: record_info.key(),
                code: code.code(),
            }),
        }
    }

    Ok(())
}

fn close_one<'info>(
    record_info: &'info AccountInfo<'info>,
    subject_key: &Pubkey,
    juror_key: &Pubkey,
    destination: &AccountInfo<'info>,
) -> std::result::Result<u64, TribunalError> {
    if !record_info.is_writable {
        return Err(TribunalError::RecordMismatch);
    }

    let record: Account<JurorRecord> =
        Account::try_from(record_info).map_err(|_| TribunalError::RecordMismatch)?;

    if record.subject != *subject_key || record.juror != *juror_key {
        return Err(TribunalError::RecordMismatch);
    }
    if !record.closeable() {
        return Err(TribunalError::CloseNotReady);
    }

    let round = record.round;
    record
        .close(destination.clone())
        .map_err(|_| TribunalError::RecordMismatch)?;
    Ok(round)
}
