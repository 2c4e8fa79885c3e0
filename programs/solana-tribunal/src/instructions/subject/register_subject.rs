use anchor_lang::prelude::*;

use crate::constants::{
    CONFIG_SEED, ESCROW_SEED, MAX_CID_LEN, MAX_VOTING_PERIOD, MIN_VOTING_PERIOD, SUBJECT_SEED,
};
use crate::errors::TribunalError;
use crate::events::SubjectRegistered;
use crate::state::{Escrow, ProtocolConfig, Subject, SubjectStatus};

#[derive(Accounts)]
#[instruction(subject_id: u64)]
pub struct RegisterSubject<'info> {
    #[account(
        init,
        seeds = [SUBJECT_SEED, subject_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Subject::LEN
    )]
    pub subject: Account<'info, Subject>,

    #[account(
        init,
        seeds = [ESCROW_SEED, subject.key().as_ref()],
        bump,
        payer = creator,
        space = Escrow::LEN
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterSubjectParams {
    pub voting_period: i64,
    pub match_mode: bool,
    pub details_cid: String,
}

pub fn process_register_subject(
    ctx: Context<RegisterSubject>,
    subject_id: u64,
    params: RegisterSubjectParams,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, TribunalError::ProtocolPaused);
    require!(
        params.voting_period >= MIN_VOTING_PERIOD && params.voting_period <= MAX_VOTING_PERIOD,
        TribunalError::InvalidVotingPeriod
    );
    require!(
        params.details_cid.len() <= MAX_CID_LEN,
        TribunalError::CidTooLong
    );

    let subject = &mut ctx.accounts.subject;
    subject.subject_id = subject_id;
    subject.creator = ctx.accounts.creator.key();
    subject.round = 0;
    subject.status = SubjectStatus::Dormant; // Valid once bond arrives
    subject.available_bond = 0;
    subject.defender_count = 0;
    subject.voting_period = params.voting_period;
    subject.match_mode = params.match_mode;
    subject.last_round_pool = 0;
    subject.details_cid = params.details_cid;
    subject.seq = 0;
    subject.bump = ctx.bumps.subject;

    let escrow = &mut ctx.accounts.escrow;
    escrow.subject = subject.key();
    escrow.balance = 0;
    escrow.rounds = 0;
    escrow.bump = ctx.bumps.escrow;

    config.total_subjects = config
        .total_subjects
        .checked_add(1)
        .ok_or(TribunalError::MathOverflow)?;

    emit!(SubjectRegistered {
        subject_id,
        creator: subject.creator,
        voting_period: subject.voting_period,
        match_mode: subject.match_mode,
    });

    Ok(())
}
