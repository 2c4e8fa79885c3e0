use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::records::{BondSource, VoteChoice};

declare_id!("TribunaL11111111111111111111111111111111111");

#[program]
pub mod solana_tribunal {
    use super::*;

    pub fn init_protocol(ctx: Context<InitProtocol>, params: ProtocolParams) -> Result<()> {
        instructions::admin::init_protocol::process_init_protocol(ctx, params)
    }

    pub fn update_fees(ctx: Context<UpdateFees>, params: ProtocolParams) -> Result<()> {
        instructions::admin::update_fees::process_update_fees(ctx, params)
    }

    pub fn update_treasury(ctx: Context<UpdateTreasury>) -> Result<()> {
        instructions::admin::update_treasury::process_update_treasury(ctx)
    }

    pub fn pause_protocol(ctx: Context<ProtocolAdmin>) -> Result<()> {
        instructions::admin::pause::pause_protocol(ctx)
    }

    pub fn unpause_protocol(ctx: Context<ProtocolAdmin>) -> Result<()> {
        instructions::admin::pause::unpause_protocol(ctx)
    }

    pub fn deposit_juror_stake(ctx: Context<DepositJurorStake>, amount: u64) -> Result<()> {
        instructions::pools::deposit::process_deposit_juror_stake(ctx, amount)
    }

    pub fn deposit_challenger_stake(
        ctx: Context<DepositChallengerStake>,
        amount: u64,
    ) -> Result<()> {
        instructions::pools::deposit::process_deposit_challenger_stake(ctx, amount)
    }

    pub fn deposit_defender_stake(ctx: Context<DepositDefenderStake>, amount: u64) -> Result<()> {
        instructions::pools::deposit::process_deposit_defender_stake(ctx, amount)
    }

    pub fn withdraw_juror_stake(ctx: Context<WithdrawJurorStake>, amount: u64) -> Result<()> {
        instructions::pools::withdraw::process_withdraw_juror_stake(ctx, amount)
    }

    pub fn withdraw_challenger_stake(
        ctx: Context<WithdrawChallengerStake>,
        amount: u64,
    ) -> Result<()> {
        instructions::pools::withdraw::process_withdraw_challenger_stake(ctx, amount)
    }

    pub fn withdraw_defender_stake(ctx: Context<WithdrawDefenderStake>, amount: u64) -> Result<()> {
        instructions::pools::withdraw::process_withdraw_defender_stake(ctx, amount)
    }

    pub fn set_max_bond(ctx: Context<ConfigureDefenderPool>, max_bond: u64) -> Result<()> {
        instructions::pools::configure::process_set_max_bond(ctx, max_bond)
    }

    pub fn register_subject(
        ctx: Context<RegisterSubject>,
        subject_id: u64,
        params: RegisterSubjectParams,
    ) -> Result<()> {
        instructions::subject::register_subject::process_register_subject(ctx, subject_id, params)
    }

    pub fn add_bond(ctx: Context<AddBond>, amount: u64, source: BondSource) -> Result<()> {
        instructions::subject::add_bond::process_add_bond(ctx, amount, source)
    }

    pub fn withdraw_bond(ctx: Context<WithdrawBond>, amount: u64) -> Result<()> {
        instructions::subject::withdraw_bond::process_withdraw_bond(ctx, amount)
    }

    pub fn open_dispute(ctx: Context<OpenDispute>, stake: u64, details_cid: String) -> Result<()> {
        instructions::dispute::open_dispute::process_open_dispute(ctx, stake, details_cid)
    }

    pub fn support_dispute(
        ctx: Context<SupportDispute>,
        stake: u64,
        details_cid: String,
    ) -> Result<()> {
        instructions::dispute::support_dispute::process_support_dispute(ctx, stake, details_cid)
    }

    pub fn open_restoration(
        ctx: Context<OpenRestoration>,
        stake: u64,
        details_cid: String,
    ) -> Result<()> {
        instructions::dispute::open_restoration::process_open_restoration(ctx, stake, details_cid)
    }

    pub fn submit_vote(ctx: Context<SubmitVote>, choice: VoteChoice, stake: u64) -> Result<()> {
        instructions::voting::submit_vote::process_submit_vote(ctx, choice, stake)
    }

    pub fn add_to_vote(ctx: Context<AddToVote>, stake: u64) -> Result<()> {
        instructions::voting::add_to_vote::process_add_to_vote(ctx, stake)
    }

    pub fn resolve_dispute(ctx: Context<ResolveDispute>) -> Result<()> {
        instructions::dispute::resolve_dispute::process_resolve_dispute(ctx)
    }

    pub fn claim_juror_reward(ctx: Context<ClaimJurorReward>, round: u64) -> Result<()> {
        instructions::claims::claim_juror_reward::process_claim_juror_reward(ctx, round)
    }

    pub fn claim_challenger_reward(ctx: Context<ClaimChallengerReward>, round: u64) -> Result<()> {
        instructions::claims::claim_challenger_reward::process_claim_challenger_reward(ctx, round)
    }

    pub fn claim_defender_reward(ctx: Context<ClaimDefenderReward>, round: u64) -> Result<()> {
        instructions::claims::claim_defender_reward::process_claim_defender_reward(ctx, round)
    }

    pub fn unlock_juror_stake(ctx: Context<UnlockJurorStake>, round: u64) -> Result<()> {
        instructions::claims::unlock_stake::process_unlock_juror_stake(ctx, round)
    }

    pub fn unlock_juror_stakes<'info>(
        ctx: Context<'_, '_, 'info, 'info, UnlockJurorStakes<'info>>,
    ) -> Result<()> {
        instructions::claims::unlock_stake::process_unlock_juror_stakes(ctx)
    }

    pub fn close_juror_record(ctx: Context<CloseJurorRecord>, round: u64) -> Result<()> {
        instructions::claims::close_record::process_close_juror_record(ctx, round)
    }

    pub fn close_challenger_record(ctx: Context<CloseChallengerRecord>, round: u64) -> Result<()> {
        instructions::claims::close_record::process_close_challenger_record(ctx, round)
    }

    pub fn close_defender_record(ctx: Context<CloseDefenderRecord>, round: u64) -> Result<()> {
        instructions::claims::close_record::process_close_defender_record(ctx, round)
    }

    pub fn close_juror_records<'info>(
        ctx: Context<'_, '_, 'info, 'info, CloseJurorRecords<'info>>,
    ) -> Result<()> {
        instructions::claims::close_record::process_close_juror_records(ctx)
    }
}
