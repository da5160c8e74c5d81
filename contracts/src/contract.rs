//! Public entry points of the bull/bear round prediction game.

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{
    Bet, BetSide, Config, Outcome, Round, RoundCursor, MAX_PAGE_SIZE, MAX_ROUND_INTERVAL,
};
use crate::{ledger, lifecycle, settlement, staking};

#[contract]
pub struct BetGameContract;

#[contractimpl]
impl BetGameContract {
    /// Stores the price feed, escrow token and round interval (one-time only)
    pub fn initialize(
        env: Env,
        admin: Address,
        price_feed: Address,
        token: Address,
        interval: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if ledger::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        if interval == 0 || interval > MAX_ROUND_INTERVAL {
            return Err(ContractError::InvalidDuration);
        }

        ledger::set_config(
            &env,
            &Config {
                admin,
                price_feed,
                token,
                interval,
            },
        );

        Ok(())
    }

    /// Starts the next round; returns its id
    pub fn execute_round_begin(env: Env) -> Result<u32, ContractError> {
        lifecycle::begin(&env)
    }

    /// Locks the pending round at the feed's current price; returns its id
    pub fn execute_round_lock(env: Env) -> Result<u32, ContractError> {
        lifecycle::lock(&env)
    }

    /// Ends the oldest locked round at the feed's current price; returns its id
    pub fn execute_round_end(env: Env) -> Result<u32, ContractError> {
        lifecycle::end(&env)
    }

    pub fn calculate_result(env: Env, round_id: u32) -> Result<Outcome, ContractError> {
        lifecycle::calculate_result(&env, round_id)
    }

    /// Bets that the price will rise; returns the round id
    pub fn bet_bull(env: Env, participant: Address, amount: i128) -> Result<u32, ContractError> {
        participant.require_auth();
        staking::place_bet(&env, &participant, BetSide::Bull, amount)
    }

    /// Bets that the price will fall; returns the round id
    pub fn bet_bear(env: Env, participant: Address, amount: i128) -> Result<u32, ContractError> {
        participant.require_auth();
        staking::place_bet(&env, &participant, BetSide::Bear, amount)
    }

    /// Pays out the participant's entitlement for a calculated round
    pub fn claim_reward(env: Env, participant: Address, round_id: u32) -> Result<i128, ContractError> {
        participant.require_auth();
        settlement::claim(&env, &participant, round_id)
    }

    pub fn get_round_info(env: Env, round_id: u32) -> Option<Round> {
        ledger::round(&env, round_id)
    }

    pub fn get_bet(env: Env, round_id: u32, participant: Address) -> Option<Bet> {
        ledger::bet(&env, round_id, &participant)
    }

    /// Amount the participant could claim right now, 0 if nothing
    pub fn claimable(env: Env, round_id: u32, participant: Address) -> i128 {
        settlement::claimable(&env, round_id, &participant)
    }

    /// Ids of rounds the participant has bet in, oldest first, one page at a time
    pub fn get_user_rounds(env: Env, participant: Address, offset: u32, limit: u32) -> Vec<u32> {
        let limit = core::cmp::min(limit, MAX_PAGE_SIZE);
        ledger::user_rounds(&env, &participant, offset, limit)
    }

    /// Number of rounds the participant has bet in
    pub fn get_user_round_count(env: Env, participant: Address) -> u32 {
        ledger::user_round_count(&env, &participant)
    }

    /// Id of the newest round, 0 before the first begin
    pub fn current_round_id(env: Env) -> u32 {
        ledger::cursor(&env).latest
    }

    pub fn get_cursor(env: Env) -> RoundCursor {
        ledger::cursor(&env)
    }

    pub fn get_config(env: Env) -> Option<Config> {
        ledger::config(&env).ok()
    }
}
