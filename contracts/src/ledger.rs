//! Storage access for rounds, bets and the round cursor.
//!
//! Every write goes to persistent storage and bumps the entry's TTL so
//! unclaimed rounds stay readable long after they settle.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{Bet, BetSide, Config, DataKey, Round, RoundCursor, BUMP_AMOUNT, BUMP_THRESHOLD};

pub(crate) fn config(env: &Env) -> Result<Config, ContractError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)?;
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
    Ok(config)
}

pub(crate) fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn cursor(env: &Env) -> RoundCursor {
    env.storage()
        .persistent()
        .get(&DataKey::Cursor)
        .unwrap_or_default()
}

pub(crate) fn set_cursor(env: &Env, cursor: &RoundCursor) {
    let key = DataKey::Cursor;
    env.storage().persistent().set(&key, cursor);
    extend(env, &key);
}

pub(crate) fn round(env: &Env, round_id: u32) -> Option<Round> {
    env.storage().persistent().get(&DataKey::Round(round_id))
}

pub(crate) fn load_round(env: &Env, round_id: u32) -> Result<Round, ContractError> {
    round(env, round_id).ok_or(ContractError::RoundNotFound)
}

pub(crate) fn save_round(env: &Env, round: &Round) {
    debug_assert!(round.start_time <= round.lock_time && round.lock_time <= round.end_time);
    let key = DataKey::Round(round.id);
    env.storage().persistent().set(&key, round);
    extend(env, &key);
}

pub(crate) fn bet(env: &Env, round_id: u32, participant: &Address) -> Option<Bet> {
    env.storage()
        .persistent()
        .get(&DataKey::Bet(round_id, participant.clone()))
}

pub(crate) fn save_bet(env: &Env, round_id: u32, participant: &Address, bet: &Bet) {
    let key = DataKey::Bet(round_id, participant.clone());
    env.storage().persistent().set(&key, bet);
    extend(env, &key);
}

pub(crate) fn user_round_count(env: &Env, participant: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UserRoundCount(participant.clone()))
        .unwrap_or(0)
}

/// Returns up to `limit` round ids the participant bet in, starting at the
/// `offset`-th bet. Each id sits in its own entry so the history can grow
/// without bound.
pub(crate) fn user_rounds(env: &Env, participant: &Address, offset: u32, limit: u32) -> Vec<u32> {
    let mut rounds = Vec::new(env);
    let count = user_round_count(env, participant);
    if offset >= count || limit == 0 {
        return rounds;
    }

    let end = core::cmp::min(offset.saturating_add(limit), count);
    for index in offset..end {
        let key = DataKey::UserRound(participant.clone(), index);
        if let Some(round_id) = env.storage().persistent().get(&key) {
            rounds.push_back(round_id);
        }
    }
    rounds
}

pub(crate) fn push_user_round(env: &Env, participant: &Address, round_id: u32) -> Result<(), ContractError> {
    let count = user_round_count(env, participant);

    let index_key = DataKey::UserRound(participant.clone(), count);
    env.storage().persistent().set(&index_key, &round_id);
    extend(env, &index_key);

    let count_key = DataKey::UserRoundCount(participant.clone());
    let next = count.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().persistent().set(&count_key, &next);
    extend(env, &count_key);
    Ok(())
}

/// Adds a stake to the matching side total of the round.
pub(crate) fn add_stake(round: &mut Round, side: BetSide, amount: i128) -> Result<(), ContractError> {
    match side {
        BetSide::Bull => {
            round.total_bull_amount = round
                .total_bull_amount
                .checked_add(amount)
                .ok_or(ContractError::Overflow)?;
        }
        BetSide::Bear => {
            round.total_bear_amount = round
                .total_bear_amount
                .checked_add(amount)
                .ok_or(ContractError::Overflow)?;
        }
    }
    Ok(())
}

fn extend(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
