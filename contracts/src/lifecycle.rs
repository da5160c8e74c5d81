//! Round phase transitions: begin, lock, end and result calculation.
//!
//! Any caller may trigger a transition once its time condition holds. The
//! first caller wins; later callers get `InvalidState` or `TooEarly` and
//! nothing is written.

use soroban_sdk::{log, Env};

use crate::errors::ContractError;
use crate::events::{RoundBegin, RoundCalculated, RoundEnd, RoundLock};
use crate::types::{Outcome, Phase, Round};
use crate::{ledger, oracle, settlement};

/// Opens the next round. The previous round must already be locked.
pub(crate) fn begin(env: &Env) -> Result<u32, ContractError> {
    let config = ledger::config(env)?;
    let mut cursor = ledger::cursor(env);

    if cursor.latest > cursor.locked {
        return Err(ContractError::InvalidState);
    }

    let now = env.ledger().timestamp();
    let lock_time = now
        .checked_add(config.interval)
        .ok_or(ContractError::Overflow)?;
    let end_time = lock_time
        .checked_add(config.interval)
        .ok_or(ContractError::Overflow)?;
    let round_id = cursor
        .latest
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let round = Round {
        id: round_id,
        start_time: now,
        lock_time,
        end_time,
        total_bull_amount: 0,
        total_bear_amount: 0,
        lock_price: None,
        close_price: None,
        phase: Phase::Created,
        outcome: Outcome::Pending,
        reward_base: 0,
        reward_amount: 0,
    };
    ledger::save_round(env, &round);

    cursor.latest = round_id;
    ledger::set_cursor(env, &cursor);

    RoundBegin {
        round_id,
        start_time: now,
        lock_time,
        end_time,
    }
    .publish(env);

    Ok(round_id)
}

/// Snapshots the lock price of the oldest round still accepting bets.
pub(crate) fn lock(env: &Env) -> Result<u32, ContractError> {
    let config = ledger::config(env)?;
    let mut cursor = ledger::cursor(env);

    if cursor.locked >= cursor.latest {
        return Err(ContractError::InvalidState);
    }
    let round_id = cursor.locked + 1;
    let mut round = ledger::load_round(env, round_id)?;
    if round.phase != Phase::Created {
        return Err(ContractError::InvalidState);
    }
    if env.ledger().timestamp() < round.lock_time {
        return Err(ContractError::TooEarly);
    }

    let observation = oracle::read_price(env, &config.price_feed)?;
    round.lock_price = Some(observation.price);
    round.phase = Phase::Locked;
    ledger::save_round(env, &round);

    cursor.locked = round_id;
    ledger::set_cursor(env, &cursor);

    log!(env, "round locked", round_id, observation.price);
    RoundLock {
        round_id,
        price: observation.price,
        oracle_time: observation.timestamp,
    }
    .publish(env);

    Ok(round_id)
}

/// Snapshots the close price of the oldest locked round.
pub(crate) fn end(env: &Env) -> Result<u32, ContractError> {
    let config = ledger::config(env)?;
    let mut cursor = ledger::cursor(env);

    if cursor.ended >= cursor.locked {
        return Err(ContractError::InvalidState);
    }
    let round_id = cursor.ended + 1;
    let mut round = ledger::load_round(env, round_id)?;
    if round.phase != Phase::Locked {
        return Err(ContractError::InvalidState);
    }
    if env.ledger().timestamp() < round.end_time {
        return Err(ContractError::TooEarly);
    }

    let observation = oracle::read_price(env, &config.price_feed)?;
    round.close_price = Some(observation.price);
    round.phase = Phase::Ended;
    ledger::save_round(env, &round);

    cursor.ended = round_id;
    ledger::set_cursor(env, &cursor);

    log!(env, "round ended", round_id, observation.price);
    RoundEnd {
        round_id,
        price: observation.price,
        oracle_time: observation.timestamp,
    }
    .publish(env);

    Ok(round_id)
}

/// Settles an ended round, fixing its outcome and reward ratio.
pub(crate) fn calculate_result(env: &Env, round_id: u32) -> Result<Outcome, ContractError> {
    ledger::config(env)?;
    let mut round = ledger::load_round(env, round_id)?;

    match round.phase {
        Phase::Calculated => return Err(ContractError::AlreadyCalculated),
        Phase::Ended => {}
        _ => return Err(ContractError::InvalidState),
    }

    settlement::calculate(&mut round)?;
    ledger::save_round(env, &round);

    let outcome = round.outcome;
    log!(env, "round calculated", round_id, round.reward_base, round.reward_amount);
    RoundCalculated {
        round_id,
        outcome,
        reward_base: round.reward_base,
        reward_amount: round.reward_amount,
    }
    .publish(env);

    Ok(outcome)
}
