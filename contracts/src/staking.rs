//! Bet placement into the currently open round.

use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;
use crate::events::BetPlaced;
use crate::ledger;
use crate::types::{Bet, BetSide, Phase};

/// Records a bet on the newest round and escrows the stake.
///
/// Returns the id of the round the bet landed in.
pub(crate) fn place_bet(
    env: &Env,
    participant: &Address,
    side: BetSide,
    amount: i128,
) -> Result<u32, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidBetAmount);
    }

    let config = ledger::config(env)?;
    let cursor = ledger::cursor(env);
    if cursor.latest == 0 {
        return Err(ContractError::NoOpenRound);
    }

    let mut round = ledger::load_round(env, cursor.latest)?;
    if round.phase != Phase::Created || env.ledger().timestamp() >= round.lock_time {
        return Err(ContractError::BettingClosed);
    }

    if ledger::bet(env, round.id, participant).is_some() {
        return Err(ContractError::DuplicateBet);
    }

    let token = token::Client::new(env, &config.token);
    if token.balance(participant) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    ledger::add_stake(&mut round, side, amount)?;

    let bet = Bet {
        side,
        amount,
        claimed: false,
    };
    ledger::save_bet(env, round.id, participant, &bet);
    ledger::save_round(env, &round);
    ledger::push_user_round(env, participant, round.id)?;

    BetPlaced {
        round_id: round.id,
        participant: participant.clone(),
        side,
        amount,
    }
    .publish(env);

    token.transfer(participant, &env.current_contract_address(), &amount);

    Ok(round.id)
}
