//! Outcome determination, payout math and the claim protocol.
//!
//! Winners receive their stake plus a share of the losing pool proportional
//! to their stake: `amount + amount * losing / winning`, truncated. The
//! truncation dust is never paid out and stays in the contract. When the
//! price is unchanged or nobody backed the winning side, every bet is
//! refunded in full.

use soroban_sdk::{token, Address, Env, I256};

use crate::errors::ContractError;
use crate::events::RewardClaimed;
use crate::ledger;
use crate::types::{Bet, BetSide, Outcome, Phase, Round};

/// Compares the close price against the lock price.
pub fn outcome(lock_price: i128, close_price: i128) -> Outcome {
    if close_price > lock_price {
        Outcome::BullWins
    } else if close_price < lock_price {
        Outcome::BearWins
    } else {
        Outcome::Draw
    }
}

/// Fixes the outcome and reward ratio of an ended round.
///
/// `reward_base` is left at zero when the round pays refunds only, which
/// keeps the later division well defined.
pub(crate) fn calculate(round: &mut Round) -> Result<(), ContractError> {
    let (lock_price, close_price) = match (round.lock_price, round.close_price) {
        (Some(lock_price), Some(close_price)) => (lock_price, close_price),
        _ => return Err(ContractError::InvalidState),
    };

    let outcome = outcome(lock_price, close_price);
    let total_pool = round
        .total_bull_amount
        .checked_add(round.total_bear_amount)
        .ok_or(ContractError::Overflow)?;
    let winning_total = match outcome {
        Outcome::BullWins => round.total_bull_amount,
        Outcome::BearWins => round.total_bear_amount,
        Outcome::Draw | Outcome::Pending => 0,
    };

    if winning_total > 0 {
        round.reward_base = winning_total;
        round.reward_amount = total_pool;
    } else {
        round.reward_base = 0;
        round.reward_amount = 0;
    }
    round.outcome = outcome;
    round.phase = Phase::Calculated;

    Ok(())
}

/// Amount owed for `bet` in a calculated round, ignoring the claimed flag.
///
/// The share of the losing pool is computed in 256 bits; since a winning
/// stake never exceeds the winning total the quotient fits back in `i128`.
pub fn entitlement(env: &Env, round: &Round, bet: &Bet) -> Result<i128, ContractError> {
    if round.phase != Phase::Calculated || round.outcome == Outcome::Pending {
        return Err(ContractError::NotSettled);
    }

    if round.reward_base == 0 {
        return Ok(bet.amount);
    }

    let won = matches!(
        (round.outcome, bet.side),
        (Outcome::BullWins, BetSide::Bull) | (Outcome::BearWins, BetSide::Bear)
    );
    if !won {
        return Ok(0);
    }

    let losing_pool = round
        .reward_amount
        .checked_sub(round.reward_base)
        .ok_or(ContractError::Overflow)?;
    let share = I256::from_i128(env, bet.amount)
        .mul(&I256::from_i128(env, losing_pool))
        .div(&I256::from_i128(env, round.reward_base))
        .to_i128()
        .ok_or(ContractError::Overflow)?;

    bet.amount.checked_add(share).ok_or(ContractError::Overflow)
}

/// What `participant` could claim from the round right now.
pub(crate) fn claimable(env: &Env, round_id: u32, participant: &Address) -> i128 {
    let (Some(round), Some(bet)) = (
        ledger::round(env, round_id),
        ledger::bet(env, round_id, participant),
    ) else {
        return 0;
    };
    if bet.claimed {
        return 0;
    }
    entitlement(env, &round, &bet).unwrap_or(0)
}

/// Pays out a participant's entitlement exactly once.
///
/// The claimed flag is persisted before the token transfer, and the transfer
/// is the last effect of the call.
pub(crate) fn claim(env: &Env, participant: &Address, round_id: u32) -> Result<i128, ContractError> {
    let config = ledger::config(env)?;
    let round = ledger::load_round(env, round_id)?;
    if round.phase != Phase::Calculated {
        return Err(ContractError::NotSettled);
    }

    let mut bet = ledger::bet(env, round_id, participant).ok_or(ContractError::NothingToClaim)?;
    if bet.claimed {
        return Err(ContractError::NothingToClaim);
    }

    let amount = entitlement(env, &round, &bet)?;
    if amount == 0 {
        return Err(ContractError::NothingToClaim);
    }

    bet.claimed = true;
    ledger::save_bet(env, round_id, participant, &bet);

    RewardClaimed {
        round_id,
        participant: participant.clone(),
        amount,
    }
    .publish(env);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        participant,
        &amount,
    );

    Ok(amount)
}
