#![no_std]
//! # Bull/Bear Round Prediction Game
//!
//! Soroban contract where participants stake a token on whether an asset
//! price rises (bull) or falls (bear) over a fixed window. The losing side's
//! stakes are split among the winners in proportion to their stake.
//!
//! ## Round lifecycle
//! - `execute_round_begin`: opens a round; lock and end times are fixed
//! - `bet_bull` / `bet_bear`: accepted until the lock time
//! - `execute_round_lock` / `execute_round_end`: snapshot the price feed
//! - `calculate_result`: fixes the outcome and payout ratio
//! - `claim_reward`: pays each participant once
//!
//! Transitions are open to any caller once their time condition holds.

mod contract;
mod errors;
mod events;
mod ledger;
mod lifecycle;
mod oracle;
mod settlement;
mod staking;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{BetGameContract, BetGameContractClient};
pub use errors::ContractError;
pub use oracle::{PriceData, PriceFeed, PriceFeedClient};
pub use types::{
    Bet, BetSide, Config, DataKey, Outcome, Phase, Round, RoundCursor, DEFAULT_ROUND_INTERVAL,
    MAX_PAGE_SIZE,
};
