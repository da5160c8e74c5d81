//! Type definitions for the bull/bear round prediction game.

use soroban_sdk::{contracttype, Address};

/// Seconds between a round's start and its lock, and between lock and end.
pub const DEFAULT_ROUND_INTERVAL: u64 = 3 * 60 * 60;

/// Upper bound on a configurable round interval (7 days).
pub const MAX_ROUND_INTERVAL: u64 = 7 * 24 * 60 * 60;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Largest page returned by `get_user_rounds`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Cursor,
    Round(u32),
    Bet(u32, Address),
    UserRoundCount(Address),
    UserRound(Address, u32),
}

/// Contract configuration, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub price_feed: Address,
    pub token: Address,
    pub interval: u64,
}

/// Tracks the newest round and how far lock/end have progressed.
///
/// Lock and end times grow with the round id, so both transitions walk the
/// rounds strictly in id order.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundCursor {
    pub latest: u32,
    pub locked: u32,
    pub ended: u32,
}

/// Which side of the price move a participant bet on
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BetSide {
    Bull,
    Bear,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Created,
    Locked,
    Ended,
    Calculated,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Pending,
    BullWins,
    BearWins,
    Draw,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub id: u32,
    pub start_time: u64,
    pub lock_time: u64,
    pub end_time: u64,
    pub total_bull_amount: i128,
    pub total_bear_amount: i128,
    pub lock_price: Option<i128>,
    pub close_price: Option<i128>,
    pub phase: Phase,
    pub outcome: Outcome, // Pending until calculated
    pub reward_base: i128,   // winning side total, 0 when every bet is refunded
    pub reward_amount: i128, // pool shared by the winners
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bet {
    pub side: BetSide,
    pub amount: i128,
    pub claimed: bool,
}
