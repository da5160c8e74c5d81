//! Events published on every successful state transition.

use soroban_sdk::{contractevent, Address};

use crate::types::{BetSide, Outcome};

#[contractevent(topics = ["round_begin"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundBegin {
    pub round_id: u32,
    pub start_time: u64,
    pub lock_time: u64,
    pub end_time: u64,
}

#[contractevent(topics = ["round_lock"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundLock {
    pub round_id: u32,
    pub price: i128,
    pub oracle_time: u64,
}

#[contractevent(topics = ["round_end"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundEnd {
    pub round_id: u32,
    pub price: i128,
    pub oracle_time: u64,
}

#[contractevent(topics = ["round_calculated"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundCalculated {
    pub round_id: u32,
    pub outcome: Outcome,
    pub reward_base: i128,
    pub reward_amount: i128,
}

#[contractevent(topics = ["bet_placed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetPlaced {
    pub round_id: u32,
    pub participant: Address,
    pub side: BetSide,
    pub amount: i128,
}

#[contractevent(topics = ["reward_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimed {
    pub round_id: u32,
    pub participant: Address,
    pub amount: i128,
}
