//! Contract error types for the bull/bear round prediction game.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Round interval is zero or too long
    InvalidDuration = 3,
    /// Bet amount must be greater than zero
    InvalidBetAmount = 4,
    /// No round has been started yet
    NoOpenRound = 5,
    /// No round with the given id
    RoundNotFound = 6,
    /// Participant cannot cover the stake
    InsufficientBalance = 7,
    /// Arithmetic overflow occurred
    Overflow = 8,
    /// Price feed reported a non-positive price
    InvalidPrice = 9,
    /// Transition invoked before its time threshold
    TooEarly = 10,
    /// Transition invoked outside its required phase
    InvalidState = 11,
    /// Result for the round is already calculated
    AlreadyCalculated = 12,
    /// Bet placed at or after lock time
    BettingClosed = 13,
    /// Participant already has a bet in this round
    DuplicateBet = 14,
    /// Round result not calculated yet
    NotSettled = 15,
    /// No bet, already claimed, or zero entitlement
    NothingToClaim = 16,
}
