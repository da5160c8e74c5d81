//! Price feed interface consumed at the lock and end transitions.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::errors::ContractError;

/// A single price observation as reported by the feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub timestamp: u64,
    pub price: i128, // fixed point, 8 decimals
}

/// Any contract exposing `latest_price` can serve as the feed.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_price(env: Env) -> PriceData;
}

/// Reads the feed's current observation, rejecting non-positive prices.
pub(crate) fn read_price(env: &Env, feed: &Address) -> Result<PriceData, ContractError> {
    let data = PriceFeedClient::new(env, feed).latest_price();
    if data.price <= 0 {
        return Err(ContractError::InvalidPrice);
    }
    Ok(data)
}
