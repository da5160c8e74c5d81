//! Settable stand-in for an external price feed contract.

use crate::oracle::PriceData;
use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[contracttype]
#[derive(Clone)]
enum FeedKey {
    Latest,
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn set_price(env: Env, price: i128) {
        let data = PriceData {
            timestamp: env.ledger().timestamp(),
            price,
        };
        env.storage().instance().set(&FeedKey::Latest, &data);
    }

    pub fn latest_price(env: Env) -> PriceData {
        env.storage()
            .instance()
            .get(&FeedKey::Latest)
            .unwrap_or(PriceData {
                timestamp: 0,
                price: 0,
            })
    }
}
