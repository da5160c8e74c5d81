//! Test modules for the bull/bear round prediction game.

mod mock_feed;

use crate::contract::{BetGameContract, BetGameContractClient};
use crate::types::DEFAULT_ROUND_INTERVAL;
use mock_feed::{MockPriceFeed, MockPriceFeedClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

pub(crate) const START_TIME: u64 = 1_700_000_000;
pub(crate) const INTERVAL: u64 = DEFAULT_ROUND_INTERVAL;
pub(crate) const UNIT: i128 = 1_0000000; // 7 decimals, like native tokens
pub(crate) const STARTING_BALANCE: i128 = 1000 * UNIT;

/// A deployed game wired to a mock price feed and a Stellar asset escrow token.
pub(crate) struct Game<'a> {
    pub env: Env,
    pub contract_id: Address,
    pub admin: Address,
    pub client: BetGameContractClient<'a>,
    pub feed: MockPriceFeedClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

pub(crate) fn setup(env: &Env) -> Game<'_> {
    env.mock_all_auths();
    set_time(env, START_TIME);

    let admin = Address::generate(env);
    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token = TokenClient::new(env, &asset.address());
    let token_admin = StellarAssetClient::new(env, &asset.address());

    let feed_id = env.register(MockPriceFeed, ());
    let feed = MockPriceFeedClient::new(env, &feed_id);
    feed.set_price(&1300);

    let contract_id = env.register(BetGameContract, ());
    let client = BetGameContractClient::new(env, &contract_id);
    client.initialize(&admin, &feed_id, &asset.address(), &INTERVAL);

    Game {
        env: env.clone(),
        contract_id,
        admin,
        client,
        feed,
        token,
        token_admin,
    }
}

impl Game<'_> {
    /// A fresh participant funded with `STARTING_BALANCE`.
    pub fn participant(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &STARTING_BALANCE);
        user
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        set_time(&self.env, now + seconds);
    }

    /// Begins a round and moves time to its lock threshold.
    pub fn begin_and_reach_lock(&self) -> u32 {
        let round_id = self.client.execute_round_begin();
        self.advance(INTERVAL);
        round_id
    }

    /// Drives the newest round through lock and end at the given prices and
    /// calculates its result.
    pub fn settle(&self, lock_price: i128, close_price: i128) -> u32 {
        self.feed.set_price(&lock_price);
        let round_id = self.client.execute_round_lock();
        self.advance(INTERVAL);
        self.feed.set_price(&close_price);
        self.client.execute_round_end();
        self.client.calculate_result(&round_id);
        round_id
    }
}

pub(crate) fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}
