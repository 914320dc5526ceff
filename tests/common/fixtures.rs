//! Test data factories for integration tests.

use loyalty_points::domain::{ApiToken, CustomerId, UserProfile};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOKEN_LENGTH: usize = 40;

/// Builds users with deterministic, distinct tokens.
pub struct UserFactory {
    rng: StdRng,
    next_id: i64,
}

impl UserFactory {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn user(&mut self, name: &str) -> UserProfile {
        let id = self.next_id;
        self.next_id += 1;
        UserProfile::new(id, name, ApiToken::new(self.token()))
    }

    /// A token no registered user holds.
    pub fn token(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}

pub fn customer(id: i64) -> CustomerId {
    CustomerId::create(id).unwrap()
}

pub fn add_point_body(customer_id: i64, amount: u64) -> serde_json::Value {
    serde_json::json!({ "customer_id": customer_id, "amount": amount })
}
