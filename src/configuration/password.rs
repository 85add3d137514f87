// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Random alphanumeric secret generation. Not cryptographically secure:
//! generated values are persisted to the cluster secret immediately and
//! never re-derived, so unpredictability is all that is required.

use crate::configuration::types::Config;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of generated secret values. Injected into resolution so tests can
/// substitute a deterministic implementation.
pub trait SecretGenerator: Send + Sync {
    fn generate(&self, length: usize) -> String;
}

/// Default generator sampling `[a-zA-Z0-9]` from a seeded PRNG. The inner
/// state is locked so one generator can serve concurrent resolutions.
pub struct AlphanumericGenerator {
    rng: Mutex<StdRng>,
}

impl AlphanumericGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded variant, giving a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for AlphanumericGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator for AlphanumericGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap();
        (&mut *rng)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Fill in any secret field still empty after the persisted values have been
/// applied. A recovered value is never overwritten.
pub(crate) fn generate_secrets(config: &mut Config, generator: &dyn SecretGenerator) {
    if config.open_shift_oauth_client_secret.is_empty() {
        config.open_shift_oauth_client_secret = generator.generate(64);
    }

    let components = &mut config.syndesis.components;

    if components.database.password.is_empty() {
        components.database.password = generator.generate(16);
    }

    if components.database.sampledb_password.is_empty() {
        components.database.sampledb_password = generator.generate(16);
    }

    if components.oauth.cookie_secret.is_empty() {
        components.oauth.cookie_secret = generator.generate(32);
    }

    if components.server.syndesis_encrypt_key.is_empty() {
        components.server.syndesis_encrypt_key = generator.generate(64);
    }

    if components.server.client_state_authentication_key.is_empty() {
        components.server.client_state_authentication_key = generator.generate(32);
    }

    if components.server.client_state_encryption_key.is_empty() {
        components.server.client_state_encryption_key = generator.generate(32);
    }
}
