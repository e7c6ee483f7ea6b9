//! Elixir (resource) pool for the controller's side.

use lanewarden_core::constants::{ELIXIR_MAX, ELIXIR_REGEN_PER_SEC};

#[derive(Debug, Clone, Copy)]
pub struct ElixirPool {
    amount: f64,
    max: f64,
    regen_per_sec: f64,
}

impl ElixirPool {
    pub fn new(starting: f64) -> Self {
        Self {
            amount: starting.clamp(0.0, ELIXIR_MAX),
            max: ELIXIR_MAX,
            regen_per_sec: ELIXIR_REGEN_PER_SEC,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Regenerate for `dt` seconds, capped at the maximum.
    pub fn regenerate(&mut self, dt: f64) {
        self.amount = (self.amount + self.regen_per_sec * dt).min(self.max);
    }

    /// Spend `cost` if affordable. Returns whether the spend happened.
    pub fn try_spend(&mut self, cost: f64) -> bool {
        if cost > self.amount {
            return false;
        }
        self.amount -= cost;
        true
    }
}
