//! Optimistic commitment accounting over engine-reported balances.
//!
//! The engine is the only authority on how many minerals and how much gas
//! the faction actually owns; the agent merely observes those balances once
//! per tick. On top of the observed numbers the ledger keeps a *spendable*
//! balance per axis, which subtracts every commitment made this side of the
//! engine that the engine has not yet charged for. Planning decisions read
//! the spendable balances so two build orders in the same tick window can
//! never promise the same minerals twice.

use tracing::debug;

use crate::world::ResourceCost;

/// The spend/refund surface components charge against.
///
/// Implemented by [`ResourceLedger`]; tests may substitute their own
/// recording accounts.
pub trait ResourceAccount {
    /// Whether the spendable balances cover `cost` on both axes.
    fn can_afford(&self, cost: ResourceCost) -> bool;

    /// Subtract `cost` from the spendable balances. Callers check
    /// [`can_afford`](ResourceAccount::can_afford) first; the account
    /// itself does not gate.
    fn spend(&mut self, cost: ResourceCost);

    /// Add `cost` back to the spendable balances, cancelling an earlier
    /// [`spend`](ResourceAccount::spend) for a commitment that either fell
    /// through or has since been charged by the engine.
    fn refund(&mut self, cost: ResourceCost);
}

/// Point-in-time copy of all four ledger balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub observed_minerals: i32,
    pub observed_gas: i32,
    pub spendable_minerals: i32,
    pub spendable_gas: i32,
}

/// Per-axis pair of engine-observed and locally spendable balances.
///
/// The invariant between them: `spendable == observed - outstanding`, where
/// outstanding is the sum of costs spent but not yet refunded. Observation
/// updates apply the engine's delta to both sides, which keeps the invariant
/// without the ledger ever knowing *which* commitments the engine charged.
/// A spendable balance may sit negative for a few ticks when the engine's
/// charge lands before the matching refund; the two meet again once the
/// commitment is reconciled.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    observed_minerals: i32,
    observed_gas: i32,
    spendable_minerals: i32,
    spendable_gas: i32,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in the engine's reported mineral balance. The income/expense
    /// delta flows into the spendable side too, so outstanding commitments
    /// stay subtracted.
    pub fn set_observed_minerals(&mut self, value: i32) {
        let delta = value - self.observed_minerals;
        self.observed_minerals = value;
        self.spendable_minerals += delta;
    }

    /// Gas twin of [`set_observed_minerals`](Self::set_observed_minerals).
    pub fn set_observed_gas(&mut self, value: i32) {
        let delta = value - self.observed_gas;
        self.observed_gas = value;
        self.spendable_gas += delta;
    }

    pub fn observed_minerals(&self) -> i32 {
        self.observed_minerals
    }

    pub fn observed_gas(&self) -> i32 {
        self.observed_gas
    }

    pub fn spendable_minerals(&self) -> i32 {
        self.spendable_minerals
    }

    pub fn spendable_gas(&self) -> i32 {
        self.spendable_gas
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            observed_minerals: self.observed_minerals,
            observed_gas: self.observed_gas,
            spendable_minerals: self.spendable_minerals,
            spendable_gas: self.spendable_gas,
        }
    }
}

impl ResourceAccount for ResourceLedger {
    fn can_afford(&self, cost: ResourceCost) -> bool {
        self.spendable_minerals >= cost.minerals && self.spendable_gas >= cost.gas
    }

    fn spend(&mut self, cost: ResourceCost) {
        self.spendable_minerals -= cost.minerals;
        self.spendable_gas -= cost.gas;
        debug!(
            "Committed {}m {}g (spendable now {}m {}g)",
            cost.minerals, cost.gas, self.spendable_minerals, self.spendable_gas
        );
    }

    fn refund(&mut self, cost: ResourceCost) {
        self.spendable_minerals += cost.minerals;
        self.spendable_gas += cost.gas;
        debug!(
            "Refunded {}m {}g (spendable now {}m {}g)",
            cost.minerals, cost.gas, self.spendable_minerals, self.spendable_gas
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn observation_delta_flows_into_spendable() {
        let mut ledger = ResourceLedger::new();
        ledger.set_observed_minerals(150);
        ledger.set_observed_gas(25);
        assert_eq!(ledger.spendable_minerals(), 150);
        assert_eq!(ledger.spendable_gas(), 25);

        // Income arrives while a 100-mineral commitment is outstanding.
        ledger.spend(ResourceCost::new(100, 0));
        assert_eq!(ledger.spendable_minerals(), 50);
        ledger.set_observed_minerals(200);
        assert_eq!(ledger.observed_minerals(), 200);
        assert_eq!(ledger.spendable_minerals(), 100);
    }

    #[test]
    fn engine_charge_then_refund_restores_balance() {
        let mut ledger = ResourceLedger::new();
        ledger.set_observed_minerals(150);
        ledger.spend(ResourceCost::new(100, 0));
        assert_eq!(ledger.spendable_minerals(), 50);

        // The engine charges for the started build: observed drops by the
        // same 100, and spendable goes transiently negative.
        ledger.set_observed_minerals(50);
        assert_eq!(ledger.spendable_minerals(), -50);

        // Reconciliation refunds the now-charged commitment.
        ledger.refund(ResourceCost::new(100, 0));
        assert_eq!(ledger.spendable_minerals(), 50);
        assert_eq!(ledger.spendable_minerals(), ledger.observed_minerals());
    }

    #[test]
    fn can_afford_checks_both_axes() {
        let mut ledger = ResourceLedger::new();
        ledger.set_observed_minerals(100);
        ledger.set_observed_gas(50);

        assert!(ledger.can_afford(ResourceCost::new(100, 50)));
        assert!(!ledger.can_afford(ResourceCost::new(101, 0)));
        assert!(!ledger.can_afford(ResourceCost::new(0, 51)));
        assert!(ledger.can_afford(ResourceCost::new(0, 0)));
    }

    #[test]
    fn negative_spendable_fails_affordability_even_with_observed_funds() {
        let mut ledger = ResourceLedger::new();
        ledger.set_observed_minerals(100);
        ledger.spend(ResourceCost::new(100, 0));
        ledger.spend(ResourceCost::new(50, 0));
        assert_eq!(ledger.observed_minerals(), 100);
        assert!(!ledger.can_afford(ResourceCost::new(1, 0)));
    }

    #[test]
    fn spendable_tracks_observed_minus_outstanding() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ledger = ResourceLedger::new();
        let mut observed = 0i32;
        let mut outstanding = 0i32;

        for _ in 0..500 {
            match rng.random_range(0..3) {
                0 => {
                    observed = rng.random_range(0..2000);
                    ledger.set_observed_minerals(observed);
                }
                1 => {
                    let cost = rng.random_range(0..300);
                    ledger.spend(ResourceCost::new(cost, 0));
                    outstanding += cost;
                }
                _ => {
                    if outstanding > 0 {
                        let back = rng.random_range(0..=outstanding);
                        ledger.refund(ResourceCost::new(back, 0));
                        outstanding -= back;
                    }
                }
            }
            assert_eq!(ledger.spendable_minerals(), observed - outstanding);
        }
    }
}
