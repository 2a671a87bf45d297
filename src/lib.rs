//! Construction-economy core for a real-time-strategy agent.
//!
//! Per simulated tick the agent decides which worker to send to build,
//! where to put the structure, and whether the faction can pay without
//! promising the same minerals twice. Three components cooperate:
//!
//! - [`economy::ResourceLedger`] tracks engine-observed balances alongside
//!   a spendable balance that subtracts optimistic commitments.
//! - [`construction::SiteLocator`] runs a bounded nearest-first search for
//!   a legal building site.
//! - [`construction::BuilderPool`] registers workers, dispatches build
//!   orders and reconciles commitments against what the engine actually
//!   did.
//!
//! The engine stays behind the [`world::WorldView`] and
//! [`world::UnitCommands`] traits; [`world::memory::MemoryWorld`]
//! implements both in process for tests and offline dry runs.
//!
//! The subsystem is single-threaded and tick-synchronous. Within a tick the
//! orchestrator keeps a fixed order: fold observed balances into the
//! ledger, register and prune workers, reconcile pending orders, then
//! dispatch new work. That way affordability is always judged against
//! balances updated this tick, never stale ones:
//!
//! ```
//! use groundwork::config::AgentConfig;
//! use groundwork::construction::{BuilderPool, SiteLocator};
//! use groundwork::economy::ResourceLedger;
//! use groundwork::world::memory::{MemoryWorld, Owner};
//! use groundwork::world::{ResourceCost, StructureType, TilePos, UnitClass, WorldView};
//!
//! let mut cfg = AgentConfig::default();
//! cfg.build.supply_structure = StructureType(109);
//!
//! let mut world = MemoryWorld::new();
//! world.register_ground_spec(cfg.build.supply_structure, ResourceCost::new(100, 0), 3, 2);
//! world.mark_buildable_rect(TilePos::new(0, 0), TilePos::new(80, 80));
//! world.spawn(Owner::Own, UnitClass::Headquarters, TilePos::new(40, 40));
//! world.spawn(Owner::Own, UnitClass::Worker, TilePos::new(41, 40));
//!
//! let mut pool = BuilderPool::new(cfg.build, SiteLocator::new(cfg.placement));
//! let mut ledger = ResourceLedger::new();
//!
//! // One tick of the orchestrator's loop.
//! let now = 120;
//! ledger.set_observed_minerals(150);
//! for unit in world.own_units() {
//!     if world.unit_class(unit).is_some_and(|c| c.is_worker()) {
//!         pool.register_worker(&world, unit);
//!     }
//! }
//! pool.prune_lost_workers(&world, &mut ledger);
//! pool.reconcile_pending(now, &world, &world, &mut ledger);
//! assert!(pool.try_build_supply(now, &world, &world, &mut ledger));
//! pool.assign_idle_to_gather(&world, &world);
//!
//! assert_eq!(ledger.spendable_minerals(), 50);
//! assert_eq!(pool.pending_count(), 1);
//! ```

pub mod config;
pub mod constants;
pub mod construction;
pub mod economy;
pub mod world;

#[cfg(test)]
pub mod test_utils;
