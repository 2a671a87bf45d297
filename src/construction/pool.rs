//! Worker registration, build dispatch and commitment reconciliation.
//!
//! The pool owns every [`Builder`] the agent knows about and is the only
//! component that talks to the resource account: it spends when the engine
//! accepts a build order and refunds when the matching commitment provably
//! fell through. Everything else it learns fresh from the world each call.

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::construction::builder::Builder;
use crate::construction::placement::SiteLocator;
use crate::economy::ResourceAccount;
use crate::world::{Tick, UnitClass, UnitCommands, UnitId, WorldView};

/// The set of registered builders plus the build/refund policy knobs.
pub struct BuilderPool {
    cfg: BuildConfig,
    locator: SiteLocator,
    builders: Vec<Builder>,
    /// Structures reported as build targets so far. Kept for planned base
    /// expansion logic; nothing reads it yet.
    placed_supply: Vec<UnitId>,
}

impl BuilderPool {
    pub fn new(cfg: BuildConfig, locator: SiteLocator) -> Self {
        Self {
            cfg,
            locator,
            builders: Vec::new(),
            placed_supply: Vec::new(),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.builders.len()
    }

    /// Builders currently holding an unconfirmed build order.
    pub fn pending_count(&self) -> usize {
        self.builders.iter().filter(|b| b.pending().is_some()).count()
    }

    pub fn builders(&self) -> &[Builder] {
        &self.builders
    }

    pub fn placed_supply(&self) -> &[UnitId] {
        &self.placed_supply
    }

    /// Wrap a newly observed worker in a [`Builder`] bound to the faction's
    /// headquarters. Returns false, without effect, when the worker is
    /// already registered, no longer observed, or no headquarters exists
    /// yet.
    ///
    /// # Panics
    ///
    /// Panics if the unit is observable but not a worker; feeding combat or
    /// structure units in is a wiring bug upstream.
    pub fn register_worker(&mut self, world: &impl WorldView, unit: UnitId) -> bool {
        let Some(class) = world.unit_class(unit) else {
            return false;
        };
        assert!(
            class.is_worker(),
            "only construction-capable workers can register, got {class:?} for {unit:?}"
        );
        if self.builders.iter().any(|b| b.worker() == unit) {
            return false;
        }
        let Some(home) = self.find_headquarters(world) else {
            debug!("No headquarters visible, worker {:?} not registered", unit);
            return false;
        };
        self.builders.push(Builder::new(world, unit, home));
        true
    }

    /// Try to commission one supply structure this tick.
    ///
    /// Picks the first registered builder that is alive, not constructing
    /// and not already carrying a pending order (re-tasking a pending
    /// builder would leak its reservation). The attempt is gated on the
    /// account *before* any site search or command, so dispatch never runs
    /// against funds already promised elsewhere. On engine acceptance the
    /// cost is spent and the builder holds the order as pending.
    ///
    /// Returns the engine's acceptance verdict; every failure short of that
    /// is `false` with no side effects.
    pub fn try_build_supply(
        &mut self,
        now: Tick,
        world: &impl WorldView,
        cmds: &impl UnitCommands,
        account: &mut impl ResourceAccount,
    ) -> bool {
        let Some(slot) = self.builders.iter().position(|b| {
            b.pending().is_none()
                && world.unit_class(b.worker()).is_some()
                && !cmds.is_constructing(b.worker())
        }) else {
            return false;
        };

        let kind = self.cfg.supply_structure;
        let cost = world.structure_spec(kind).cost;
        if !account.can_afford(cost) {
            debug!("Cannot afford {:?} ({}m {}g)", kind, cost.minerals, cost.gas);
            return false;
        }

        let Some(site) = self
            .locator
            .find_build_site(world, kind, &self.builders[slot])
        else {
            return false;
        };

        let worker = self.builders[slot].worker();
        if !cmds.order_build(worker, kind, site) {
            debug!("Engine rejected build of {:?} at {:?}", kind, site);
            return false;
        }

        account.spend(cost);
        self.builders[slot].begin_task(kind, now);
        if let Some(target) = cmds.current_target(worker) {
            self.placed_supply.push(target);
        }
        info!(
            "Supply structure {:?} ordered at {:?} by worker {:?}",
            kind, site, worker
        );
        true
    }

    /// Put every fully idle builder back on the nearest mineral patch.
    /// Returns how many gather orders the engine accepted.
    pub fn assign_idle_to_gather(
        &self,
        world: &impl WorldView,
        cmds: &impl UnitCommands,
    ) -> usize {
        let mut assigned = 0;
        for builder in &self.builders {
            if builder.pending().is_some() {
                continue;
            }
            let worker = builder.worker();
            if world.unit_class(worker).is_none()
                || cmds.is_gathering(worker)
                || cmds.is_constructing(worker)
            {
                continue;
            }
            let Some(mineral) = self.locator.find_mineral_for(world, builder) else {
                continue;
            };
            if cmds.order_gather(worker, mineral) {
                assigned += 1;
            }
        }
        assigned
    }

    /// Settle pending orders against what the engine actually did.
    ///
    /// A builder whose worker reports constructing keeps its reservation:
    /// the engine's real charge will flow through the observed balances and
    /// the refund below cancels the double count the next time the worker
    /// shows up not constructing. A worker *not* constructing once the
    /// grace window has passed means the order fell through (or has since
    /// completed); either way the commitment is over, so the cost is
    /// refunded and the pending order cleared. Inside the window the order
    /// counts as still in flight and is left alone.
    ///
    /// Returns the number of refunds issued.
    pub fn reconcile_pending(
        &mut self,
        now: Tick,
        world: &impl WorldView,
        cmds: &impl UnitCommands,
        account: &mut impl ResourceAccount,
    ) -> usize {
        let grace = self.cfg.refund_grace_ticks;
        let mut refunded = 0;
        for builder in &mut self.builders {
            let Some(task) = builder.pending() else {
                continue;
            };
            let worker = builder.worker();
            // Vanished workers are prune_lost_workers' business.
            if world.unit_class(worker).is_none() {
                continue;
            }
            if cmds.is_constructing(worker) {
                continue;
            }
            if now.saturating_sub(task.issued_at) < grace {
                continue;
            }
            let cost = world.structure_spec(task.kind).cost;
            account.refund(cost);
            builder.clear_task();
            refunded += 1;
            info!(
                "Refunded {:?} for worker {:?}: construction never started",
                task.kind, worker
            );
        }
        refunded
    }

    /// Drop builders whose worker the world no longer reports, refunding
    /// any commitment they still held (it can never materialize without
    /// its worker). Returns the number of builders dropped.
    pub fn prune_lost_workers(
        &mut self,
        world: &impl WorldView,
        account: &mut impl ResourceAccount,
    ) -> usize {
        let before = self.builders.len();
        self.builders.retain(|builder| {
            if world.unit_class(builder.worker()).is_some() {
                return true;
            }
            if let Some(task) = builder.pending() {
                let cost = world.structure_spec(task.kind).cost;
                account.refund(cost);
                info!(
                    "Worker {:?} lost with {:?} pending, refunding",
                    builder.worker(),
                    task.kind
                );
            } else {
                debug!("Worker {:?} no longer observed, dropping", builder.worker());
            }
            false
        });
        before - self.builders.len()
    }

    fn find_headquarters(&self, world: &impl WorldView) -> Option<UnitId> {
        world
            .own_units()
            .into_iter()
            .find(|&u| world.unit_class(u) == Some(UnitClass::Headquarters))
    }
}
