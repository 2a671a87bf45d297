//! A worker bound to a home structure, plus its outstanding build order.

use crate::world::{StructureType, Tick, UnitId, WorldView};

/// A build order the engine accepted but has not yet confirmed started.
///
/// The matching resource commitment stays charged for exactly as long as
/// the task is held here; whoever clears the task refunds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBuild {
    pub kind: StructureType,
    /// Tick the order was issued, for the reconciliation grace window.
    pub issued_at: Tick,
}

/// One construction-capable worker anchored to a home structure.
///
/// The builder holds ids only; liveness and position are re-queried through
/// [`WorldView`] every time they matter.
#[derive(Debug, Clone)]
pub struct Builder {
    worker: UnitId,
    home: UnitId,
    pending: Option<PendingBuild>,
}

impl Builder {
    /// # Panics
    ///
    /// Panics if `worker` does not report a worker class or `home` does not
    /// report a structure class. Handing a builder the wrong units is a
    /// wiring bug in the caller, not a game state to recover from.
    pub fn new(world: &impl WorldView, worker: UnitId, home: UnitId) -> Self {
        let worker_class = world.unit_class(worker);
        assert!(
            worker_class.is_some_and(|c| c.is_worker()),
            "builder requires a construction-capable worker, got {worker_class:?} for {worker:?}"
        );
        let home_class = world.unit_class(home);
        assert!(
            home_class.is_some_and(|c| c.is_structure()),
            "builder home must be a structure, got {home_class:?} for {home:?}"
        );
        Self {
            worker,
            home,
            pending: None,
        }
    }

    pub fn worker(&self) -> UnitId {
        self.worker
    }

    pub fn home(&self) -> UnitId {
        self.home
    }

    pub fn pending(&self) -> Option<PendingBuild> {
        self.pending
    }

    /// Record a freshly issued build order.
    ///
    /// # Panics
    ///
    /// Panics if a task is already held; dispatch must never double-book a
    /// builder, or its commitment would leak.
    pub(crate) fn begin_task(&mut self, kind: StructureType, now: Tick) {
        assert!(
            self.pending.is_none(),
            "builder {:?} already holds {:?}",
            self.worker,
            self.pending
        );
        self.pending = Some(PendingBuild {
            kind,
            issued_at: now,
        });
    }

    pub(crate) fn clear_task(&mut self) -> Option<PendingBuild> {
        self.pending.take()
    }

    /// Re-anchor the builder to a different home structure.
    ///
    /// Validates the candidate like [`Builder::new`] does, then declines:
    /// mid-life re-homing is not supported yet and callers must treat a
    /// `false` as "keep the old home". Kept so the call sites for base
    /// expansion already exist when it lands.
    ///
    /// # Panics
    ///
    /// Panics if `new_home` does not report a structure class.
    pub fn migrate_home(&mut self, world: &impl WorldView, new_home: UnitId) -> bool {
        let class = world.unit_class(new_home);
        assert!(
            class.is_some_and(|c| c.is_structure()),
            "builder home must be a structure, got {class:?} for {new_home:?}"
        );
        false
    }
}
