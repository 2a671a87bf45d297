//! An in-memory engine double.
//!
//! [`MemoryWorld`] implements both [`WorldView`] and [`UnitCommands`] over
//! plain collections. The crate's own tests and benches run against it, and
//! it doubles as a dry-run harness for embedders who want to exercise the
//! agent without a live engine attached.
//!
//! The double deliberately models command latency: an accepted build order
//! is only logged, it does not flip the worker's `constructing` flag. Tests
//! advance unit state explicitly, the way a real engine would between ticks.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use super::{
    ResourceCost, StructureSpec, StructureType, TilePos, UnitClass, UnitCommands, UnitId, WorldView,
};

/// Who a [`MemoryWorld`] unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Own,
    Neutral,
    Enemy,
}

#[derive(Debug, Clone)]
struct MemoryUnit {
    owner: Owner,
    class: UnitClass,
    tile: TilePos,
    constructing: bool,
    gathering: bool,
    target: Option<UnitId>,
}

/// A command the double accepted, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuedCommand {
    Build {
        worker: UnitId,
        kind: StructureType,
        site: TilePos,
    },
    Gather {
        worker: UnitId,
        resource: UnitId,
    },
}

/// Deterministic fake world: units enumerate in spawn order, buildability
/// and creep are explicit tile sets, and accepted commands are logged for
/// inspection instead of simulated.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    units: BTreeMap<UnitId, MemoryUnit>,
    specs: BTreeMap<StructureType, StructureSpec>,
    buildable: HashSet<TilePos>,
    creep: HashSet<TilePos>,
    next_id: u64,
    reject_build: bool,
    reject_gather: bool,
    commands: RefCell<Vec<IssuedCommand>>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register static metadata for a structure type. Every type queried
    /// through [`WorldView::structure_spec`] must be registered first.
    pub fn register_spec(&mut self, kind: StructureType, spec: StructureSpec) {
        self.specs.insert(kind, spec);
    }

    /// Convenience for ground structures: cost plus footprint, no geyser,
    /// no creep requirement.
    pub fn register_ground_spec(
        &mut self,
        kind: StructureType,
        cost: ResourceCost,
        width: i32,
        height: i32,
    ) {
        self.register_spec(
            kind,
            StructureSpec {
                cost,
                width,
                height,
                needs_geyser: false,
                needs_creep: false,
            },
        );
    }

    /// Add a unit and return its id. Ids are handed out in ascending order,
    /// so enumeration order equals spawn order.
    pub fn spawn(&mut self, owner: Owner, class: UnitClass, tile: TilePos) -> UnitId {
        self.next_id += 1;
        let id = UnitId(self.next_id);
        self.units.insert(
            id,
            MemoryUnit {
                owner,
                class,
                tile,
                constructing: false,
                gathering: false,
                target: None,
            },
        );
        id
    }

    /// Remove a unit, as if it died or fell out of vision.
    pub fn despawn(&mut self, unit: UnitId) {
        self.units.remove(&unit);
    }

    pub fn move_unit(&mut self, unit: UnitId, tile: TilePos) {
        if let Some(u) = self.units.get_mut(&unit) {
            u.tile = tile;
        }
    }

    pub fn set_constructing(&mut self, unit: UnitId, on: bool) {
        if let Some(u) = self.units.get_mut(&unit) {
            u.constructing = on;
        }
    }

    pub fn set_gathering(&mut self, unit: UnitId, on: bool) {
        if let Some(u) = self.units.get_mut(&unit) {
            u.gathering = on;
        }
    }

    pub fn set_target(&mut self, unit: UnitId, target: Option<UnitId>) {
        if let Some(u) = self.units.get_mut(&unit) {
            u.target = target;
        }
    }

    /// Mark a single tile as engine-buildable.
    pub fn mark_buildable(&mut self, tile: TilePos) {
        self.buildable.insert(tile);
    }

    /// Mark the inclusive rectangle from `min` to `max` as engine-buildable.
    pub fn mark_buildable_rect(&mut self, min: TilePos, max: TilePos) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.buildable.insert(TilePos::new(x, y));
            }
        }
    }

    pub fn clear_buildable(&mut self, tile: TilePos) {
        self.buildable.remove(&tile);
    }

    /// Lay creep on the inclusive rectangle from `min` to `max`.
    pub fn lay_creep_rect(&mut self, min: TilePos, max: TilePos) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.creep.insert(TilePos::new(x, y));
            }
        }
    }

    pub fn clear_creep(&mut self, tile: TilePos) {
        self.creep.remove(&tile);
    }

    /// Make the double refuse build orders, as a saturated engine would.
    pub fn reject_build_orders(&mut self, reject: bool) {
        self.reject_build = reject;
    }

    pub fn reject_gather_orders(&mut self, reject: bool) {
        self.reject_gather = reject;
    }

    /// Drain and return every command accepted since the last call.
    pub fn take_commands(&self) -> Vec<IssuedCommand> {
        self.commands.take()
    }

    fn units_where(&self, pred: impl Fn(&MemoryUnit) -> bool) -> Vec<UnitId> {
        self.units
            .iter()
            .filter(|(_, u)| pred(u))
            .map(|(&id, _)| id)
            .collect()
    }
}

impl WorldView for MemoryWorld {
    fn own_units(&self) -> Vec<UnitId> {
        self.units_where(|u| u.owner == Owner::Own)
    }

    fn neutral_units(&self) -> Vec<UnitId> {
        self.units_where(|u| u.owner == Owner::Neutral)
    }

    fn all_units(&self) -> Vec<UnitId> {
        self.units.keys().copied().collect()
    }

    fn unit_class(&self, unit: UnitId) -> Option<UnitClass> {
        self.units.get(&unit).map(|u| u.class)
    }

    fn unit_tile(&self, unit: UnitId) -> Option<TilePos> {
        self.units.get(&unit).map(|u| u.tile)
    }

    /// # Panics
    ///
    /// Panics if `kind` was never passed to [`MemoryWorld::register_spec`];
    /// that is a fixture mistake, not a runtime condition.
    fn structure_spec(&self, kind: StructureType) -> StructureSpec {
        match self.specs.get(&kind) {
            Some(spec) => *spec,
            None => panic!("no spec registered for {kind:?}"),
        }
    }

    fn can_build_at(&self, tile: TilePos, _kind: StructureType, _builder: UnitId) -> bool {
        self.buildable.contains(&tile)
    }

    fn has_creep(&self, tile: TilePos) -> bool {
        self.creep.contains(&tile)
    }
}

impl UnitCommands for MemoryWorld {
    fn order_build(&self, worker: UnitId, kind: StructureType, site: TilePos) -> bool {
        if self.reject_build {
            return false;
        }
        self.commands
            .borrow_mut()
            .push(IssuedCommand::Build { worker, kind, site });
        true
    }

    fn order_gather(&self, worker: UnitId, resource: UnitId) -> bool {
        if self.reject_gather {
            return false;
        }
        self.commands
            .borrow_mut()
            .push(IssuedCommand::Gather { worker, resource });
        true
    }

    fn is_constructing(&self, worker: UnitId) -> bool {
        self.units.get(&worker).is_some_and(|u| u.constructing)
    }

    fn is_gathering(&self, worker: UnitId) -> bool {
        self.units.get(&worker).is_some_and(|u| u.gathering)
    }

    fn current_target(&self, worker: UnitId) -> Option<UnitId> {
        self.units.get(&worker).and_then(|u| u.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_order_is_enumeration_order() {
        let mut world = MemoryWorld::new();
        let a = world.spawn(Owner::Own, UnitClass::Worker, TilePos::new(0, 0));
        let b = world.spawn(Owner::Neutral, UnitClass::MineralField, TilePos::new(5, 0));
        let c = world.spawn(Owner::Own, UnitClass::Headquarters, TilePos::new(9, 9));
        assert_eq!(world.all_units(), vec![a, b, c]);
        assert_eq!(world.own_units(), vec![a, c]);
        assert_eq!(world.neutral_units(), vec![b]);
    }

    #[test]
    fn despawned_units_stop_answering() {
        let mut world = MemoryWorld::new();
        let a = world.spawn(Owner::Own, UnitClass::Worker, TilePos::new(0, 0));
        assert_eq!(world.unit_class(a), Some(UnitClass::Worker));
        world.despawn(a);
        assert_eq!(world.unit_class(a), None);
        assert_eq!(world.unit_tile(a), None);
        assert!(!world.is_constructing(a));
    }

    #[test]
    fn command_log_records_accepted_orders_only() {
        let mut world = MemoryWorld::new();
        let w = world.spawn(Owner::Own, UnitClass::Worker, TilePos::new(0, 0));
        let m = world.spawn(Owner::Neutral, UnitClass::MineralField, TilePos::new(3, 0));

        assert!(world.order_gather(w, m));
        world.reject_gather_orders(true);
        assert!(!world.order_gather(w, m));

        assert_eq!(
            world.take_commands(),
            vec![IssuedCommand::Gather { worker: w, resource: m }]
        );
        assert!(world.take_commands().is_empty());
    }

    #[test]
    fn buildable_and_creep_are_explicit_tile_sets() {
        let mut world = MemoryWorld::new();
        world.mark_buildable_rect(TilePos::new(0, 0), TilePos::new(2, 2));
        world.clear_buildable(TilePos::new(1, 1));
        world.lay_creep_rect(TilePos::new(0, 0), TilePos::new(1, 1));

        let kind = StructureType(7);
        let builder = UnitId(1);
        assert!(world.can_build_at(TilePos::new(0, 2), kind, builder));
        assert!(!world.can_build_at(TilePos::new(1, 1), kind, builder));
        assert!(!world.can_build_at(TilePos::new(3, 0), kind, builder));
        assert!(world.has_creep(TilePos::new(1, 1)));
        assert!(!world.has_creep(TilePos::new(2, 2)));
    }
}
