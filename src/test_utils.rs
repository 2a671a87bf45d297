//! Shared fixtures for exercising the agent against the in-memory world.
//!
//! Most suites start from the same picture: open buildable ground, a
//! headquarters with a worker beside it, and the three standard structure
//! types registered. The builders here set that up so individual tests only
//! state what they change.

use crate::config::{BuildConfig, PlacementConfig};
use crate::construction::{BuilderPool, SiteLocator};
use crate::economy::ResourceLedger;
use crate::world::memory::{MemoryWorld, Owner};
use crate::world::{ResourceCost, StructureSpec, StructureType, TilePos, UnitClass, UnitId};

/// Plain ground structure, 3x2 footprint, 100 minerals.
pub const SUPPLY: StructureType = StructureType(1);

/// Gas structure: must sit on a geyser. 4x2, 75 minerals.
pub const EXTRACTOR: StructureType = StructureType(2);

/// Creep-bound structure, 2x2 footprint, 150 minerals.
pub const COLONY: StructureType = StructureType(3);

/// A 101x101 fully buildable map with the standard specs registered and
/// nothing on it yet.
pub fn open_ground() -> MemoryWorld {
    let mut world = MemoryWorld::new();
    world.register_ground_spec(SUPPLY, ResourceCost::new(100, 0), 3, 2);
    world.register_spec(
        EXTRACTOR,
        StructureSpec {
            cost: ResourceCost::new(75, 0),
            width: 4,
            height: 2,
            needs_geyser: true,
            needs_creep: false,
        },
    );
    world.register_spec(
        COLONY,
        StructureSpec {
            cost: ResourceCost::new(150, 0),
            width: 2,
            height: 2,
            needs_geyser: false,
            needs_creep: true,
        },
    );
    world.mark_buildable_rect(TilePos::new(0, 0), TilePos::new(100, 100));
    world
}

/// [`open_ground`] plus a headquarters at (50, 50) and a worker beside it.
/// Returns `(world, hq, worker)`.
pub fn base_with_worker() -> (MemoryWorld, UnitId, UnitId) {
    let mut world = open_ground();
    let hq = world.spawn(Owner::Own, UnitClass::Headquarters, TilePos::new(50, 50));
    let worker = world.spawn(Owner::Own, UnitClass::Worker, TilePos::new(51, 50));
    (world, hq, worker)
}

/// A pool targeting [`SUPPLY`] with default placement knobs and an 8-tick
/// refund grace window.
pub fn standard_pool() -> BuilderPool {
    let cfg = BuildConfig {
        supply_structure: SUPPLY,
        refund_grace_ticks: 8,
    };
    BuilderPool::new(cfg, SiteLocator::new(PlacementConfig::default()))
}

/// A ledger observing the given mineral balance and no gas.
pub fn funded_ledger(minerals: i32) -> ResourceLedger {
    let mut ledger = ResourceLedger::new();
    ledger.set_observed_minerals(minerals);
    ledger
}
