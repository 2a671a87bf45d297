//! Core identifier and geometry types shared across the world boundary.
//!
//! Engine entities are never owned or copied by the agent; the agent keeps
//! opaque ids and asks the world interfaces about them each tick.

use serde::{Deserialize, Serialize};

/// Simulation frame counter, supplied by the orchestrator once per tick.
pub type Tick = u64;

/// A cell in the engine's build grid. Coarser than raw positional units;
/// all proximity checks in this crate are Chebyshev distances over tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: max of the per-axis absolute differences.
    pub fn chebyshev(self, other: TilePos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Opaque handle to a unit instance owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u64);

/// Opaque engine identifier of a buildable structure type. Static metadata
/// for a type is looked up through [`WorldView::structure_spec`], never
/// derived locally.
///
/// [`WorldView::structure_spec`]: crate::world::WorldView::structure_spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureType(pub u16);

/// How the engine classifies a unit instance, as far as this agent cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Harvest- and construction-capable unit.
    Worker,
    /// The faction's main production structure.
    Headquarters,
    /// Any other static structure.
    OtherStructure,
    /// Mobile non-worker unit (combat, transport, ...).
    Mobile,
    /// Neutral mineral patch.
    MineralField,
    /// Neutral vespene geyser.
    VespeneGeyser,
}

impl UnitClass {
    /// The worker-capability predicate.
    pub fn is_worker(self) -> bool {
        matches!(self, UnitClass::Worker)
    }

    /// The structure-capability predicate.
    pub fn is_structure(self) -> bool {
        matches!(self, UnitClass::Headquarters | UnitClass::OtherStructure)
    }
}

/// Mineral/gas price of a structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceCost {
    pub minerals: i32,
    pub gas: i32,
}

impl ResourceCost {
    pub const fn new(minerals: i32, gas: i32) -> Self {
        Self { minerals, gas }
    }
}

/// Static engine metadata for a structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureSpec {
    pub cost: ResourceCost,
    /// Footprint in tiles.
    pub width: i32,
    pub height: i32,
    /// Gas structures must sit exactly atop a geyser.
    pub needs_geyser: bool,
    /// Whether every footprint tile must report creep.
    pub needs_creep: bool,
}
