//! The boundary between the agent and the game engine.
//!
//! Everything the construction economy knows about the running game comes
//! in through [`WorldView`], and every effect it has on the game goes out
//! through [`UnitCommands`]. Production code adapts these onto the real
//! engine bindings; tests and the bundled [`memory`] fake implement them
//! over plain maps.

pub mod memory;
pub mod types;

pub use types::{ResourceCost, StructureSpec, StructureType, Tick, TilePos, UnitClass, UnitId};

/// Read-only snapshot queries against the engine's current frame.
///
/// Implementations answer for the *current* tick only; the agent never
/// caches entity state across ticks, it re-queries. A `None` from the
/// per-unit queries means the unit is not observable this frame (died,
/// left vision, or never existed).
pub trait WorldView {
    /// Units controlled by this agent's faction.
    fn own_units(&self) -> Vec<UnitId>;

    /// Neutral units: mineral fields, geysers and other map-owned entities.
    fn neutral_units(&self) -> Vec<UnitId>;

    /// Every observable unit regardless of owner.
    fn all_units(&self) -> Vec<UnitId>;

    fn unit_class(&self, unit: UnitId) -> Option<UnitClass>;

    fn unit_tile(&self, unit: UnitId) -> Option<TilePos>;

    /// Static metadata for a structure type. Structure types are engine
    /// constants, so this lookup is total for any id the engine handed out.
    fn structure_spec(&self, kind: StructureType) -> StructureSpec;

    /// The engine's own buildability verdict for anchoring `kind` at `tile`
    /// with the given worker. Terrain, fog and reachability live behind
    /// this call; the agent layers its own spacing rules on top.
    fn can_build_at(&self, tile: TilePos, kind: StructureType, builder: UnitId) -> bool;

    /// Whether the tile currently carries creep.
    fn has_creep(&self, tile: TilePos) -> bool;
}

/// Commands and live activity flags for individual units.
///
/// Ordering methods return whether the engine *accepted* the command.
/// Acceptance is not completion: a worker ordered to build reports
/// [`is_constructing`](UnitCommands::is_constructing) only once it actually
/// starts, typically a few ticks later.
pub trait UnitCommands {
    /// Order `worker` to construct `kind` anchored at `site`.
    fn order_build(&self, worker: UnitId, kind: StructureType, site: TilePos) -> bool;

    /// Order `worker` to harvest from the given resource unit.
    fn order_gather(&self, worker: UnitId, resource: UnitId) -> bool;

    fn is_constructing(&self, worker: UnitId) -> bool;

    fn is_gathering(&self, worker: UnitId) -> bool;

    /// The unit the worker is currently acting on, when the engine exposes
    /// one. Freshly ordered workers often report `None` for a few ticks.
    fn current_target(&self, worker: UnitId) -> Option<UnitId>;
}
