//! Site selection for new structures.
//!
//! The locator is a pure function of the current frame: it owns no state
//! beyond its tuning knobs and never remembers partial searches across
//! calls. Geometry here is all Chebyshev distance over build-grid tiles.

use tracing::debug;

use crate::config::PlacementConfig;
use crate::construction::builder::Builder;
use crate::world::{StructureSpec, StructureType, TilePos, UnitClass, UnitId, WorldView};

/// Bounded nearest-first search for legal building sites.
pub struct SiteLocator {
    cfg: PlacementConfig,
}

impl SiteLocator {
    pub fn new(cfg: PlacementConfig) -> Self {
        Self { cfg }
    }

    /// Find a tile where `kind` can legally be anchored for this builder,
    /// or `None` when nothing inside the search cap qualifies.
    ///
    /// Gas structures are special-cased: they must sit exactly atop a
    /// geyser, so the answer is a geyser tile near the builder's home
    /// rather than a searched one.
    ///
    /// The general search expands square rings around the home structure's
    /// tile, half-width starting at `start_radius` and growing by
    /// `radius_step` until it would reach `radius_cap`. Candidates are
    /// visited nearest ring first and in `(x, y)`-lexicographic order
    /// within a ring, so the result is deterministic for a given frame:
    /// nearer wins, then the lexicographically smaller coordinate.
    pub fn find_build_site(
        &self,
        world: &impl WorldView,
        kind: StructureType,
        builder: &Builder,
    ) -> Option<TilePos> {
        let home = world.unit_tile(builder.home())?;
        let spec = world.structure_spec(kind);

        if spec.needs_geyser {
            return self.claimable_geyser(world, home);
        }

        // One obstacle sweep per search, not one per candidate. The frame
        // does not change mid-call, so positions can be collected up front.
        let obstacles: Vec<TilePos> = world
            .all_units()
            .into_iter()
            .filter(|&u| u != builder.worker())
            .filter_map(|u| world.unit_tile(u))
            .collect();

        let mut radius = self.cfg.start_radius;
        let mut scanned = -1;
        while radius < self.cfg.radius_cap {
            let found = self.scan_ring(
                world,
                kind,
                &spec,
                builder.worker(),
                home,
                radius,
                scanned,
                &obstacles,
            );
            if let Some(tile) = found {
                return Some(tile);
            }
            scanned = radius;
            radius += self.cfg.radius_step;
        }
        debug!(
            "No site for {:?} within radius {} of {:?}",
            kind, self.cfg.radius_cap, home
        );
        None
    }

    /// Visit every tile with `scanned < chebyshev(tile, home) <= radius`,
    /// in the order a full-square rescan would reach them, and return the
    /// first legal candidate. `scanned = -1` means nothing is excluded.
    #[allow(clippy::too_many_arguments)]
    fn scan_ring(
        &self,
        world: &impl WorldView,
        kind: StructureType,
        spec: &StructureSpec,
        worker: UnitId,
        home: TilePos,
        radius: i32,
        scanned: i32,
        obstacles: &[TilePos],
    ) -> Option<TilePos> {
        for x in (home.x - radius)..=(home.x + radius) {
            if (x - home.x).abs() > scanned {
                // Whole column is new ground.
                for y in (home.y - radius)..=(home.y + radius) {
                    let tile = TilePos::new(x, y);
                    if self.candidate_ok(world, kind, spec, worker, tile, obstacles) {
                        return Some(tile);
                    }
                }
            } else {
                // Column was partly covered by the previous ring; only the
                // two fresh segments above and below it remain.
                for y in (home.y - radius)..(home.y - scanned) {
                    let tile = TilePos::new(x, y);
                    if self.candidate_ok(world, kind, spec, worker, tile, obstacles) {
                        return Some(tile);
                    }
                }
                for y in (home.y + scanned + 1)..=(home.y + radius) {
                    let tile = TilePos::new(x, y);
                    if self.candidate_ok(world, kind, spec, worker, tile, obstacles) {
                        return Some(tile);
                    }
                }
            }
        }
        None
    }

    fn candidate_ok(
        &self,
        world: &impl WorldView,
        kind: StructureType,
        spec: &StructureSpec,
        worker: UnitId,
        tile: TilePos,
        obstacles: &[TilePos],
    ) -> bool {
        // The engine owns terrain, fog and tech legality.
        if !world.can_build_at(tile, kind, worker) {
            return false;
        }
        // Manual spacing pass: the engine's check does not reliably exclude
        // units that have not vacated a tile yet.
        if obstacles
            .iter()
            .any(|&o| tile.chebyshev(o) < self.cfg.collision_margin)
        {
            return false;
        }
        if spec.needs_creep && !self.footprint_on_creep(world, spec, tile) {
            return false;
        }
        true
    }

    fn footprint_on_creep(
        &self,
        world: &impl WorldView,
        spec: &StructureSpec,
        anchor: TilePos,
    ) -> bool {
        for dx in 0..spec.width {
            for dy in 0..spec.height {
                if !world.has_creep(TilePos::new(anchor.x + dx, anchor.y + dy)) {
                    return false;
                }
            }
        }
        true
    }

    /// First geyser (in neutral enumeration order) strictly inside the scan
    /// range of `home`.
    fn claimable_geyser(&self, world: &impl WorldView, home: TilePos) -> Option<TilePos> {
        for unit in world.neutral_units() {
            if world.unit_class(unit) != Some(UnitClass::VespeneGeyser) {
                continue;
            }
            if let Some(tile) = world.unit_tile(unit)
                && tile.chebyshev(home) < self.cfg.geyser_scan_range
            {
                return Some(tile);
            }
        }
        None
    }

    /// Nearest mineral patch to the builder's worker, by Chebyshev
    /// distance. First strict minimum wins, so ties fall to whichever
    /// patch the world enumerates first.
    pub fn find_mineral_for(&self, world: &impl WorldView, builder: &Builder) -> Option<UnitId> {
        let worker_tile = world.unit_tile(builder.worker())?;
        let mut nearest: Option<(UnitId, i32)> = None;
        for unit in world.neutral_units() {
            if world.unit_class(unit) != Some(UnitClass::MineralField) {
                continue;
            }
            let Some(tile) = world.unit_tile(unit) else {
                continue;
            };
            let dist = worker_tile.chebyshev(tile);
            if nearest.is_none_or(|(_, best)| dist < best) {
                nearest = Some((unit, dist));
            }
        }
        nearest.map(|(unit, _)| unit)
    }
}
