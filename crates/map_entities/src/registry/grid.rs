use super::footprint::CollisionFootprint;
use super::types::Vec2;

/// Mutation sink for the shared collision grid. The grid itself is owned by
/// the map-layer storage; the registry only writes stamp commands through
/// this seam and never reads the grid back.
///
/// `marker` is a fixed cell-content token (`VACANT_CELL_MARKER` on both the
/// stamp and the clear call); whether cells become occupied or vacated is
/// encoded by the pattern's own cell values.
pub trait CollisionGridSink {
    fn modify_collisions_layer(&mut self, origin: Vec2, marker: u16, pattern: &CollisionFootprint);
}
