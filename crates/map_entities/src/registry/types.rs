use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

#[derive(Debug, Default)]
pub struct EntityIdAllocator {
    next: u64,
}

impl EntityIdAllocator {
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Running totals of registry side effects, for debug overlays and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryEventCounts {
    pub stamps_issued: u32,
    pub clears_issued: u32,
    pub moves_skipped: u32,
    pub asymmetric_footprints: u32,
    pub properties_set: u32,
    pub aggregate_clears: u32,
    pub trigger_fires: u32,
}

impl RegistryEventCounts {
    pub(crate) fn record_stamp(&mut self) {
        self.stamps_issued = self.stamps_issued.saturating_add(1);
    }

    pub(crate) fn record_clear(&mut self) {
        self.clears_issued = self.clears_issued.saturating_add(1);
    }

    pub(crate) fn record_move_skipped(&mut self) {
        self.moves_skipped = self.moves_skipped.saturating_add(1);
    }

    pub(crate) fn record_asymmetric_footprint(&mut self) {
        self.asymmetric_footprints = self.asymmetric_footprints.saturating_add(1);
    }

    pub(crate) fn record_property_set(&mut self) {
        self.properties_set = self.properties_set.saturating_add(1);
    }

    pub(crate) fn record_aggregate_clear(&mut self) {
        self.aggregate_clears = self.aggregate_clears.saturating_add(1);
    }

    pub(crate) fn record_trigger_fire(&mut self) {
        self.trigger_fires = self.trigger_fires.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_hands_out_sequential_ids() {
        let mut allocator = EntityIdAllocator::default();
        assert_eq!(allocator.allocate(), EntityId(0));
        assert_eq!(allocator.allocate(), EntityId(1));
        assert_eq!(allocator.allocate(), EntityId(2));
    }
}
