use super::footprint::CollisionFootprint;
use super::properties::PropertyValue;
use super::types::{EntityId, Vec2};

/// Closed set of events a tracked entity emits toward the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityEvent {
    Moved { old_anchor: Vec2 },
    PropertySet { name: String, value: PropertyValue },
    PointerOver,
    PointerOut,
}

/// Everything needed to construct a tracked entity. Descriptors carry no
/// identity; registering the same descriptor twice yields two independent
/// entities.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    name: String,
    top_left: Vec2,
    collision: Option<CollisionFootprint>,
    reversed_collision: Option<CollisionFootprint>,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>, top_left: Vec2) -> Self {
        Self {
            name: name.into(),
            top_left,
            collision: None,
            reversed_collision: None,
        }
    }

    pub fn with_collision(mut self, footprint: CollisionFootprint) -> Self {
        self.collision = Some(footprint);
        self
    }

    pub fn with_reversed_collision(mut self, footprint: CollisionFootprint) -> Self {
        self.reversed_collision = Some(footprint);
        self
    }

    /// Sets the stamp pattern and derives the vacate pattern from it. Use
    /// the explicit setters when the two shapes differ.
    pub fn with_symmetric_collision(mut self, footprint: CollisionFootprint) -> Self {
        self.reversed_collision = Some(footprint.reversed());
        self.collision = Some(footprint);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn collision(&self) -> Option<&CollisionFootprint> {
        self.collision.as_ref()
    }

    pub fn reversed_collision(&self) -> Option<&CollisionFootprint> {
        self.reversed_collision.as_ref()
    }
}

/// A placed interactive map object. Mutators queue events; the owning
/// registry drains and reacts to them on `dispatch_pending`.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    name: String,
    top_left: Vec2,
    collision: Option<CollisionFootprint>,
    reversed_collision: Option<CollisionFootprint>,
    pending_events: Vec<EntityEvent>,
}

impl Entity {
    pub(crate) fn from_descriptor(id: EntityId, descriptor: EntityDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name,
            top_left: descriptor.top_left,
            collision: descriptor.collision,
            reversed_collision: descriptor.reversed_collision,
            pending_events: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anchor coordinate: the top-left corner of the bounding box.
    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn collision_footprint(&self) -> Option<&CollisionFootprint> {
        self.collision.as_ref()
    }

    pub fn reversed_collision_footprint(&self) -> Option<&CollisionFootprint> {
        self.reversed_collision.as_ref()
    }

    pub fn set_top_left(&mut self, top_left: Vec2) {
        let old_anchor = self.top_left;
        self.top_left = top_left;
        self.pending_events.push(EntityEvent::Moved { old_anchor });
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.pending_events.push(EntityEvent::PropertySet {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn pointer_entered(&mut self) {
        self.pending_events.push(EntityEvent::PointerOver);
    }

    pub fn pointer_left(&mut self) {
        self.pending_events.push(EntityEvent::PointerOut);
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    pub(crate) fn take_pending_events(&mut self) -> Vec<EntityEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
