use std::sync::mpsc::Receiver;

use tracing::{debug, warn};

use super::broadcast::Multicast;
use super::entity::{Entity, EntityDescriptor, EntityEvent};
use super::footprint::VACANT_CELL_MARKER;
use super::grid::CollisionGridSink;
use super::properties::{PropertyConsumer, PropertyMap, PropertyValue};
use super::trigger::TriggerPayload;
use super::types::{EntityId, EntityIdAllocator, RegistryEventCounts, Vec2};

/// Authoritative in-memory set of active entities for the current map
/// instance, plus the wiring that keeps the external collision grid and the
/// aggregated property table consistent with entity state changes.
///
/// Single-threaded and cooperative: entity mutators queue events, and
/// `dispatch_pending` handles each queued event to completion in order.
pub struct EntitiesManager {
    allocator: EntityIdAllocator,
    entities: Vec<Entity>,
    properties: PropertyMap,
    grid_sink: Box<dyn CollisionGridSink>,
    property_consumer: Box<dyn PropertyConsumer>,
    trigger_events: Receiver<TriggerPayload>,
    pointer_over: Multicast<EntityId>,
    pointer_out: Multicast<EntityId>,
    counts: RegistryEventCounts,
}

impl EntitiesManager {
    /// `trigger_events` is the receiver half of a one-time
    /// `ActionTrigger::subscribe` bind; it lives as long as the registry.
    pub fn new(
        grid_sink: Box<dyn CollisionGridSink>,
        property_consumer: Box<dyn PropertyConsumer>,
        trigger_events: Receiver<TriggerPayload>,
    ) -> Self {
        Self {
            allocator: EntityIdAllocator::default(),
            entities: Vec::new(),
            properties: PropertyMap::new(),
            grid_sink,
            property_consumer,
            trigger_events,
            pointer_over: Multicast::new(),
            pointer_out: Multicast::new(),
            counts: RegistryEventCounts::default(),
        }
    }

    /// Registers an entity. If it has a stamp pattern, one stamp command is
    /// issued at its anchor immediately. Append-only: the tracked set keeps
    /// registration order, and duplicate descriptors produce independent
    /// entities.
    pub fn add_entity(&mut self, descriptor: EntityDescriptor) -> EntityId {
        let id = self.allocator.allocate();
        let entity = Entity::from_descriptor(id, descriptor);

        if let Some(pattern) = entity.collision_footprint() {
            self.grid_sink
                .modify_collisions_layer(entity.top_left(), VACANT_CELL_MARKER, pattern);
            self.counts.record_stamp();
        }
        if entity.collision_footprint().is_some() != entity.reversed_collision_footprint().is_some()
        {
            self.counts.record_asymmetric_footprint();
            warn!(
                entity = entity.name(),
                id = entity.id().0,
                "entity has only one collision footprint kind; its moves will leave the grid untouched"
            );
        }
        debug!(
            entity = entity.name(),
            id = entity.id().0,
            x = entity.top_left().x,
            y = entity.top_left().y,
            "entity registered"
        );

        self.entities.push(entity);
        id
    }

    /// The live aggregate. Callers observing the borrow after further
    /// dispatches see updates; there is no defensive snapshot.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Wipes the aggregate. Idempotent, and silent: the consumption hook is
    /// fired by the trigger path, not by the clear primitive itself.
    pub fn clear_properties(&mut self) {
        self.properties.clear();
        self.counts.record_aggregate_clear();
    }

    /// Tracked entities in registration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn find_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn find_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// Subscribing has no side effect on registry state; a subscriber only
    /// sees events emitted after it joined.
    pub fn subscribe_pointer_over(&mut self) -> Receiver<EntityId> {
        self.pointer_over.subscribe()
    }

    pub fn subscribe_pointer_out(&mut self) -> Receiver<EntityId> {
        self.pointer_out.subscribe()
    }

    pub fn counts(&self) -> RegistryEventCounts {
        self.counts
    }

    /// Drains pending trigger firings, then each entity's queued events in
    /// registration order. FIFO per source; every event is handled to
    /// completion before the next.
    pub fn dispatch_pending(&mut self) {
        self.dispatch_trigger_events();
        self.dispatch_entity_events();
    }

    fn dispatch_trigger_events(&mut self) {
        while let Ok(payload) = self.trigger_events.try_recv() {
            debug!(label = ?payload.label, "external trigger fired; clearing aggregate");
            self.clear_properties();
            self.counts.record_trigger_fire();
            // Clear strictly precedes the hook: consumers reconcile against
            // the already-empty aggregate.
            self.property_consumer
                .on_properties_changed(&self.properties);
        }
    }

    fn dispatch_entity_events(&mut self) {
        for index in 0..self.entities.len() {
            let events = self.entities[index].take_pending_events();
            for event in events {
                match event {
                    EntityEvent::Moved { old_anchor } => self.handle_moved(index, old_anchor),
                    EntityEvent::PropertySet { name, value } => {
                        self.handle_property_set(name, value)
                    }
                    EntityEvent::PointerOver => {
                        let id = self.entities[index].id();
                        self.pointer_over.emit(id);
                    }
                    EntityEvent::PointerOut => {
                        let id = self.entities[index].id();
                        self.pointer_out.emit(id);
                    }
                }
            }
        }
    }

    fn handle_moved(&mut self, index: usize, old_anchor: Vec2) {
        let entity = &self.entities[index];
        match (
            entity.reversed_collision_footprint(),
            entity.collision_footprint(),
        ) {
            (Some(vacate), Some(stamp)) => {
                // Clear the old cells first so a sink replaying commands
                // sequentially never sees an orphaned stamp.
                self.grid_sink
                    .modify_collisions_layer(old_anchor, VACANT_CELL_MARKER, vacate);
                self.grid_sink
                    .modify_collisions_layer(entity.top_left(), VACANT_CELL_MARKER, stamp);
                self.counts.record_clear();
                self.counts.record_stamp();
            }
            (None, None) => {
                self.counts.record_move_skipped();
            }
            _ => {
                self.counts.record_move_skipped();
                self.counts.record_asymmetric_footprint();
                warn!(
                    entity = entity.name(),
                    id = entity.id().0,
                    "move with asymmetric collision footprints; grid left untouched"
                );
            }
        }
    }

    fn handle_property_set(&mut self, name: String, value: PropertyValue) {
        debug!(property = name.as_str(), value = %value, "map property set");
        self.properties.insert(name, value);
        self.counts.record_property_set();
        self.property_consumer
            .on_properties_changed(&self.properties);
    }
}
