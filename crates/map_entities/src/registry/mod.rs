mod broadcast;
mod entity;
mod footprint;
mod grid;
mod manager;
mod properties;
mod trigger;
mod types;

pub use broadcast::Multicast;
pub use entity::{Entity, EntityDescriptor, EntityEvent};
pub use footprint::{
    CollisionFootprint, FootprintError, OCCUPIED_CELL_MARKER, VACANT_CELL_MARKER,
};
pub use grid::CollisionGridSink;
pub use manager::EntitiesManager;
pub use properties::{PropertyConsumer, PropertyMap, PropertyValue};
pub use trigger::{ActionTrigger, TriggerPayload};
pub use types::{EntityId, EntityIdAllocator, RegistryEventCounts, Vec2};
