pub mod content;
pub mod registry;

pub use content::{load_descriptors, DescriptorError};
pub use registry::{
    ActionTrigger, CollisionFootprint, CollisionGridSink, EntitiesManager, Entity,
    EntityDescriptor, EntityEvent, EntityId, FootprintError, Multicast, PropertyConsumer,
    PropertyMap, PropertyValue, RegistryEventCounts, TriggerPayload, Vec2,
    OCCUPIED_CELL_MARKER, VACANT_CELL_MARKER,
};
