mod descriptors;

pub use descriptors::{load_descriptors, DescriptorError};
