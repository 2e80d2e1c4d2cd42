mod album;
mod metadata;

pub use album::AlbumDescriptor;
pub use metadata::{MetadataKey, MetadataRecord};
