mod blob_store;
mod image_generator;

pub use blob_store::BlobStore;
pub use image_generator::{ImageGenerator, MockImageGenerator};
