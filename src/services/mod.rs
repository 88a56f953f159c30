mod blob_store_filesystem;
mod blob_store_memory;
mod gemini_client_http;
mod image_file;

pub use blob_store_filesystem::FileBlobStore;
pub use blob_store_memory::MemoryBlobStore;
pub use gemini_client_http::HttpGeminiClient;
pub use image_file::{export_image, export_file_name, load_image_file};
