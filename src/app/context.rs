use crate::domain::{LabConfig, Library};
use crate::ports::{BlobStore, ImageGenerator};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: ImageGenerator, S: BlobStore> {
    config: LabConfig,
    generator: G,
    library: Library<S>,
}

impl<G: ImageGenerator, S: BlobStore> AppContext<G, S> {
    /// Create a new application context, loading the library from `store`.
    pub fn new(config: LabConfig, generator: G, store: S) -> Self {
        Self { config, generator, library: Library::open(store) }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Get a reference to the image generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library<S> {
        &mut self.library
    }
}
