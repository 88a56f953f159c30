//! Image generation backend port definition.

use crate::domain::{GenerationError, Image, Instruction};

/// Port for the external generative image model.
///
/// One call is one opaque request: no partial progress, no cancellation.
pub trait ImageGenerator {
    /// Edit `image` according to `instruction` and return the result.
    fn generate(&self, image: &Image, instruction: &Instruction) -> Result<Image, GenerationError>;
}

impl<G: ImageGenerator + ?Sized> ImageGenerator for Box<G> {
    fn generate(&self, image: &Image, instruction: &Instruction) -> Result<Image, GenerationError> {
        (**self).generate(image, instruction)
    }
}

/// Mock generator for running without API calls: returns the input unchanged.
#[derive(Debug, Clone, Default)]
pub struct MockImageGenerator;

impl ImageGenerator for MockImageGenerator {
    fn generate(&self, image: &Image, instruction: &Instruction) -> Result<Image, GenerationError> {
        println!("=== MOCK MODE ===");
        println!("Would send to the image model:");
        println!("  Image: {} ({} bytes)", image.mime_type(), image.len());
        println!("  Instruction: {}", instruction);
        Ok(image.clone())
    }
}
