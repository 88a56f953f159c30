use std::sync::{Arc, Mutex};

use crate::domain::{GenerationError, Image, Instruction};
use crate::ports::ImageGenerator;

/// Generator returning a scripted result and recording every call.
#[derive(Clone)]
pub struct FakeImageGenerator {
    result: Result<Image, GenerationError>,
    calls: Arc<Mutex<Vec<(Image, String)>>>,
}

impl FakeImageGenerator {
    pub fn returning(image: Image) -> Self {
        Self { result: Ok(image), calls: Arc::new(Mutex::new(vec![])) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { result: Err(error), calls: Arc::new(Mutex::new(vec![])) }
    }

    /// Recorded (input image, instruction text) pairs.
    pub fn calls(&self) -> Vec<(Image, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageGenerator for FakeImageGenerator {
    fn generate(&self, image: &Image, instruction: &Instruction) -> Result<Image, GenerationError> {
        self.calls.lock().unwrap().push((image.clone(), instruction.as_str().to_string()));
        self.result.clone()
    }
}
