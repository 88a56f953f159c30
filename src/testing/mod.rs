mod fake_image_generator;

pub use fake_image_generator::FakeImageGenerator;
