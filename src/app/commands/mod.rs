pub mod edit;
pub mod library;
pub mod prompt;
pub mod templates;
