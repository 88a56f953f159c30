mod compiler;

pub use compiler::{Instruction, OUTPUT_DIRECTIVE, PromptError, compile, placeholders};
