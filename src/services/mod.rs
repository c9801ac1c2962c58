// dlrenamer services
// Services provide the rename pipeline: placeholder resolution, pattern
// compilation, filename sanitization, the rename decision, and settings persistence.

pub mod pattern_compiler;
pub mod placeholder_resolver;
pub mod rename_engine;
pub mod sanitizer;
pub mod settings_engine;
