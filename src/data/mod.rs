mod loader;
mod shuffle;

pub use loader::{load_questions_from_json, parse_questions, LoadError};
pub use shuffle::shuffled_options;
