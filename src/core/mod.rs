// Public modules
pub mod error;
pub mod extensions;
pub mod names;
pub mod walker;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use extensions::ExtensionFilter;
pub use names::clean_filename;
pub use walker::{process_directory, FileRecord, Outcome, WalkOptions, WalkReport};
