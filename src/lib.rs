// Public API exports
pub mod discovery;
pub mod grammar;
pub mod normalizer;
pub mod outdir;
pub mod parser;

// Re-export main types for convenience
pub use discovery::{file_map, find_mfiles, DiscoveryError, DEFAULT_IGNORE_DIRS};
pub use grammar::{scan_sections, Definition, Section};
pub use normalizer::{normalize_lines, LogicalLine};
pub use outdir::{create_out_dir, metadata_path, OutDirError};
pub use parser::{parse_source, ClassEntity, Entity, FunctionEntity, ParsedFile, ScriptEntity};
