//! File ownership: detecting sections that write the same file without an
//! ordering between them, and rewriting the plan so they no longer race.
//!
//! Two sections may share a file only when one transitively depends on the
//! other. `analyzer` finds the violations, `resolver` applies a fix.

mod analyzer;
mod resolution;
mod resolver;


pub use analyzer::{
    analyze_file_ownership, analyze_file_ownership_with, ConflictSeverity, FileOwnershipConflict,
    OwnershipReport,
};
pub use resolution::{Resolution, ResolutionPreference};
pub use resolver::resolve_ownership_conflicts;
