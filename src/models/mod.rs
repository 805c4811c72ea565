pub mod section;

pub use section::{FileAction, FileChange, FileStatus, Section, SectionStatus};
