//! Data carried through a release-notes run
//!
//! - Work items looked up in the issue tracker
//! - Commits fetched from the comparison range
//! - The final release notes document

mod commit;
mod release_notes;
mod work_item;

pub use commit::Commit;
pub use release_notes::ReleaseNotes;
pub use work_item::WorkItem;
