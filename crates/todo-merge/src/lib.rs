//! Partial-update merging for the to-do backend.
//!
//! A *patch* is a struct whose fields are all `Option<_>`. Merging a patch
//! into a target copies every field that holds a value and leaves the target
//! alone wherever the patch holds `None`.
//!
//! # Field lists
//!
//! There is no runtime introspection. Each (patch, target) pair spells out its
//! field list once through [`impl_merge_non_null!`], which expands to a
//! [`Patch`] impl for the source and a [`MergeNonNull`] impl for the target.
//!
//! - Every field of the patch must be listed (the patch is destructured
//!   exhaustively), otherwise the crate does not compile.
//! - Every listed field must exist on the target.
//! - Target fields that are not listed are never touched.
//!
//! ```
//! use todo_merge::{impl_merge_non_null, merge_non_null};
//!
//! struct Note { title: String, body: Option<String>, pinned: bool }
//! struct NotePatch { title: Option<String>, body: Option<String> }
//!
//! impl_merge_non_null!(NotePatch => Note {
//!     required: [title],
//!     optional: [body],
//! });
//!
//! let mut note = Note { title: "draft".into(), body: None, pinned: true };
//! let patch = NotePatch { title: None, body: Some("hello".into()) };
//!
//! let report = merge_non_null(&patch, &mut note);
//! assert_eq!(note.title, "draft");
//! assert_eq!(note.body.as_deref(), Some("hello"));
//! assert!(note.pinned);
//! assert_eq!(report.applied(), ["body"]);
//! ```
//!
//! A patch field with no counterpart on the target is rejected at build time:
//!
//! ```compile_fail
//! use todo_merge::impl_merge_non_null;
//!
//! struct Note { title: String }
//! struct NotePatch { title: Option<String>, colour: Option<String> }
//!
//! impl_merge_non_null!(NotePatch => Note {
//!     required: [title, colour],
//!     optional: [],
//! });
//! ```

mod macros;
pub mod report;
pub mod traits;

pub use report::MergeReport;
pub use traits::{merge_non_null, MergeNonNull, Patch};
