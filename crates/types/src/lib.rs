pub mod entry;
pub mod ids;

pub use entry::{Children, EntryKind, NavEntry, NavTarget};
pub use ids::{Anchor, PageRef, ScriptName};
