//! Newtype wrappers for the string identifiers found in a navigation index.
//!
//! A generated index mixes three kinds of strings: HTML page names, anchor
//! fragments inside those pages, and the names of further index scripts that
//! hold deferred children. Keeping them apart at the type level prevents a
//! script name from ever being used as a link target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// An HTML page of the generated documentation, e.g. `web3intf_8h.html`.
    PageRef
);

string_id!(
    /// A fragment inside a page, without the leading `#`.
    Anchor
);

string_id!(
    /// The name of an index script holding deferred children, without the
    /// `.js` extension (e.g. `struct_t_param__eth__call`).
    ScriptName
);

impl ScriptName {
    /// File name of the script on disk.
    pub fn file_name(&self) -> String {
        format!("{}.js", self.0)
    }
}
