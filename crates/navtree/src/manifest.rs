use doxnav_types::NavEntry;
use serde::{Deserialize, Serialize};

/// A parsed navigation script: the variable it assigns and the entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// The script's variable name, which is also its file stem
    /// (`web3intf_8h` for `web3intf_8h.js`).
    pub name: String,
    pub entries: Vec<NavEntry>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, entries: Vec<NavEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}
