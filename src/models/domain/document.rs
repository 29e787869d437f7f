use serde::{Deserialize, Serialize};

/// Reference to a document handed to the external reader. `location` is
/// opaque to the engine; `name` is what progress reporting shows.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentRef {
    pub name: String,
    pub location: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}
