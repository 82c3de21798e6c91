use serde_json::{Map, Value};

/// A service account entry derived from the `users` map in the config file.
///
/// `name` is always the map key. Whatever else the config carries for the
/// user is kept verbatim in `extra` and never interpreted by podmen.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(name: String, extra: Map<String, Value>) -> Self {
        Self { name, extra }
    }
}
