//! Translation dictionary and dot-delimited key-path lookup.

use serde_json::Value;

/// A nested translation dictionary for one language.
///
/// Any JSON document is accepted; lookups only ever traverse objects and only
/// string leaves count as translations.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(Self::new)
    }

    /// Resolve a dot-delimited key path (e.g. `"nav.home"`).
    ///
    /// Returns `None` when a segment is missing, when an intermediate value is
    /// not an object, or when the leaf is not a string.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.as_object()?.get(segment))?
            .as_str()
    }

    /// Dot paths of every string leaf [`lookup`](Self::lookup) can resolve,
    /// sorted by key at each level.
    ///
    /// Keys containing `.` are unreachable by a dotted path and are skipped,
    /// as is a top-level `""` key.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, String::new(), &mut keys);
        keys
    }
}

fn collect_keys(node: &Value, prefix: String, keys: &mut Vec<String>) {
    match node {
        Value::String(_) if !prefix.is_empty() => keys.push(prefix),
        Value::Object(map) => {
            for (key, child) in map.iter().filter(|(key, _)| !key.contains('.')) {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_keys(child, path, keys);
            }
        }
        _ => {}
    }
}
