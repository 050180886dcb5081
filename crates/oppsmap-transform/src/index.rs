//! Join-key indexes.

use std::collections::HashMap;

/// A hash index from join key to the row positions carrying that key.
///
/// Built once per source before the concept loop; lookups preserve source
/// row order because positions are appended in iteration order.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    map: HashMap<String, Vec<usize>>,
}

impl KeyIndex {
    pub fn build<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, key) in keys.into_iter().enumerate() {
            map.entry(key.to_string()).or_default().push(position);
        }
        Self { map }
    }

    /// Row positions whose key equals `key` exactly, in source order.
    pub fn get(&self, key: &str) -> &[usize] {
        self.map.get(key).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_row_order_per_key() {
        let index = KeyIndex::build(["a", "b", "a", "c"]);
        assert_eq!(index.get("a"), &[0, 2]);
        assert_eq!(index.get("b"), &[1]);
        assert_eq!(index.get("missing"), &[] as &[usize]);
    }

    #[test]
    fn empty_string_is_an_ordinary_key() {
        let index = KeyIndex::build(["", "x", ""]);
        assert_eq!(index.get(""), &[0, 2]);
    }
}
