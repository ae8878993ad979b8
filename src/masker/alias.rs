//! Alias allocation
//!
//! Per-invocation state: the insertion-ordered original-to-alias table
//! and two independent counters. Nothing here survives between calls.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::classify::IdentifierRole;

/// Mapping from original identifier text to its generated alias.
///
/// A given original maps to exactly one alias for the lifetime of one
/// invocation. Iteration and serialization follow insertion order, which
/// equals first-occurrence order in the traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(original, alias)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, a)| (o.as_str(), a.as_str()))
    }

    fn insert(&mut self, original: String, alias: String) {
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push((original, alias));
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // serialize as a JSON object in insertion order
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (original, alias) in &self.entries {
            map.serialize_entry(original, alias)?;
        }
        map.end()
    }
}

impl fmt::Display for AliasTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (original, alias) in self.iter() {
            writeln!(f, "{original} -> {alias}")?;
        }
        Ok(())
    }
}

/// Allocates aliases for one masking invocation.
#[derive(Debug, Default)]
pub struct AliasAllocator {
    table: AliasTable,
    func_count: usize,
    var_count: usize,
}

impl AliasAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the alias for `text`, allocating `FUNC_n` / `VAR_n` on
    /// first sight. Returns `None` for `Skip`. The first-seen role wins:
    /// a text already in the table keeps its alias regardless of the role
    /// this occurrence was classified with.
    pub fn allocate(&mut self, text: &str, role: IdentifierRole) -> Option<&str> {
        let (prefix, counter) = match role {
            IdentifierRole::Func => ("FUNC", &mut self.func_count),
            IdentifierRole::Var => ("VAR", &mut self.var_count),
            IdentifierRole::Skip => return None,
        };
        if !self.table.contains(text) {
            let alias = format!("{}_{}", prefix, *counter);
            *counter += 1;
            self.table.insert(text.to_string(), alias);
        }
        self.table.get(text)
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn into_table(self) -> AliasTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut allocator = AliasAllocator::new();
        assert_eq!(allocator.allocate("add", IdentifierRole::Func), Some("FUNC_0"));
        assert_eq!(allocator.allocate("a", IdentifierRole::Var), Some("VAR_0"));
        assert_eq!(allocator.allocate("b", IdentifierRole::Var), Some("VAR_1"));
        assert_eq!(allocator.allocate("sub", IdentifierRole::Func), Some("FUNC_1"));
    }

    #[test]
    fn test_same_text_reuses_alias() {
        let mut allocator = AliasAllocator::new();
        assert_eq!(allocator.allocate("x", IdentifierRole::Var), Some("VAR_0"));
        assert_eq!(allocator.allocate("x", IdentifierRole::Var), Some("VAR_0"));
        assert_eq!(allocator.into_table().len(), 1);
    }

    #[test]
    fn test_first_seen_role_wins() {
        let mut allocator = AliasAllocator::new();
        assert_eq!(allocator.allocate("f", IdentifierRole::Func), Some("FUNC_0"));
        // later occurrence classified as a variable keeps the first alias
        assert_eq!(allocator.allocate("f", IdentifierRole::Var), Some("FUNC_0"));
        assert_eq!(allocator.allocate("y", IdentifierRole::Var), Some("VAR_0"));
    }

    #[test]
    fn test_skip_allocates_nothing() {
        let mut allocator = AliasAllocator::new();
        assert_eq!(allocator.allocate("printf", IdentifierRole::Skip), None);
        assert!(allocator.table().is_empty());
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut allocator = AliasAllocator::new();
        allocator.allocate("zeta", IdentifierRole::Var);
        allocator.allocate("alpha", IdentifierRole::Func);
        let json = serde_json::to_string(allocator.table()).unwrap();
        assert_eq!(json, r#"{"zeta":"VAR_0","alpha":"FUNC_0"}"#);
    }
}
