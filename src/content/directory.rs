use crate::InodeId;
use std::collections::BTreeMap;

/// Contents of a directory.
///
/// Entries are kept in a `BTreeMap` so that iterating them (and thus every
/// listing) happens in byte-wise lexicographic order. `.` and `..` take part
/// in that order like any other name, so they come first only as long as no
/// name starts with a character below `.` (such as `+` or `-`).
///
/// `.` and `..` are plain ids: they alias nodes owned elsewhere in the arena,
/// and only the remaining entries denote children of this directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory {
    name: String,
    entries: BTreeMap<String, InodeId>,
}

impl Directory {
    pub const SELF: &'static str = ".";
    pub const PARENT: &'static str = "..";

    /// Creates a directory already linked to itself and its parent.
    pub fn new(name: impl Into<String>, iid: InodeId, parent_iid: InodeId) -> Self {
        let entries = BTreeMap::from_iter([
            (Self::SELF.to_owned(), iid),
            (Self::PARENT.to_owned(), parent_iid),
        ]);

        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn is_alias(name: &str) -> bool {
        name == Self::SELF || name == Self::PARENT
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn add_entry(&mut self, name: &str, iid: InodeId) {
        self.entries.insert(name.to_owned(), iid);
    }

    pub fn get(&self, name: &str) -> Option<InodeId> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<InodeId> {
        self.entries.remove(name)
    }

    pub fn parent(&self) -> Option<InodeId> {
        self.get(Self::PARENT)
    }

    /// Iterates all entries, `.` and `..` included, in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, InodeId)> + '_ {
        self.entries
            .iter()
            .map(|(name, iid)| (name.as_str(), *iid))
    }

    /// Iterates entries owned by this directory, i.e. everything except `.`
    /// and `..`.
    pub fn children(&self) -> impl Iterator<Item = (&str, InodeId)> + '_ {
        self.entries().filter(|(name, _)| !Self::is_alias(name))
    }

    /// Name of the entry pointing at given child.
    pub fn name_of(&self, iid: InodeId) -> Option<&str> {
        self.children()
            .find_map(|(name, child_iid)| (child_iid == iid).then_some(name))
    }

    /// Drops every entry, including `.` and `..`.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> Directory {
        Directory::new("docs", InodeId::new(5), InodeId::new(2))
    }

    #[test]
    fn starts_with_dot_entries() {
        let dir = dir();

        assert_eq!(dir.get("."), Some(InodeId::new(5)));
        assert_eq!(dir.parent(), Some(InodeId::new(2)));
        assert_eq!(dir.size(), 2);
        assert_eq!(dir.children().count(), 0);
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let mut dir = dir();

        dir.add_entry("zeta", InodeId::new(8));
        dir.add_entry("Alpha", InodeId::new(7));
        dir.add_entry("mid", InodeId::new(6));

        let names: Vec<_> = dir.entries().map(|(name, _)| name).collect();

        assert_eq!(names, [".", "..", "Alpha", "mid", "zeta"]);
    }

    #[test]
    fn aliases_sort_like_regular_names() {
        let mut dir = dir();

        dir.add_entry("-x", InodeId::new(6));
        dir.add_entry("+f", InodeId::new(7));
        dir.add_entry("a", InodeId::new(8));

        let names: Vec<_> = dir.entries().map(|(name, _)| name).collect();

        assert_eq!(names, ["+f", "-x", ".", "..", "a"]);
    }

    #[test]
    fn add_entry_overwrites() {
        let mut dir = dir();

        dir.add_entry("f", InodeId::new(6));
        dir.add_entry("f", InodeId::new(9));

        assert_eq!(dir.get("f"), Some(InodeId::new(9)));
        assert_eq!(dir.size(), 3);
    }

    #[test]
    fn remove_of_missing_entry_is_a_noop() {
        let mut dir = dir();

        assert_eq!(dir.remove("nope"), None);
        assert_eq!(dir.size(), 2);
    }

    #[test]
    fn name_of_ignores_aliases() {
        let mut dir = dir();

        dir.add_entry("f", InodeId::new(6));

        assert_eq!(dir.name_of(InodeId::new(6)), Some("f"));
        assert_eq!(dir.name_of(InodeId::new(5)), None);
    }

    #[test]
    fn clear_drops_aliases_too() {
        let mut dir = dir();

        dir.add_entry("a", InodeId::new(6));
        dir.add_entry("b", InodeId::new(7));

        dir.clear();

        assert_eq!(dir.size(), 0);
        assert!(!dir.contains("."));
        assert!(!dir.contains(".."));
    }
}
