use crate::{Content, Data, Directory, FsResult, Inode, InodeId};
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use tracing::{instrument, trace};

/// Arena holding every live inode.
///
/// Directories refer to their entries by [`InodeId`], so the `.` and `..`
/// back-references are just numbers and don't keep anything alive. A node is
/// owned by the arena and gets evicted when the entry holding it (in its
/// parent) is removed.
#[derive(Debug)]
pub struct Inodes {
    nodes: HashMap<InodeId, Inode>,
    next_iid: InodeId,
}

impl Inodes {
    pub const ROOT_NAME: &'static str = "/";

    pub fn new() -> Self {
        let root = Inode {
            iid: InodeId::ROOT,
            parent: InodeId::ROOT,
            content: Content::Directory(Directory::new(
                Self::ROOT_NAME,
                InodeId::ROOT,
                InodeId::ROOT,
            )),
        };

        Self {
            nodes: HashMap::from_iter([(InodeId::ROOT, root)]),
            next_iid: InodeId::FIRST_FREE,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, iid: InodeId) -> Result<&Inode> {
        self.nodes
            .get(&iid)
            .with_context(|| format!("{:?} is dead", iid))
    }

    pub fn get_mut(&mut self, iid: InodeId) -> Result<&mut Inode> {
        self.nodes
            .get_mut(&iid)
            .with_context(|| format!("{:?} is dead", iid))
    }

    pub fn dir(&self, iid: InodeId) -> FsResult<&Directory> {
        self.get(iid)?.content.as_dir()
    }

    #[instrument(skip(self))]
    pub fn alloc_dir(&mut self, parent_iid: InodeId, name: &str) -> FsResult<InodeId> {
        self.alloc(parent_iid, name, |iid| {
            Content::Directory(Directory::new(name, iid, parent_iid))
        })
    }

    #[instrument(skip(self, tokens))]
    pub fn alloc_file(
        &mut self,
        parent_iid: InodeId,
        name: &str,
        tokens: Vec<String>,
    ) -> FsResult<InodeId> {
        self.alloc(parent_iid, name, |_| Content::Data(Data::new(tokens)))
    }

    fn alloc(
        &mut self,
        parent_iid: InodeId,
        name: &str,
        content: impl FnOnce(InodeId) -> Content,
    ) -> FsResult<InodeId> {
        // Fail before burning an id
        self.dir(parent_iid)?;

        let iid = self.next_iid.advance()?;

        self.nodes.insert(
            iid,
            Inode {
                iid,
                parent: parent_iid,
                content: content(iid),
            },
        );

        self.get_mut(parent_iid)?.content.add_entry(name, iid)?;

        trace!("allocated inode {:?}", iid);

        Ok(iid)
    }

    /// Looks for an entry called `name` anywhere below given directory.
    ///
    /// A direct entry of the directory wins; otherwise its subdirectories are
    /// searched depth-first in name order and the first hit is returned. `.`
    /// and `..` are never followed nor matched.
    ///
    /// Since names are unique only within a single directory, looking up a
    /// bare name across the whole tree is inherently ambiguous - when it
    /// appears in many places, the first one in that order is picked.
    pub fn find(&self, dir_iid: InodeId, name: &str) -> FsResult<Option<InodeId>> {
        if Directory::is_alias(name) {
            return Ok(None);
        }

        let dir = self.dir(dir_iid)?;

        if let Some(iid) = dir.get(name) {
            return Ok(Some(iid));
        }

        for (_, child_iid) in dir.children() {
            if self.get(child_iid)?.is_dir() {
                if let Some(iid) = self.find(child_iid, name)? {
                    return Ok(Some(iid));
                }
            }
        }

        Ok(None)
    }

    /// Empties given directory, freeing everything below it.
    ///
    /// Children get cleared before their parent (post-order); at the end the
    /// directory loses all of its entries, including `.` and `..`, and so is
    /// left detached from the rest of the tree.
    ///
    /// Returns the number of freed inodes.
    #[instrument(skip(self))]
    pub fn clear(&mut self, iid: InodeId) -> FsResult<usize> {
        let children: Vec<_> = self.dir(iid)?.children().map(|(_, iid)| iid).collect();
        let mut freed = 0;

        for child_iid in children {
            if self.get(child_iid)?.is_dir() {
                freed += self.clear(child_iid)?;
            }

            self.evict(child_iid)?;
            freed += 1;
        }

        self.get_mut(iid)?.content.as_dir_mut()?.clear();

        trace!("cleared inode, {} freed", freed);

        Ok(freed)
    }

    /// Removes given inode from its parent and frees it, together with its
    /// whole subtree.
    ///
    /// Returns the number of freed inodes.
    #[instrument(skip(self))]
    pub fn free(&mut self, iid: InodeId) -> FsResult<usize> {
        if iid.is_root() {
            return Err(anyhow!("tried to free the root").into());
        }

        let mut freed = 0;

        if self.get(iid)?.is_dir() {
            freed += self.clear(iid)?;
        }

        let parent_iid = self.get(iid)?.parent;
        let parent = &mut self.get_mut(parent_iid)?.content;

        if let Some(name) = parent.as_dir()?.name_of(iid).map(ToOwned::to_owned) {
            parent.remove(&name)?;
        }

        self.evict(iid)?;

        Ok(freed + 1)
    }

    fn evict(&mut self, iid: InodeId) -> Result<()> {
        let inode = self
            .nodes
            .remove(&iid)
            .with_context(|| format!("{:?} is dead", iid))?;

        trace!("evicted inode {:?} ({})", inode.iid, inode.content.kind());

        Ok(())
    }

    /// Builds the absolute path of given directory by following `..` until
    /// reaching the root.
    pub fn path(&self, iid: InodeId) -> FsResult<String> {
        let mut names = Vec::new();
        let mut cursor = iid;

        while !cursor.is_root() {
            if names.len() > self.nodes.len() {
                return Err(anyhow!("{:?} doesn't lead back to the root", iid).into());
            }

            let dir = self.dir(cursor)?;

            names.push(dir.name());

            cursor = dir
                .parent()
                .with_context(|| format!("{:?} has no parent", cursor))?;
        }

        if names.is_empty() {
            return Ok(Self::ROOT_NAME.to_owned());
        }

        Ok(names
            .into_iter()
            .rev()
            .map(|name| format!("/{}", name))
            .collect())
    }

    /// Checks whether `iid` is `ancestor_iid` or lies somewhere below it.
    pub fn is_within(&self, iid: InodeId, ancestor_iid: InodeId) -> Result<bool> {
        let mut cursor = iid;

        for _ in 0..=self.nodes.len() {
            if cursor == ancestor_iid {
                return Ok(true);
            }

            if cursor.is_root() {
                return Ok(false);
            }

            cursor = self.get(cursor)?.parent;
        }

        Err(anyhow!("{:?} doesn't lead back to the root", iid))
    }
}

impl Default for Inodes {
    fn default() -> Self {
        Self::new()
    }
}
