use crate::{Content, InodeId};

#[derive(Clone, Debug)]
pub struct Inode {
    pub iid: InodeId,
    pub parent: InodeId,
    pub content: Content,
}

impl Inode {
    pub fn is_dir(&self) -> bool {
        self.content.is_dir()
    }

    pub fn size(&self) -> usize {
        self.content.size()
    }
}
