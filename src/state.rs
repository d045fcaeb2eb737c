mod cat;
mod cd;
mod ls;
mod mk;
mod pwd;
mod result;
mod rm;

pub use self::ls::*;
pub use self::result::*;

use crate::{Directory, InodeId, Inodes};

/// The simulated process: a file tree and the current working directory
/// inside of it.
#[derive(Debug)]
pub struct State {
    inodes: Inodes,
    root: InodeId,
    cwd: InodeId,
}

impl State {
    pub fn new() -> Self {
        Self {
            inodes: Inodes::new(),
            root: InodeId::ROOT,
            cwd: InodeId::ROOT,
        }
    }

    #[cfg(test)]
    pub fn inodes(&self) -> &Inodes {
        &self.inodes
    }

    fn cwd_dir(&self) -> FsResult<&Directory> {
        self.inodes.dir(self.cwd)
    }

    /// Resolves a bare name into an inode.
    ///
    /// `/` names the root; then entries of the current directory (including
    /// `.` and `..`) are tried and, as a last resort, the whole tree is
    /// searched starting from the root (see [`Inodes::find()`]).
    fn resolve(&self, name: &str) -> FsResult<Option<InodeId>> {
        if name == Inodes::ROOT_NAME {
            return Ok(Some(self.root));
        }

        if let Some(iid) = self.cwd_dir()?.get(name) {
            return Ok(Some(iid));
        }

        self.inodes.find(self.root, name)
    }

    fn validate_name(name: &str) -> FsResult<()> {
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidName(name.to_owned()));
        }

        Ok(())
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
