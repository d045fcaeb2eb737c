use super::{FsError, FsResult};
use crate::{Directory, InodeId, Inodes, State};
use tracing::{debug, instrument};

impl State {
    /// Removes an entry from the current directory.
    ///
    /// Directories don't have to be empty - whatever they contain is freed
    /// along with them. Returns `false` if there's no such entry.
    #[instrument(skip(self))]
    pub fn rm(&mut self, name: &str) -> FsResult<bool> {
        debug!("op: rm()");

        Self::ensure_removable(name)?;

        let Some(iid) = self.cwd_dir()?.get(name) else {
            debug!("... no such file or directory");
            return Ok(false);
        };

        let freed = self.inodes.free(iid)?;

        debug!("... freed {} inode(s), {} left", freed, self.inodes.len());

        Ok(true)
    }

    /// Removes an entry together with everything below it.
    ///
    /// The entry is looked up like in [`State::cd()`], so it doesn't have to
    /// live in the current directory. If the current directory is about to
    /// disappear, we move into the parent of the removed entry first.
    #[instrument(skip(self))]
    pub fn rmr(&mut self, name: &str) -> FsResult<bool> {
        debug!("op: rmr()");

        Self::ensure_removable(name)?;

        let Some(iid) = self.resolve(name)? else {
            debug!("... no such file or directory");
            return Ok(false);
        };

        if self.inodes.is_within(self.cwd, iid)? {
            self.cwd = self.parent_of(iid)?;
            debug!("... moved cwd to {:?}", self.cwd);
        }

        let freed = self.inodes.free(iid)?;

        debug!("... freed {} inode(s), {} left", freed, self.inodes.len());

        Ok(true)
    }

    fn ensure_removable(name: &str) -> FsResult<()> {
        if Directory::is_alias(name) || name == Inodes::ROOT_NAME {
            return Err(FsError::CannotRemove(name.to_owned()));
        }

        Ok(())
    }

    fn parent_of(&self, iid: InodeId) -> FsResult<InodeId> {
        Ok(self.inodes.get(iid)?.parent)
    }
}
