use super::FsResult;
use crate::{Inodes, State};
use tracing::{debug, instrument};

impl State {
    /// Changes the current directory.
    ///
    /// A subdirectory of the current directory is preferred; otherwise the
    /// whole tree is searched for a directory with that name. Returns `false`
    /// (leaving the current directory as-is) when nothing matches.
    #[instrument(skip(self))]
    pub fn cd(&mut self, name: &str) -> FsResult<bool> {
        debug!("op: cd()");

        if name == Inodes::ROOT_NAME {
            self.cwd = self.root;
            return Ok(true);
        }

        if let Some(iid) = self.cwd_dir()?.get(name) {
            if self.inodes.get(iid)?.is_dir() {
                self.cwd = iid;
                return Ok(true);
            }
        }

        if let Some(iid) = self.inodes.find(self.root, name)? {
            if self.inodes.get(iid)?.is_dir() {
                self.cwd = iid;
                return Ok(true);
            }
        }

        debug!("... no directory found");

        Ok(false)
    }
}
