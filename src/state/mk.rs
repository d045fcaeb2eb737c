use super::{FsError, FsResult};
use crate::{InodeId, State};
use tracing::{debug, instrument};

impl State {
    /// Creates a directory inside the current one.
    ///
    /// Returns `None` if an entry with that name already exists, in which
    /// case nothing gets changed.
    #[instrument(skip(self))]
    pub fn mkdir(&mut self, name: &str) -> FsResult<Option<InodeId>> {
        debug!("op: mkdir()");

        Self::validate_name(name)?;

        if self.inodes.get(self.cwd)?.content.contains(name)? {
            debug!("... directory already exists");
            return Ok(None);
        }

        self.inodes.alloc_dir(self.cwd, name).map(Some)
    }

    /// Creates a plain file inside the current directory.
    ///
    /// `argv` is the whole command line that requested the file: the command
    /// itself, the file name and then the words to store.
    ///
    /// If a plain file with that name already exists, its contents get
    /// replaced (it keeps its inode number).
    #[instrument(skip(self))]
    pub fn make_file(&mut self, argv: &[String]) -> FsResult<InodeId> {
        debug!("op: make_file()");

        let (name, words) = match argv {
            [_, name, words @ ..] => (name.as_str(), words.to_vec()),
            _ => return Err(FsError::InvalidName(String::new())),
        };

        Self::validate_name(name)?;

        if let Some(iid) = self.cwd_dir()?.get(name) {
            self.inodes.get_mut(iid)?.content.write(words)?;
            return Ok(iid);
        }

        self.inodes.alloc_file(self.cwd, name, words)
    }
}
