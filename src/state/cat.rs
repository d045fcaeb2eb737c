use super::FsResult;
use crate::State;
use tracing::{debug, instrument};

impl State {
    /// Reads a plain file from the current directory.
    ///
    /// Words come out in reverse order. Returns `None` if there's no such
    /// entry.
    #[instrument(skip(self))]
    pub fn cat(&self, name: &str) -> FsResult<Option<Vec<String>>> {
        debug!("op: cat()");

        let Some(iid) = self.inodes.get(self.cwd)?.content.get(name)? else {
            debug!("... no such file or directory");
            return Ok(None);
        };

        let words = self.inodes.get(iid)?.content.read()?;

        Ok(Some(words.iter().rev().cloned().collect()))
    }
}
