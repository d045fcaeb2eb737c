use super::FsResult;
use crate::State;
use tracing::{debug, instrument};

impl State {
    #[instrument(skip(self))]
    pub fn pwd(&self) -> FsResult<String> {
        debug!("op: pwd()");

        self.inodes.path(self.cwd)
    }
}
