use anyhow::{Context, Result};
use std::{fmt, mem};

/// Serial number of an inode.
///
/// Numbers are handed out in increasing order and never come back, even
/// after the inode they named is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InodeId(u64);

impl InodeId {
    pub const ROOT: Self = Self(1);

    /// First number available once the root exists.
    pub const FIRST_FREE: Self = Self(2);

    pub fn new(iid: u64) -> Self {
        Self(iid)
    }

    /// Treats `self` as a counter: returns its current value and moves it one
    /// step forward.
    pub fn advance(&mut self) -> Result<Self> {
        let following = self
            .0
            .checked_add(1)
            .with_context(|| format!("ran out of inode numbers at {}", self.0))?;

        Ok(mem::replace(self, Self(following)))
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for InodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
