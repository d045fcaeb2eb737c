mod data;
mod directory;

pub use self::data::*;
pub use self::directory::*;

use crate::{FsError, FsResult, InodeId};
use std::fmt;

/// Payload of an inode: either a plain file holding words or a directory
/// mapping names onto other inodes.
///
/// Every operation is defined on both variants; the ones that make no sense
/// for a variant fail with [`FsError::WrongFileType`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Data(Data),
    Directory(Directory),
}

impl Content {
    pub fn kind(&self) -> FileKind {
        match self {
            Content::Data(_) => FileKind::PlainFile,
            Content::Directory(_) => FileKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Content::Directory(_))
    }

    pub fn size(&self) -> usize {
        match self {
            Content::Data(data) => data.size(),
            Content::Directory(dir) => dir.size(),
        }
    }

    pub fn read(&self) -> FsResult<&[String]> {
        Ok(self.as_data()?.read())
    }

    pub fn write(&mut self, tokens: Vec<String>) -> FsResult<()> {
        self.as_data_mut()?.write(tokens);

        Ok(())
    }

    pub fn add_entry(&mut self, name: &str, iid: InodeId) -> FsResult<()> {
        self.as_dir_mut()?.add_entry(name, iid);

        Ok(())
    }

    pub fn get(&self, name: &str) -> FsResult<Option<InodeId>> {
        Ok(self.as_dir()?.get(name))
    }

    pub fn contains(&self, name: &str) -> FsResult<bool> {
        Ok(self.as_dir()?.contains(name))
    }

    pub fn remove(&mut self, name: &str) -> FsResult<Option<InodeId>> {
        Ok(self.as_dir_mut()?.remove(name))
    }

    pub fn as_data(&self) -> FsResult<&Data> {
        match self {
            Content::Data(data) => Ok(data),
            other => Err(FsError::WrongFileType(other.kind())),
        }
    }

    pub fn as_data_mut(&mut self) -> FsResult<&mut Data> {
        match self {
            Content::Data(data) => Ok(data),
            other => Err(FsError::WrongFileType(other.kind())),
        }
    }

    pub fn as_dir(&self) -> FsResult<&Directory> {
        match self {
            Content::Directory(dir) => Ok(dir),
            other => Err(FsError::WrongFileType(other.kind())),
        }
    }

    pub fn as_dir_mut(&mut self) -> FsResult<&mut Directory> {
        match self {
            Content::Directory(dir) => Ok(dir),
            other => Err(FsError::WrongFileType(other.kind())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    PlainFile,
    Directory,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::PlainFile => write!(f, "plain file"),
            FileKind::Directory => write!(f, "directory"),
        }
    }
}
