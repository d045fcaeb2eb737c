use super::{FsError, FsResult};
use crate::{Directory, InodeId, State};
use std::fmt;
use tracing::{debug, instrument};

/// A single directory, as printed by `ls`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub path: String,
    pub rows: Vec<ListingRow>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.path)?;

        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub iid: InodeId,
    pub size: usize,
    pub name: String,
    pub is_dir: bool,
}

impl fmt::Display for ListingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}{:>8}  {}", self.iid, self.size, self.name)?;

        if self.is_dir && !Directory::is_alias(&self.name) {
            write!(f, "/")?;
        }

        Ok(())
    }
}

impl State {
    /// Lists given directory without descending into it.
    ///
    /// Returns `None` if there's no such entry.
    #[instrument(skip(self))]
    pub fn ls(&self, target: &str) -> FsResult<Option<Listing>> {
        debug!("op: ls()");

        let Some(iid) = self.resolve(target)? else {
            debug!("... does not exist");
            return Ok(None);
        };

        self.list_one(iid).map(Some)
    }

    /// Lists the whole tree, starting from the root.
    ///
    /// The listing doesn't descend into directories named like the current
    /// one. Note that this compares names, not identities, so all directories
    /// that happen to share that name are cut off - and when sitting at the
    /// root, only the root itself gets listed.
    #[instrument(skip(self))]
    pub fn lsr(&self) -> FsResult<Vec<Listing>> {
        debug!("op: lsr()");

        let stop = self.cwd_dir()?.name();

        let mut listings = Vec::new();

        self.list_recursive(self.root, stop, &mut listings)?;

        Ok(listings)
    }

    fn list_one(&self, iid: InodeId) -> FsResult<Listing> {
        let dir = self.inodes.dir(iid)?;

        let rows = dir
            .entries()
            .map(|(name, entry_iid)| -> FsResult<ListingRow> {
                let entry = self.inodes.get(entry_iid)?;

                Ok(ListingRow {
                    iid: entry_iid,
                    size: entry.size(),
                    name: name.to_owned(),
                    is_dir: entry.is_dir(),
                })
            })
            .collect::<FsResult<Vec<_>>>()?;

        Ok(Listing {
            path: self.inodes.path(iid)?,
            rows,
        })
    }

    fn list_recursive(&self, iid: InodeId, stop: &str, out: &mut Vec<Listing>) -> FsResult<()> {
        out.push(self.list_one(iid)?);

        let dir = self.inodes.dir(iid)?;

        if dir.name() == stop {
            return Ok(());
        }

        for (_, child_iid) in dir.children() {
            match self.inodes.dir(child_iid) {
                Ok(_) => self.list_recursive(child_iid, stop, out)?,
                Err(FsError::WrongFileType(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    fn names(listing: &Listing) -> Vec<String> {
        listing.rows.iter().map(|row| row.to_string()).collect()
    }

    mod row {
        use super::*;

        fn row(name: &str, is_dir: bool) -> ListingRow {
            ListingRow {
                iid: InodeId::new(12),
                size: 345,
                name: name.into(),
                is_dir,
            }
        }

        #[test]
        fn plain_file() {
            assert_eq!(row("notes", false).to_string(), "      12     345  notes");
        }

        #[test]
        fn directory() {
            assert_eq!(row("docs", true).to_string(), "      12     345  docs/");
        }

        #[test]
        fn aliases_have_no_slash() {
            assert_eq!(row(".", true).to_string(), "      12     345  .");
            assert_eq!(row("..", true).to_string(), "      12     345  ..");
        }
    }

    mod ls {
        use super::*;

        #[test]
        fn empty_root() {
            let listing = State::new().ls(".").unwrap().unwrap();

            assert_eq!(
                listing.to_string(),
                "/:\n       1       2  .\n       1       2  ..\n"
            );
        }

        #[test]
        fn lexicographic_order() {
            let mut state = State::new();

            state.mkdir("zoo").unwrap();
            state.make_file(&argv(&["make", "Beta", "b"])).unwrap();
            state.mkdir("alpha").unwrap();

            let listing = state.ls(".").unwrap().unwrap();
            let rows: Vec<_> = listing.rows.iter().map(|row| row.name.as_str()).collect();

            assert_eq!(rows, [".", "..", "Beta", "alpha", "zoo"]);
        }

        #[test]
        fn sizes_and_ids() {
            let mut state = State::new();

            state.mkdir("docs").unwrap();
            state.make_file(&argv(&["make", "f", "a", "bb", "ccc"])).unwrap();

            let listing = state.ls(".").unwrap().unwrap();

            assert_eq!(
                names(&listing),
                [
                    "       1       4  .",
                    "       1       4  ..",
                    "       2       2  docs/",
                    "       3       8  f",
                ]
            );
        }

        #[test]
        fn parent_directory() {
            let mut state = State::new();

            state.mkdir("a").unwrap();
            state.cd("a").unwrap();

            let listing = state.ls("..").unwrap().unwrap();

            assert_eq!(listing.path, "/");
            assert_eq!(state.pwd().unwrap(), "/a");
        }

        #[test]
        fn does_not_move_cwd() {
            let mut state = State::new();

            state.mkdir("a").unwrap();
            state.mkdir("b").unwrap();
            state.cd("a").unwrap();

            let cwd = state.cwd;
            let listing = state.ls("b").unwrap().unwrap();

            assert_eq!(listing.path, "/b");
            assert_eq!(state.cwd, cwd);
        }

        #[test]
        fn missing_target() {
            assert_eq!(State::new().ls("nope").unwrap(), None);
        }

        #[test]
        fn plain_file_target() {
            let mut state = State::new();

            state.make_file(&argv(&["make", "f"])).unwrap();

            assert!(matches!(state.ls("f"), Err(FsError::WrongFileType(_))));
        }
    }

    mod lsr {
        use super::*;

        fn paths(listings: &[Listing]) -> Vec<&str> {
            listings.iter().map(|l| l.path.as_str()).collect()
        }

        /// /a/{b/, c/{d/}}, /z/
        fn state() -> State {
            let mut state = State::new();

            state.mkdir("a").unwrap();
            state.mkdir("z").unwrap();
            state.cd("a").unwrap();
            state.mkdir("c").unwrap();
            state.mkdir("b").unwrap();
            state.cd("c").unwrap();
            state.mkdir("d").unwrap();
            state.cd("/").unwrap();
            state
        }

        #[test]
        fn whole_tree_in_name_order() {
            let mut state = state();

            // `z` is a leaf, so nothing gets cut off
            state.cd("z").unwrap();

            let listings = state.lsr().unwrap();

            assert_eq!(paths(&listings), ["/", "/a", "/a/b", "/a/c", "/a/c/d", "/z"]);
        }

        #[test]
        fn stops_below_directory_named_like_cwd() {
            let mut state = state();

            state.cd("c").unwrap();

            let listings = state.lsr().unwrap();

            assert_eq!(paths(&listings), ["/", "/a", "/a/b", "/a/c", "/z"]);
        }

        #[test]
        fn from_root_lists_only_the_root() {
            let state = state();
            let listings = state.lsr().unwrap();

            assert_eq!(paths(&listings), ["/"]);
        }

        #[test]
        fn always_starts_at_root() {
            let mut state = state();

            state.cd("d").unwrap();

            let listings = state.lsr().unwrap();

            assert_eq!(listings[0].path, "/");
            assert_eq!(listings.len(), 6);
        }
    }
}
