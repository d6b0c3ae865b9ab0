/// A path pattern. No parameters and no query strings - the table only ever
/// needs exact paths, a gated subtree, and a catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches exactly this path.
    Exact(&'static str),
    /// Matches the path itself and everything below it
    /// (`Prefix("/admin")` matches `/admin` and `/admin/anything/here`).
    Prefix(&'static str),
    /// Matches every path.
    Any,
}

impl Pattern {
    /// Check whether a path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == *expected,
            Self::Prefix(prefix) => {
                path == *prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            Self::Any => true,
        }
    }
}
