use std::collections::BTreeSet;

use super::ScenePath;

/// Root path plus excluded sub-paths.
///
/// Compared by value: two scopes with the same root and the same set of
/// exclusions are equal regardless of the order exclusions were supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneScope {
    root: ScenePath,
    excluded: BTreeSet<ScenePath>,
}

impl SceneScope {
    pub fn new<I>(root: ScenePath, excluded: I) -> Self
    where
        I: IntoIterator<Item = ScenePath>,
    {
        Self {
            root,
            excluded: excluded.into_iter().collect(),
        }
    }

    #[inline]
    pub fn root(&self) -> &ScenePath {
        &self.root
    }

    #[inline]
    pub fn excluded(&self) -> &BTreeSet<ScenePath> {
        &self.excluded
    }
}
