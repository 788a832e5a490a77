//! Defines `CategoryManager`, the record of which categories
//! are still reachable at the current position in the tree.
use fixedbitset::FixedBitSet;

use std::rc::Rc;


/// A path-scoped, immutable map from feature name
/// to the set of reachable category positions.
/// 
/// A feature without an entry is unrestricted.
/// `fork` never mutates; it pushes an override frame
/// that shares every other entry with `self`.
#[derive(Debug, Clone, Default)]
pub struct CategoryManager {
    head: Option<Rc<Frame>>,
}


#[derive(Debug)]
struct Frame {
    name: String,
    reachable: FixedBitSet,
    parent: Option<Rc<Frame>>,
}


impl CategoryManager {
    /// Construct an unrestricted `CategoryManager`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Returns the reachable set of `name`,
    /// or `None` if the feature is unrestricted on this path.
    pub fn reachable(&self, name: &str) -> Option<&FixedBitSet> {
        let mut frame = self.head.as_deref();
        while let Some(f) = frame {
            if f.name == name {
                return Some(&f.reachable);
            }
            frame = f.parent.as_deref();
        }
        None
    }


    /// Returns `true` if the category at `index` of `name`
    /// is reachable on this path.
    #[inline]
    pub fn is_reachable(&self, name: &str, index: usize) -> bool {
        self.reachable(name)
            .map_or(true, |set| set.contains(index))
    }


    /// Returns a new manager in which `name` is restricted to `reachable`.
    #[inline]
    pub fn fork(&self, name: &str, reachable: FixedBitSet) -> Self {
        let frame = Frame {
            name: name.to_string(),
            reachable,
            parent: self.head.clone(),
        };
        Self { head: Some(Rc::new(frame)) }
    }
}
