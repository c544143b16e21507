use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

/// A thread-safe reference-counted smart pointer for GraphQL AST nodes.
///
/// Similar to [`std::sync::Arc<T>`] but without support for weak references,
/// so that a single allocation and reference counter suffice. Documents share
/// nodes between each other without cloning entire subtrees; to modify a
/// node, [`make_mut`][Node::make_mut] provides copy-on-write semantics.
pub struct Node<T>(triomphe::Arc<T>);

impl<T> Node<T> {
    #[inline]
    pub fn new(node: T) -> Self {
        Self(triomphe::Arc::new(node))
    }

    /// Returns whether two `Node`s point to the same memory allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        triomphe::Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a mutable reference to `T`, cloning it if necessary.
    ///
    /// If this `Node` is uniquely owned, the contents are borrowed directly.
    /// If not, a new `Node` with a clone of the contents replaces `self`
    /// first. Functionally equivalent to [`Arc::make_mut`][mm] from the
    /// standard library.
    ///
    /// [mm]: https://doc.rust-lang.org/stable/std/sync/struct.Arc.html#method.make_mut
    pub fn make_mut(&mut self) -> &mut T
    where
        T: Clone,
    {
        triomphe::Arc::make_mut(&mut self.0)
    }

    /// Returns a mutable reference to `T` if this `Node` is uniquely owned.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        triomphe::Arc::get_mut(&mut self.0)
    }
}

impl<T> std::ops::Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(self, f)
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) // fast path
            || *self.0 == *other.0
    }
}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> AsRef<T> for Node<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> From<T> for Node<T> {
    fn from(node: T) -> Self {
        Self::new(node)
    }
}

impl<T: serde::Serialize> serde::Serialize for Node<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        T::serialize(self, serializer)
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Node<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
