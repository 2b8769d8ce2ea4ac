use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A container that knows how many elements it holds.
///
/// Strings report their length in bytes.
pub trait Size {
    fn size(&self) -> usize;
}

/// Returns the element count of `container`.
///
/// Takes the container by value so it can be passed directly as a chain link:
///
/// ```
/// use strand_core::{Chain, size};
///
/// let mut chain = Chain::of("Hello World!").then(size).then(|n| n * 2);
/// assert_eq!(chain.run(), Ok(24));
/// ```
pub fn size<C: Size>(container: C) -> usize {
    Size::size(&container)
}

impl Size for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Size for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Size for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> Size for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Size for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Size for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Size for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for BTreeSet<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<C: Size + ?Sized> Size for &C {
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<C: Size + ?Sized> Size for Box<C> {
    fn size(&self) -> usize {
        (**self).size()
    }
}
