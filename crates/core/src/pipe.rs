use crate::Chain;

/// Starts a [`Chain`] from any value.
///
/// `value.pipe(f)` is shorthand for `Chain::of(value).then(f)`. Because
/// [`Chain`] has its own `pipe` method, the same call keeps extending a chain
/// once one exists, so a pipeline reads the same from the seed onward.
///
/// Implemented for every sized type; there is nothing to implement by hand.
///
/// # Example
///
/// ```
/// use strand_core::{Pipe, size};
///
/// let mut chain = vec![1, 2, 3, 4, 5].pipe(size).pipe(|n| n * 2);
/// assert_eq!(chain.run(), Ok(10));
///
/// let mut chain = 5.into_chain() >> (|x: i32| x * 2) >> (|x: i32| x + 10);
/// assert_eq!(chain.run(), Ok(20));
/// ```
pub trait Pipe: Sized {
    /// Wraps `self` in a fresh chain, ready for `>>`.
    fn into_chain(self) -> Chain<Self> {
        Chain::of(self)
    }

    /// Wraps `self` in a chain and applies the first link.
    fn pipe<F, U>(self, f: F) -> Chain<U>
    where
        F: FnOnce(Self) -> U,
    {
        Chain::of(self).then(f)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use crate::size;

    use super::*;

    #[test]
    fn pipe_on_raw_value() {
        let mut chain = 5.pipe(|x| x * 2).pipe(|x| x + 10);
        assert_eq!(chain.run(), Ok(20));
    }

    #[test]
    fn pipe_on_chain_extends_it() {
        let chain = Chain::of(String::from("test"));

        let mut extended = chain.pipe(size).pipe(|x| x * 3).pipe(|x| x + 5);

        assert_eq!(extended.run(), Ok(17));
    }

    #[test]
    fn pipe_runs_immediately_without_run() {
        let captured = Cell::new(0);

        let _ = 7.pipe(|x| x * 2).tap(|x| captured.set(*x));

        assert_eq!(captured.get(), 14);
    }

    #[test]
    fn into_chain_with_operator() {
        let mut chain = 3.5.into_chain()
            >> (|x: f64| x * 2.0)
            >> (|x: f64| x + 1.0)
            >> (|x: f64| x / 2.0);

        assert_relative_eq!(chain.run().unwrap(), 4.0);
    }
}
