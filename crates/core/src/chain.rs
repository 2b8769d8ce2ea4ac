mod ops;

use std::any::type_name;

use crate::ChainError;

/// A value threaded through a sequence of transforms.
///
/// `Chain<T>` owns its current value and tracks whether the result has been
/// handed out. Links are eager: [`then()`] and [`tap()`] call their transform
/// right away and return a new chain around the immediate result. Only the
/// final extraction is guarded, and it succeeds once per chain instance.
///
/// ## Chaining
///
/// - [`then()`] replaces the value, possibly with one of a different type.
/// - [`tap()`] acts on the value for effect and passes it through unchanged.
/// - [`try_then()`] runs a fallible transform and returns its error as-is.
///
/// Each of these has a `_ref` counterpart that works through `&self` by
/// duplicating the value, leaving the receiver untouched. The `>>` operator
/// is shorthand for `then` on both owned and borrowed chains.
///
/// ## Evaluation
///
/// [`run()`], [`run_cloned()`] and [`into_value()`] mark the chain consumed
/// and return its value. Evaluating a consumed chain fails with
/// [`ChainError::AlreadyConsumed`]. [`peek()`] reads the value at any time
/// without affecting the consumed state.
///
/// ## Copies and moves
///
/// A clone always starts fresh, even when cloned from a consumed chain.
/// Moving with [`take_chain()`] (or [`std::mem::take`]) carries the consumed
/// state to the destination and leaves a fresh default chain behind.
///
/// # Example
///
/// ```
/// use strand_core::{Chain, ChainError};
///
/// let mut chain = Chain::of(2)
///     .then(|x| x * x)
///     .then(|x| x + 5)
///     .then(|x| x * 3)
///     .then(|x| x - 7);
///
/// assert_eq!(chain.peek(), &20);
/// assert_eq!(chain.run(), Ok(20));
/// assert_eq!(chain.run(), Err(ChainError::AlreadyConsumed));
/// ```
///
/// [`then()`]: Chain::then
/// [`tap()`]: Chain::tap
/// [`try_then()`]: Chain::try_then
/// [`run()`]: Chain::run
/// [`run_cloned()`]: Chain::run_cloned
/// [`into_value()`]: Chain::into_value
/// [`peek()`]: Chain::peek
/// [`take_chain()`]: Chain::take_chain
#[derive(Debug)]
#[must_use = "a chain does nothing further unless it is run"]
pub struct Chain<T> {
    value: T,
    consumed: bool,
}

impl<T> Chain<T> {
    /// Wraps `value` in a fresh chain.
    pub const fn of(value: T) -> Self {
        Self {
            value,
            consumed: false,
        }
    }

    /// Applies `f` to the value and wraps the result in a fresh chain.
    ///
    /// The value is moved into `f`. The output type `U` is free to differ
    /// from `T`.
    pub fn then<F, U>(self, f: F) -> Chain<U>
    where
        F: FnOnce(T) -> U,
    {
        Chain::of(f(self.value))
    }

    /// Applies `f` to a duplicate of the value, leaving `self` untouched.
    pub fn then_ref<F, U>(&self, f: F) -> Chain<U>
    where
        T: Clone,
        F: FnOnce(T) -> U,
    {
        Chain::of(f(self.value.clone()))
    }

    /// Alias for [`Chain::then`], so `.pipe()` reads the same on raw values
    /// and on chains.
    pub fn pipe<F, U>(self, f: F) -> Chain<U>
    where
        F: FnOnce(T) -> U,
    {
        self.then(f)
    }

    /// Calls `f` with the value for its effect and passes the value through.
    ///
    /// The effect happens once, immediately. The returned chain is fresh.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.value);
        Self::of(self.value)
    }

    /// Calls `f` with the value for its effect and re-wraps a duplicate.
    pub fn tap_ref<F>(&self, f: F) -> Self
    where
        T: Clone,
        F: FnOnce(&T),
    {
        f(&self.value);
        Self::of(self.value.clone())
    }

    /// Applies a fallible transform.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`, unchanged.
    pub fn try_then<F, U, E>(self, f: F) -> Result<Chain<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        f(self.value).map(Chain::of)
    }

    /// Marks the chain consumed and moves the value out.
    ///
    /// A default value is left in its place, which [`Chain::peek`] will
    /// report from then on.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::AlreadyConsumed`] if the chain has already been
    /// evaluated. The chain is left unchanged in that case.
    pub fn run(&mut self) -> Result<T, ChainError>
    where
        T: Default,
    {
        self.consume()?;
        Ok(std::mem::take(&mut self.value))
    }

    /// Marks the chain consumed and returns a duplicate of the value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::AlreadyConsumed`] if the chain has already been
    /// evaluated.
    pub fn run_cloned(&mut self) -> Result<T, ChainError>
    where
        T: Clone,
    {
        self.consume()?;
        Ok(self.value.clone())
    }

    /// Consumes the chain and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::AlreadyConsumed`] if the chain has already been
    /// evaluated through [`Chain::run`] or [`Chain::run_cloned`].
    pub fn into_value(mut self) -> Result<T, ChainError> {
        self.consume()?;
        Ok(self.value)
    }

    /// Returns a reference to the current value.
    pub const fn peek(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the current value.
    pub fn peek_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns `true` once the chain has been evaluated.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Moves this chain out, leaving a fresh default chain in its place.
    ///
    /// The returned chain keeps the consumed state of `self`.
    pub fn take_chain(&mut self) -> Self
    where
        T: Default,
    {
        std::mem::take(self)
    }

    fn consume(&mut self) -> Result<(), ChainError> {
        if self.consumed {
            tracing::debug!(
                value_type = type_name::<T>(),
                "rejected evaluation of consumed chain"
            );
            return Err(ChainError::AlreadyConsumed);
        }

        self.consumed = true;
        tracing::trace!(value_type = type_name::<T>(), "chain evaluated");
        Ok(())
    }
}

/// Copies start fresh regardless of the source's consumed state.
impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self::of(self.value.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
        self.consumed = false;
    }
}

impl<T: Default> Default for Chain<T> {
    fn default() -> Self {
        Self::of(T::default())
    }
}

impl<T> From<T> for Chain<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}
