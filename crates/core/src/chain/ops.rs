use std::ops::Shr;

use super::Chain;

/// `chain >> f` is `chain.then(f)`.
///
/// Closures on the right-hand side need parentheses and an annotated
/// parameter type. Operator overloads do not propagate the expected
/// signature to them.
///
/// ```
/// use strand_core::Chain;
///
/// let mut chain = Chain::of(5) >> (|x: i32| x * 2) >> (|x: i32| x + 10);
/// assert_eq!(chain.run(), Ok(20));
/// ```
impl<T, F, U> Shr<F> for Chain<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Chain<U>;

    fn shr(self, f: F) -> Self::Output {
        self.then(f)
    }
}

/// `&chain >> f` is `chain.then_ref(f)`.
impl<T, F, U> Shr<F> for &Chain<T>
where
    T: Clone,
    F: FnOnce(T) -> U,
{
    type Output = Chain<U>;

    fn shr(self, f: F) -> Self::Output {
        self.then_ref(f)
    }
}
