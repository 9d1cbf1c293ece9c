use std::cmp::Ordering;
use std::ops::Deref;

/// A [`Vec`] kept sorted and free of duplicates, used to collect the times of
/// a day from several segments.
///
/// ```
/// use showtimes_syntax::ShowTime;
/// use showtimes_syntax::sorted_vec::UniqueSortedVec;
///
/// let times: UniqueSortedVec<_> = vec![
///     ShowTime::new(19, 10),
///     ShowTime::new(15, 30),
///     ShowTime::new(19, 10),
/// ]
/// .into();
///
/// assert_eq!(times.as_slice(), &[ShowTime::new(15, 30), ShowTime::new(19, 10)]);
/// ```
#[repr(transparent)]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct UniqueSortedVec<T>(Vec<T>);

impl<T> UniqueSortedVec<T> {
    /// Create a new empty instance.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T: Ord> UniqueSortedVec<T> {
    /// Merge values of two [`UniqueSortedVec`] while preserving the invariants.
    ///
    /// ```
    /// use showtimes_syntax::sorted_vec::UniqueSortedVec;
    ///
    /// let daily: UniqueSortedVec<_> = vec![16, 22].into();
    /// let also: UniqueSortedVec<_> = vec![11, 22].into();
    /// assert_eq!(daily.union(also).as_slice(), &[11, 16, 22]);
    /// ```
    pub fn union(self, other: Self) -> Self {
        let mut merged = Vec::with_capacity(self.0.len() + other.0.len());
        let mut left = self.0.into_iter().peekable();
        let mut right = other.0.into_iter().peekable();

        loop {
            let next = match (left.peek(), right.peek()) {
                (None, None) => break,
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (Some(x), Some(y)) => match x.cmp(y) {
                    Ordering::Less => left.next(),
                    Ordering::Greater => right.next(),
                    Ordering::Equal => {
                        right.next();
                        left.next()
                    }
                },
            };

            merged.extend(next);
        }

        Self(merged)
    }
}

impl<T: Ord> From<Vec<T>> for UniqueSortedVec<T> {
    #[inline]
    fn from(mut vec: Vec<T>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }
}

impl<T: Ord> From<UniqueSortedVec<T>> for Vec<T> {
    #[inline]
    fn from(val: UniqueSortedVec<T>) -> Self {
        val.0
    }
}

impl<T: Ord> Deref for UniqueSortedVec<T> {
    type Target = Vec<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
