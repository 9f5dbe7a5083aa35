//! Macros for cursor literals.

/// Build a cursor over literal values.
///
/// # Example
///
/// ```
/// use lazyseq::{cursor, Cursor};
///
/// let mut letters = cursor!['a', 'b'];
/// assert_eq!(letters.next(), Ok('a'));
/// assert_eq!(letters.next(), Ok('b'));
/// assert!(!letters.has_next());
/// ```
#[macro_export]
macro_rules! cursor {
    ($($value:expr),* $(,)?) => {
        $crate::IterCursor::new(::std::vec![$($value),*].into_iter())
    };
}

/// Concatenate cursors, which may have different concrete types.
///
/// # Example
///
/// ```
/// use lazyseq::{chain, cursor, CursorExt};
///
/// let evens = cursor![1, 2, 3, 4].filter(|n| n % 2 == 0);
/// let values: Vec<i32> = chain![cursor![0], evens, cursor![9]].iter().collect();
/// assert_eq!(values, vec![0, 2, 4, 9]);
/// ```
#[macro_export]
macro_rules! chain {
    ($($cursor:expr),* $(,)?) => {
        $crate::ChainCursor::new(::std::vec![$($crate::CursorExt::boxed($cursor)),*])
    };
}
