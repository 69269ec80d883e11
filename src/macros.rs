/// Builds a [`Row`](crate::Row) from literals.
///
/// Each element is converted with [`Field::from`](crate::Field); the bare
/// word `null` becomes [`Field::Null`](crate::Field::Null). Elements are
/// single tokens, so wrap negative numbers and other expressions in
/// parentheses.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{row, Field};
///
/// let r = row!["my", null, 4.2, 2, (-1)];
/// assert_eq!(
///     r,
///     vec![
///         Field::from("my"),
///         Field::Null,
///         Field::Number(4.2),
///         Field::Number(2.0),
///         Field::Number(-1.0),
///     ]
/// );
///
/// assert!(row![].is_empty());
/// ```
#[macro_export]
macro_rules! row {
    // Handle null
    (@field null) => {
        $crate::Field::Null
    };

    // Handle any other single token
    (@field $elem:tt) => {
        $crate::Field::from($elem)
    };

    // Handle empty row
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };

    // Handle non-empty row
    ($($elem:tt),+ $(,)?) => {
        ::std::vec![$($crate::row!(@field $elem)),+]
    };
}
