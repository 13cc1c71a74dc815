//! Coercion of loosely shaped inputs into one-dimensional arrays.
//!
//! Simulation settings arrive as either a single value, nothing at all, or a
//! list of values. [`ArrayLike`] names those three shapes explicitly so callers
//! can normalise them with [`makeiterable`] before indexing.
//!
//! Strings are always scalars here: `ArrayLike::from("abc")` is a single
//! element, never a sequence of characters.

use ndarray::Array1;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArrayLike<T> {
    #[default]
    None,
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> ArrayLike<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Option<T>> for ArrayLike<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Scalar)
    }
}

impl<T> From<Vec<T>> for ArrayLike<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values)
    }
}

impl<T: Clone> From<&[T]> for ArrayLike<T> {
    fn from(values: &[T]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayLike<T> {
    fn from(values: [T; N]) -> Self {
        Self::Sequence(values.into())
    }
}

impl<T> From<Array1<T>> for ArrayLike<T> {
    fn from(values: Array1<T>) -> Self {
        Self::Sequence(values.into_iter().collect())
    }
}

impl From<&str> for ArrayLike<String> {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ArrayLike<String> {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ArrayLike<$ty> {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_from!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

/// Whether `x` can be walked element by element. Strings and `None` cannot.
pub fn isiterable<T>(x: &ArrayLike<T>) -> bool {
    matches!(x, ArrayLike::Sequence(_))
}

/// Whether `x` supports indexed element access.
///
/// Only sequences are indexable; strings count as scalars.
pub fn isarray<T>(x: &ArrayLike<T>) -> bool {
    matches!(x, ArrayLike::Sequence(_))
}

/// Coerce `x` into an array: sequences keep their order, `None` becomes an
/// empty array and any scalar (including a string) becomes a one-element
/// array.
pub fn makeiterable<T>(x: ArrayLike<T>) -> Array1<T> {
    match x {
        ArrayLike::Sequence(values) => Array1::from(values),
        ArrayLike::None => Array1::from(Vec::new()),
        ArrayLike::Scalar(value) => Array1::from(vec![value]),
    }
}
