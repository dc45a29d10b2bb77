//! Generic extraction trait for enum variants.
//!
//! This module provides the [`ExtractInner`] trait and the macro that
//! implements it, so the record inside a [`crate::ParsedLine`] can be pulled
//! out by type instead of by matching on the variant.
//!
//! # Example
//!
//! ```
//! use abb_rapid::{parse_line, Declared, ExtractInner};
//!
//! let line = parse_line("VAR speeddata fast:=[1000,500,0,0];");
//! let speed: Option<&Declared<Vec<f64>>> = line.as_inner();
//! assert_eq!(speed.unwrap().value, vec![1000.0, 500.0, 0.0, 0.0]);
//! ```

/// Trait for extracting inner types from enums.
///
/// # Type Parameters
///
/// * `T` - The inner type to extract from the enum
pub trait ExtractInner<T> {
    /// Returns `Some(&T)` if the enum variant holds a `T`, otherwise `None`.
    fn as_inner(&self) -> Option<&T>;

    /// Returns `Some(T)` if the enum variant holds a `T`, otherwise `None`.
    /// This consumes the enum.
    fn into_inner(self) -> Option<T>;

    /// Extract a reference to the inner type, panicking if not present.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the enum variant does not hold
    /// the requested type.
    #[inline]
    fn expect_inner(&self, msg: &str) -> &T {
        self.as_inner().expect(msg)
    }
}

/// Implements [`ExtractInner`] for one enum variant.
///
/// ```ignore
/// impl_extract_inner!(ParsedLine, Move, RobotTarget);
/// ```
#[macro_export]
macro_rules! impl_extract_inner {
    ($enum:ty, $variant:ident, $inner:ty) => {
        impl $crate::ExtractInner<$inner> for $enum {
            #[inline]
            fn as_inner(&self) -> Option<&$inner> {
                match self {
                    Self::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn into_inner(self) -> Option<$inner> {
                match self {
                    Self::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}
