// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Indices
//!
//! Phantom-tagged wrappers around `usize`. Columns, neighbor edges and LP
//! variables are all addressed by dense integers; giving each space its own
//! type turns an accidental swap (passing a variable id where a column id is
//! expected) into a compile error. `TypedIndex<T>` is `#[repr(transparent)]`,
//! so the wrapper costs nothing at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use surfrec_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy)]
//! struct ColumnTag;
//! impl TypedIndexTag for ColumnTag { const NAME: &'static str = "Column"; }
//!
//! type Column = TypedIndex<ColumnTag>;
//! let first = Column::new(3);
//! assert_eq!((first + 2).get(), 5);
//! assert_eq!(format!("{}", first), "Column(3)");
//! ```

/// Names an index space for `Display` and `Debug` output.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to the index space described by the tag `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index `offset` positions after `self`, or `None` on overflow.
    ///
    /// ```rust
    /// # use surfrec_core::index::{TypedIndex, TypedIndexTag};
    /// # #[derive(Clone, Copy)]
    /// # struct Tag;
    /// # impl TypedIndexTag for Tag { const NAME: &'static str = "Idx"; }
    /// let idx = TypedIndex::<Tag>::new(usize::MAX - 1);
    /// assert_eq!(idx.checked_offset(1).map(|i| i.get()), Some(usize::MAX));
    /// assert!(idx.checked_offset(2).is_none());
    /// ```
    #[inline]
    pub fn checked_offset(&self, offset: usize) -> Option<Self> {
        self.index.checked_add(offset).map(Self::new)
    }

    /// Iterates over the `count` consecutive indices starting at `first`.
    #[inline]
    pub fn range(first: Self, count: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (first.index..first.index + count).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

impl<T> std::ops::Add<usize> for TypedIndex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.index + rhs)
    }
}

impl<T> std::ops::AddAssign<usize> for TypedIndex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        self.index += rhs;
    }
}
