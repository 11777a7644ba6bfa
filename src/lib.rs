#![no_std]
#![warn(missing_docs)]

//! A contiguous growable array type, generic over its allocation capability.
//!
//! [`Vec`] stores its elements in a single heap block obtained from an
//! [`Allocator`], doubling the block geometrically as elements are pushed so
//! that appending N elements performs O(N) total copy work. Every allocation,
//! element construction, and element destruction goes through the allocator
//! explicitly, which makes the container usable with instrumented or pooled
//! allocation strategies; the default capability, [`Global`], is backed by
//! the global Rust allocator.
//!
//! Fallible variants of all capacity-changing operations are provided
//! (e.g. [`try_reserve`](Vec::try_reserve), [`try_push`](Vec::try_push)),
//! returning a [`ReserveError`] instead of panicking.
//!
//! # Examples
//! ```
//! let mut sequence = dynavec::Vec::new();
//! sequence.push(1);
//! sequence.push(2);
//! sequence.insert(1, 9);
//! assert_eq!(sequence, [1, 9, 2]);
//!
//! sequence.remove(0);
//! assert_eq!(sequence.pop(), Some(2));
//! assert_eq!(sequence, [9]);
//! ```

extern crate alloc;

pub mod iter;
pub mod storage;
pub mod vec;

pub use crate::iter::{Iter, IterMut, ReverseIter};
pub use crate::storage::{Allocator, Global};
pub use crate::vec::Vec;

use thiserror::Error;

/// The error type returned when the allocation capability cannot provide
/// a block of the requested size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("allocation of space for {count} elements failed")]
pub struct AllocError {
    /// The element count of the failed request.
    pub count: usize,
}

/// The error type returned by fallible capacity-changing operations on [`Vec`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ReserveError {
    /// The requested capacity exceeds [`Vec::max_size`].
    #[error("requested capacity ({requested}) exceeds the maximum supported capacity ({max})")]
    CapacityOverflow {
        /// The capacity that was asked for.
        requested: usize,
        /// The maximum the container can ever hold.
        max: usize,
    },
    /// The allocator could not provide the requested block.
    #[error(transparent)]
    AllocFailed(#[from] AllocError),
}

/// A specialized result type for capacity-changing operations.
pub type Result<T> = core::result::Result<T, ReserveError>;

/// Creates a [`Vec`] containing the given elements.
///
/// `dynavec!` allows vectors to be defined with the same syntax as array
/// expressions:
///
/// ```
/// use dynavec::dynavec;
///
/// let v = dynavec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let v = dynavec![7; 4];
/// assert_eq!(v, [7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! dynavec {
    () => {
        $crate::Vec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vec::from([$($x),+])
    };
}
