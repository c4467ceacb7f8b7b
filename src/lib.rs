#![no_std]

//! `SlotVec`: a growable vector of fixed-size slots.
//!
//! `SlotVec<T>` stores plain `Copy` values in one contiguous region and grows
//! by doubling when an insertion would exceed its capacity. All positional
//! operations are bounds-checked, and every fallible operation either
//! completes or leaves the container exactly as it was.
//!
//! This crate is `no_std` and only needs `alloc`.
//!
//! # Capacity and Growth
//!
//! - A new container allocates 8 slots (see [`SlotVecConfig`]).
//! - When an insertion would exceed the capacity, the capacity doubles.
//! - Removing elements never shrinks the capacity.
//! - Allocation failure is reported as [`SlotVecError::AllocationFailed`],
//!   never as an abort.
//!
//! ```
//! # use slotvec::SlotVec;
//! let mut numbers = SlotVec::<u32>::new().unwrap();
//! assert_eq!(numbers.capacity(), 8);
//!
//! for i in 0..9 {
//!     numbers.push(i).unwrap();
//! }
//! assert_eq!(numbers.len(), 9);
//! assert_eq!(numbers.capacity(), 16);
//! assert_eq!(numbers.used_bytes(), 36);
//! assert_eq!(numbers.total_bytes(), 64);
//! ```
//!
//! # Positional Access
//!
//! ```
//! # use slotvec::{SlotVec, SlotVecError};
//! let mut letters = SlotVec::from_slice(&['a', 'c']).unwrap();
//!
//! letters.insert(1, 'b').unwrap();
//! assert_eq!(letters.as_slice(), &['a', 'b', 'c']);
//!
//! letters.set(0, 'z').unwrap();
//! assert_eq!(letters.get(0), Some(&'z'));
//!
//! assert_eq!(letters.remove(1), Ok('b'));
//! assert_eq!(
//!     letters.remove(5),
//!     Err(SlotVecError::IndexOutOfBounds { index: 5, length: 2 })
//! );
//! ```
//!
//! # Search
//!
//! Searches scan linearly from the front and use `PartialEq`. The `_by`
//! variants take a caller-supplied predicate instead.
//!
//! ```
//! # use slotvec::SlotVec;
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Person {
//!     id: char,
//!     age: u8,
//! }
//!
//! let mut people = SlotVec::with_label("people").unwrap();
//! people.add_all(&[
//!     Person { id: 'A', age: 25 },
//!     Person { id: 'B', age: 30 },
//!     Person { id: 'C', age: 22 },
//! ]).unwrap();
//!
//! assert_eq!(people.index_of(&Person { id: 'B', age: 30 }), Some(1));
//! assert_eq!(people.index_of_by(|p| p.age < 24), Some(2));
//!
//! let older = people.filtered(|p| p.age >= 25).unwrap();
//! assert_eq!(older.len(), 2);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use slotvec::SlotVec;
//! let numbers = SlotVec::from_slice(&[1, 2, 3]).unwrap();
//!
//! let sum: i32 = numbers.iter().sum();
//! assert_eq!(sum, 6);
//!
//! let reversed: Vec<_> = numbers.iter_rev().copied().collect();
//! assert_eq!(reversed, vec![3, 2, 1]);
//! ```
//!
//! # Logging
//!
//! With the `log` feature enabled, growth events and reported failures are
//! emitted through the `log` facade under the `slotvec` target.

extern crate alloc;

mod config;
mod core;
mod error;
mod iter;
mod logging;

// Re-export public types and traits
pub use crate::config::SlotVecConfig;
pub use crate::core::SlotVec;
pub use crate::error::SlotVecError;
pub use crate::iter::{SlotVecIter, SlotVecRevIter};
