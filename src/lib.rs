//! # underbar
//!
//! Functional collection primitives for Rust.
//!
//! ## Overview
//!
//! This library provides a small, uniform vocabulary for working with
//! sequences and key-value mappings. Everything is built up from one
//! iteration kernel:
//!
//! - **Collection**: the [`Collection`](collection::Collection) abstraction
//!   over slices, arrays, vectors, deques and maps, plus the
//!   [`each`](collection::each) kernel
//! - **Sequence**: map, filter, reject, uniq, pluck, reduce, contains,
//!   every, some, `index_of` and the positional accessors
//! - **Mapping**: `extend` and `defaults` for merging mappings
//! - **Decorator**: once, memoize, throttle and delay
//! - **Structural**: flatten, zip, intersection, difference, invoke,
//!   `sort_by` and shuffle
//!
//! Operators never modify their inputs (except the explicit target of
//! `extend` and `defaults`) and return materialized `Vec`s.
//!
//! ## Feature Flags
//!
//! - `collection`: The collection abstraction and the iteration kernel
//! - `sequence`: Derived sequence operators
//! - `mapping`: Mapping merge operators
//! - `decorator`: Function decorators (once, memoize, throttle)
//! - `async`: `delay` on the tokio runtime
//! - `structural`: Structural array utilities
//! - `serde`: Serialize/Deserialize for nested sequences
//! - `fxhash` / `ahash`: Faster hashers for the hash-based operators
//! - `full`: Enable all features except the hasher switches
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let scores = vec![72, 95, 88, 95, 61];
//!
//! let passing = filter(&scores, |score, _| *score >= 70);
//! assert_eq!(uniq(&passing), vec![72, 95, 88]);
//! assert_eq!(reduce(&passing, |total, score| total + score, 0), 350);
//! assert!(some(&scores, |score, _| *score < 65));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::UnderbarError;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "structural")]
    pub use crate::nested;
}

pub mod error;

pub use error::UnderbarError;

#[cfg(any(feature = "sequence", feature = "decorator"))]
mod hash;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "structural")]
pub mod structural;
