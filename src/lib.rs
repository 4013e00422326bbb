//! # toolbox
//!
//! Small, dependency-light building blocks for everyday Rust code.
//!
//! ## Overview
//!
//! - **Set**: a generic unordered set with membership queries and
//!   n-ary set algebra (union, intersection, difference and symmetric
//!   difference), in both mutating and constructive forms.
//!
//! ## Feature Flags
//!
//! - `set`: The [`set`] module (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` implementations
//! - `fxhash`: Hash set elements with `rustc-hash`
//! - `ahash`: Hash set elements with `ahash`
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use toolbox::prelude::*;
//!
//! let a = Set::of([1, 2, 3, 4]);
//! let b = Set::of([3, 6]);
//! let c = Set::of([4, 7]);
//!
//! let unique = unique_of(&[&a, &b, &c]);
//! assert_eq!(unique, Set::of([1, 2, 6, 7]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use toolbox::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "set")]
    pub use crate::set::*;
}

#[cfg(feature = "set")]
pub mod set;
