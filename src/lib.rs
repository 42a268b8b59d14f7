//! # xsort
//!
//! `xsort` is a stable, adaptive sort for 8-byte elements driven by a three-way comparator
//! that can consult a caller-supplied context. The context makes index sorts, key
//! extraction and collation-aware comparisons possible without materializing wrapper
//! values: sort the handles, and let the comparator look the real data up.
//!
//! ## Key Features
//!
//! - **Quarter-wise divide**: Each run is split into four near-equal quarters that are
//!   sorted independently and then combined.
//! - **Boundary fast paths**: Quarters already in order are left alone, and quarters in
//!   descending block order are reassembled by rotation without a single comparison.
//! - **Parity merge**: The general case merges from both ends at once, halving the
//!   loop-carried dependency chain of a classic merge.
//! - **Explicit work stack**: Divide-and-merge runs on a heap-resident stack of resumable
//!   frames, so native stack usage is constant for any input length.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use xsort::xsort;
//!
//! let mut data = vec![5u64, 3, 1, 4, 2];
//! xsort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ### Context-Aware Comparison
//!
//! Elements are single machine words. To sort anything wider, sort handles and resolve
//! them through the context.
//!
//! ```rust
//! use xsort::xsort_ctx;
//!
//! struct Employee {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let staff = vec![
//!     Employee { name: "Ada", age: 36 },
//!     Employee { name: "Grace", age: 30 },
//!     Employee { name: "Linus", age: 36 },
//! ];
//!
//! let mut handles: Vec<u64> = (0..staff.len() as u64).collect();
//! xsort_ctx(
//!     &mut handles,
//!     |a, b, staff: &Vec<Employee>| staff[*a as usize].age.cmp(&staff[*b as usize].age),
//!     &staff,
//! );
//!
//! let names: Vec<&str> = handles.iter().map(|&h| staff[h as usize].name).collect();
//! assert_eq!(names, vec!["Grace", "Ada", "Linus"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: O(N) comparisons for sorted input, and for input whose quarters sit in
//!   strictly descending block order.
//! - **Worst Case**: O(N log N).
//! - **Memory Overhead**: One scratch buffer equal in size to the input, plus a frame
//!   stack that grows with the logarithm of the input length.

pub mod algo;
pub mod core;
mod engine;
mod kernel;

#[cfg(target_pointer_width = "64")]
pub use algo::{argsort, argsort_by, sort_records_by};
pub use algo::{permute, xsort, xsort_by, xsort_by_key, xsort_ctx, xsort_with};
pub use crate::core::{Comparator, Word};

pub mod prelude {
    #[cfg(target_pointer_width = "64")]
    pub use crate::algo::{argsort, argsort_by, sort_records_by};
    pub use crate::algo::{xsort, xsort_by, xsort_by_key, xsort_ctx, xsort_with};
    pub use crate::core::{Comparator, Word};
}
