//! Container types
//!
//! - **`DynArray<T>`** - growable array with a configurable amortized growth
//!   policy, index-checked access and shifting insert/remove

mod dyn_array;

pub use dyn_array::{DynArray, IntoIter, Iter, IterMut};
