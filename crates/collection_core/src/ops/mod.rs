//! Small helpers over sequences and collections.
//!
//! - [`nullable`]: treating an absent collection as empty
//! - [`search`]: positional extrema and subset checks
//! - [`grouping`]: ordering, filtering and grouping into owned collections

pub mod grouping;
pub mod nullable;
pub mod search;

pub use grouping::{make_dictionary, order_by_to_vec, where_to_vec, Order};
pub use nullable::{add_all, is_none_or_empty, or_empty, remove_all};
pub use search::{contains_all, max_index, min_index};
