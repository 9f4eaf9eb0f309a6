pub mod harness;
mod radix_key;
mod sort;

pub use radix_key::*;
pub use sort::{partition_by_bit, sort_iterative, sort_recursive, work_list_capacity};
