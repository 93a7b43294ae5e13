pub mod constraints;

pub use constraints::{Constraints, Size};
