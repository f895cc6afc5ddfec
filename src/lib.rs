mod array;
mod either;
mod equals_result;
mod equatable;
pub mod error;
mod json;
mod object;
mod optional;
mod unequal;

pub use array::*;
pub use either::*;
pub use equals_result::*;
pub use equatable::*;
pub use json::*;
pub use object::*;
pub use optional::*;
pub use unequal::*;
