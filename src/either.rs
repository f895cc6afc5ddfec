use crate::equals_result::{EqualsResult, IntoEqualsResult};
use crate::unequal::Unequal;
use std::fmt::Debug;

/// Compares two two-branch values. `Err` is the error branch, `Ok` the value branch.
pub fn compare_either<'a, V, E, FE, FV, RE, RV>(
    left: &'a Result<V, E>,
    right: &'a Result<V, E>,
    error_equals: FE,
    value_equals: FV,
) -> EqualsResult<'a>
where
    V: Debug,
    E: Debug,
    FE: FnOnce(&'a E, &'a E) -> RE,
    FV: FnOnce(&'a V, &'a V) -> RV,
    RE: IntoEqualsResult<'a>,
    RV: IntoEqualsResult<'a>,
{
    match (left, right) {
        (Err(left), Err(right)) => error_equals(left, right).into_equals_result(left, right),
        (Err(left), Ok(right)) => Err(Unequal::LeftError { left, right }),
        (Ok(left), Err(right)) => Err(Unequal::RightError { left, right }),
        (Ok(left), Ok(right)) => value_equals(left, right).into_equals_result(left, right),
    }
}
