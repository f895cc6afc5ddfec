use crate::equals_result::{EqualsResult, IntoEqualsResult, EQUAL};
use crate::unequal::Unequal;
use std::fmt::Debug;

/// Compares two optional values, delegating to `value_equals` when both are present.
pub fn compare_optional<'a, T, F, R>(
    left: &'a Option<T>,
    right: &'a Option<T>,
    value_equals: F,
) -> EqualsResult<'a>
where
    T: Debug,
    F: FnOnce(&'a T, &'a T) -> R,
    R: IntoEqualsResult<'a>,
{
    match (left, right) {
        (Some(left), Some(right)) => value_equals(left, right).into_equals_result(left, right),
        (Some(left), None) => Err(Unequal::RightNull { left }),
        (None, Some(right)) => Err(Unequal::LeftNull { right }),
        (None, None) => EQUAL,
    }
}
