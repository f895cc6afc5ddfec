use crate::array::compare_arrays;
use crate::equals_result::EqualsResult;
use crate::optional::compare_optional;
use std::fmt::Debug;

/// A type that can explain why one of its values differs from another.
///
/// Implementations usually delegate to [`compare_object`](crate::compare_object), using the
/// helpers below as property comparators for nested models.
pub trait Equatable: Debug {
    fn equals<'a>(&'a self, other: &'a Self) -> EqualsResult<'a>;
}

pub fn equatable_equals<'a, T: Equatable>(left: &'a T, right: &'a T) -> EqualsResult<'a> {
    left.equals(right)
}

/// Order-insensitive comparison of two slices of models.
pub fn array_equals<'a, T: Equatable>(left: &'a [T], right: &'a [T]) -> EqualsResult<'a> {
    compare_arrays(left, right, equatable_equals)
}

pub fn maybe_equals<'a, T: Equatable>(
    left: &'a Option<T>,
    right: &'a Option<T>,
) -> EqualsResult<'a> {
    compare_optional(left, right, equatable_equals)
}
