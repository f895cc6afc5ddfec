use crate::unequal::{Operand, Unequal};
use std::fmt::Debug;

/// `Ok(())` when the compared values are equal, otherwise a description of the mismatch.
pub type EqualsResult<'a> = Result<(), Unequal<'a>>;

pub const EQUAL: EqualsResult<'static> = Ok(());

/// The outcome of a caller-supplied comparator: either a plain `bool` or a full [`EqualsResult`].
///
/// Every comparator in this crate accepts callbacks returning either, so shallow (`==`-style) and
/// recursive comparators compose without adapters.
pub trait IntoEqualsResult<'a> {
    fn into_equals_result(self, left: Operand<'a>, right: Operand<'a>) -> EqualsResult<'a>;
}

impl<'a> IntoEqualsResult<'a> for bool {
    fn into_equals_result(self, left: Operand<'a>, right: Operand<'a>) -> EqualsResult<'a> {
        if self {
            EQUAL
        } else {
            Err(Unequal::BooleanEquals { left, right })
        }
    }
}

impl<'a> IntoEqualsResult<'a> for EqualsResult<'a> {
    fn into_equals_result(self, _left: Operand<'a>, _right: Operand<'a>) -> EqualsResult<'a> {
        self
    }
}

pub fn normalize<'a, R>(left: Operand<'a>, right: Operand<'a>, outcome: R) -> EqualsResult<'a>
where
    R: IntoEqualsResult<'a>,
{
    outcome.into_equals_result(left, right)
}

/// `==` comparison; a mismatch is reported as `BooleanEquals`.
pub fn strict_equals<'a, T>(left: &'a T, right: &'a T) -> EqualsResult<'a>
where
    T: PartialEq + Debug,
{
    normalize(left, right, left == right)
}

/// `==` comparison for scalar leaves; a mismatch is reported as `Primitive`.
pub fn primitive_equals<'a, T>(left: &'a T, right: &'a T) -> EqualsResult<'a>
where
    T: PartialEq + Debug,
{
    if left == right {
        EQUAL
    } else {
        Err(Unequal::Primitive { left, right })
    }
}

/// Always equal. For properties that statically hold nothing.
pub fn unit_equals<'a>(_left: &'a (), _right: &'a ()) -> EqualsResult<'a> {
    EQUAL
}

/// Lifts a boolean comparator into one returning [`EqualsResult`].
pub fn boolean<'a, T, F>(equals: F) -> impl Fn(&'a T, &'a T) -> EqualsResult<'a>
where
    T: Debug + 'a,
    F: Fn(&T, &T) -> bool,
{
    move |left: &'a T, right: &'a T| normalize(left, right, equals(left, right))
}
