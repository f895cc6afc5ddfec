use crate::equals_result::{EqualsResult, IntoEqualsResult, EQUAL};
use crate::unequal::{ElementLeft, ElementRight, Sequence, Unequal};
use std::fmt::Debug;
use tracing::trace;

/// Compares two slices without regard to element order.
///
/// The slices must have the same length, and every left element must equal at least one right
/// element according to `element_equals`. Right elements are scanned in order and the scan for a
/// left element stops at its first match, so the worst case is `left.len() * right.len()`
/// comparator calls.
///
/// When a left element matches nothing, the result is `ArrayElement` carrying the mismatch against
/// every right element, in right-hand order.
pub fn compare_arrays<'a, T, F, R>(
    left: &'a [T],
    right: &'a [T],
    element_equals: F,
) -> EqualsResult<'a>
where
    T: Debug,
    F: Fn(&'a T, &'a T) -> R,
    R: IntoEqualsResult<'a>,
{
    if left.len() != right.len() {
        return Err(Unequal::ArrayLength {
            left: Sequence::new(left),
            right: Sequence::new(right),
        });
    }

    'left: for (element_index, left_element) in left.iter().enumerate() {
        let mut unequals = vec![];

        for right_element in right {
            match element_equals(left_element, right_element)
                .into_equals_result(left_element, right_element)
            {
                Ok(()) => continue 'left,
                Err(unequal) => unequals.push(unequal),
            }
        }

        trace!(
            element_index,
            candidates = unequals.len(),
            "array element matched no right-hand element"
        );

        return Err(Unequal::ArrayElement {
            left: ElementLeft {
                array: Sequence::new(left),
                element: left_element,
                element_index,
            },
            right: ElementRight {
                array: Sequence::new(right),
                unequals,
            },
        });
    }

    EQUAL
}
