use crate::equals_result::{EqualsResult, IntoEqualsResult, EQUAL};
use crate::error::PropertyAccessError;
use crate::unequal::Unequal;
use std::fmt::Debug;
use tracing::{debug, trace};

/// Compares two objects property by property.
///
/// Only the properties declared on the returned [`ObjectEquals`] are compared, in declaration
/// order. The first mismatching property decides the result and later properties are neither read
/// nor compared.
///
/// ```
/// use equatable::{compare_object, strict_equals};
///
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let (a, b) = (Point { x: 1, y: 2 }, Point { x: 1, y: 3 });
/// let result = compare_object(&a, &b)
///     .field("x", |point| &point.x, strict_equals)
///     .field("y", |point| &point.y, strict_equals)
///     .finish();
///
/// assert_eq!(result.unwrap_err().property_path(), vec!["y"]);
/// ```
pub fn compare_object<'a, O: Debug>(left: &'a O, right: &'a O) -> ObjectEquals<'a, O> {
    ObjectEquals {
        left,
        right,
        result: EQUAL,
    }
}

#[must_use = "call `finish` to obtain the comparison result"]
pub struct ObjectEquals<'a, O> {
    left: &'a O,
    right: &'a O,
    result: EqualsResult<'a>,
}

impl<'a, O: Debug> ObjectEquals<'a, O> {
    /// Declares a property whose read may fail.
    ///
    /// `read` is applied to the left object first; the right object is only read once the left
    /// read succeeded. A failed read ends the comparison with a `Property` mismatch wrapping
    /// `LeftPropertyAccess` or `RightPropertyAccess`.
    pub fn property<P, A, F, R>(mut self, name: &'a str, read: A, equals: F) -> Self
    where
        P: Debug + 'a,
        A: Fn(&'a O) -> Result<&'a P, PropertyAccessError>,
        F: FnOnce(&'a P, &'a P) -> R,
        R: IntoEqualsResult<'a>,
    {
        if self.result.is_ok() {
            self.result = self.compare_property(name, read, equals);
        }
        self
    }

    /// Declares a property that can always be read.
    pub fn field<P, G, F, R>(self, name: &'a str, get: G, equals: F) -> Self
    where
        P: Debug + 'a,
        G: Fn(&'a O) -> &'a P,
        F: FnOnce(&'a P, &'a P) -> R,
        R: IntoEqualsResult<'a>,
    {
        self.property(name, move |object| Ok(get(object)), equals)
    }

    pub fn finish(self) -> EqualsResult<'a> {
        self.result
    }

    fn compare_property<P, A, F, R>(&self, name: &'a str, read: A, equals: F) -> EqualsResult<'a>
    where
        P: Debug + 'a,
        A: Fn(&'a O) -> Result<&'a P, PropertyAccessError>,
        F: FnOnce(&'a P, &'a P) -> R,
        R: IntoEqualsResult<'a>,
    {
        let left_value = match read(self.left) {
            Ok(value) => value,
            Err(error) => {
                debug!(property = name, %error, "left property read failed");
                return Err(self.unequal_property(name, Unequal::LeftPropertyAccess { error }));
            }
        };
        let right_value = match read(self.right) {
            Ok(value) => value,
            Err(error) => {
                debug!(property = name, %error, "right property read failed");
                return Err(self.unequal_property(name, Unequal::RightPropertyAccess { error }));
            }
        };

        equals(left_value, right_value)
            .into_equals_result(left_value, right_value)
            .map_err(|unequal| {
                trace!(property = name, tag = unequal.tag(), "property values unequal");
                self.unequal_property(name, unequal)
            })
    }

    fn unequal_property(&self, name: &'a str, unequal: Unequal<'a>) -> Unequal<'a> {
        Unequal::Property {
            left: self.left,
            right: self.right,
            property_name: name,
            property_values_unequal: Box::new(unequal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::compare_arrays;
    use crate::equals_result::{primitive_equals, strict_equals};
    use crate::optional::compare_optional;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Account {
        id: u32,
        owner: String,
        tags: Vec<String>,
        parent: Option<u32>,
    }

    fn account(id: u32, owner: &str) -> Account {
        Account {
            id,
            owner: owner.to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            parent: None,
        }
    }

    fn compare_accounts<'a>(left: &'a Account, right: &'a Account) -> EqualsResult<'a> {
        compare_object(left, right)
            .field("id", |account| &account.id, strict_equals)
            .field("owner", |account| &account.owner, primitive_equals)
            .field("tags", |account| &account.tags, |left, right| {
                compare_arrays(left, right, strict_equals)
            })
            .field("parent", |account| &account.parent, |left, right| {
                compare_optional(left, right, strict_equals)
            })
            .finish()
    }

    #[test]
    fn identical_objects_are_equal() {
        let value = account(1, "jane");
        assert!(compare_accounts(&value, &value).is_ok());
    }

    #[test]
    fn no_declared_properties_is_equal() {
        let (left, right) = (account(1, "jane"), account(2, "john"));
        assert!(compare_object(&left, &right).finish().is_ok());
    }

    #[test]
    fn undeclared_properties_are_ignored() {
        let (left, right) = (account(1, "jane"), account(1, "john"));
        let result = compare_object(&left, &right)
            .field("id", |account| &account.id, strict_equals)
            .finish();

        assert!(result.is_ok());
    }

    #[test]
    fn mismatching_property_wraps_the_nested_unequal() {
        let (left, right) = (account(1, "jane"), account(1, "john"));

        match compare_accounts(&left, &right) {
            Err(Unequal::Property {
                property_name,
                property_values_unequal,
                ..
            }) => {
                assert_eq!(property_name, "owner");
                assert_eq!(property_values_unequal.to_string(), "\"jane\" != \"john\"");
            }
            otherwise => panic!("unexpected {:?}", otherwise),
        }
    }

    #[test]
    fn nested_comparator_chains_are_preserved() {
        let left = account(1, "jane");
        let mut right = account(1, "jane");
        right.parent = Some(7);

        let unequal = compare_accounts(&left, &right).unwrap_err();

        assert_eq!(unequal.property_path(), vec!["parent"]);
        assert_eq!(unequal.leaf().tag(), "LeftNull");
        assert_eq!(
            unequal.to_string(),
            "property \"parent\": left is absent, right is 7"
        );
    }

    #[test]
    fn later_properties_are_not_evaluated_after_a_mismatch() {
        let (left, right) = (account(1, "jane"), account(2, "john"));
        let reads = Cell::new(0);
        let comparisons = Cell::new(0);

        let result = compare_object(&left, &right)
            .field("id", |account| &account.id, strict_equals)
            .property(
                "owner",
                |account| {
                    reads.set(reads.get() + 1);
                    Ok(&account.owner)
                },
                |left, right| {
                    comparisons.set(comparisons.get() + 1);
                    left == right
                },
            )
            .finish();

        assert_eq!(result.map_err(|unequal| unequal.property_path()), Err(vec!["id"]));
        assert_eq!(reads.get(), 0);
        assert_eq!(comparisons.get(), 0);
    }

    #[test]
    fn boolean_comparators_report_boolean_equals() {
        let (left, right) = (account(1, "jane"), account(2, "jane"));
        let result = compare_object(&left, &right)
            .field("id", |account| &account.id, |left, right| left == right)
            .finish();

        match result {
            Err(Unequal::Property {
                property_values_unequal,
                ..
            }) => assert_eq!(property_values_unequal.to_string(), "1 is not equal to 2"),
            otherwise => panic!("unexpected {:?}", otherwise),
        }
    }

    #[test]
    fn left_read_failures_are_captured() {
        let left: HashMap<&str, i32> = HashMap::new();
        let right: HashMap<&str, i32> = [("count", 1)].into_iter().collect();
        let comparisons = Cell::new(0);

        let result = compare_object(&left, &right)
            .property(
                "count",
                |map| map.get("count").ok_or_else(|| PropertyAccessError::missing("count")),
                |left, right| {
                    comparisons.set(comparisons.get() + 1);
                    left == right
                },
            )
            .finish();

        match result {
            Err(Unequal::Property {
                property_name,
                property_values_unequal,
                ..
            }) => {
                assert_eq!(property_name, "count");
                match *property_values_unequal {
                    Unequal::LeftPropertyAccess { error } => {
                        assert_eq!(error, PropertyAccessError::missing("count"))
                    }
                    otherwise => panic!("unexpected {:?}", otherwise),
                }
            }
            otherwise => panic!("unexpected {:?}", otherwise),
        }
        assert_eq!(comparisons.get(), 0);
    }

    #[test]
    fn right_read_failures_are_captured_and_stop_the_comparison() {
        let left = account(1, "jane");
        let right = account(2, "");
        let later = Cell::new(0);

        let result = compare_object(&left, &right)
            .property(
                "owner",
                |account| {
                    if account.owner.is_empty() {
                        Err(PropertyAccessError::failed("owner", "owner was never set"))
                    } else {
                        Ok(&account.owner)
                    }
                },
                strict_equals,
            )
            .field(
                "id",
                |account| {
                    later.set(later.get() + 1);
                    &account.id
                },
                strict_equals,
            )
            .finish();

        let unequal = result.unwrap_err();
        assert_eq!(unequal.leaf().tag(), "RightPropertyAccess");
        assert_eq!(
            unequal.to_string(),
            "property \"owner\": right read failed: property `owner` could not be read: owner was never set"
        );
        assert_eq!(later.get(), 0);
    }
}
