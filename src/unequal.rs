use crate::error::PropertyAccessError;
use std::fmt;

/// A borrowed, type-erased view of one of the compared values.
pub type Operand<'a> = &'a dyn fmt::Debug;

/// The erased view of a compared slice, one operand per element.
#[derive(Clone)]
pub struct Sequence<'a> {
    elements: Vec<Operand<'a>>,
}

impl<'a> Sequence<'a> {
    pub fn new<T: fmt::Debug>(slice: &'a [T]) -> Sequence<'a> {
        Sequence {
            elements: slice.iter().map(|element| element as Operand<'a>).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Operand<'a>> {
        self.elements.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operand<'a>> + '_ {
        self.elements.iter().copied()
    }
}

impl fmt::Debug for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// The left-hand side of an `ArrayElement` mismatch: the element that found no partner.
#[derive(Clone, Debug)]
pub struct ElementLeft<'a> {
    pub array: Sequence<'a>,
    pub element: Operand<'a>,
    pub element_index: usize,
}

/// The right-hand side of an `ArrayElement` mismatch: one unequal per right-hand candidate.
#[derive(Clone, Debug)]
pub struct ElementRight<'a> {
    pub array: Sequence<'a>,
    pub unequals: Vec<Unequal<'a>>,
}

/// Why two values are not equal.
///
/// `Left*`/`Right*` variants name the side that is positionally responsible for the mismatch,
/// so swapping the arguments of a comparison swaps these tags as well.
#[derive(Clone, Debug)]
pub enum Unequal<'a> {
    Primitive {
        left: Operand<'a>,
        right: Operand<'a>,
    },
    BooleanEquals {
        left: Operand<'a>,
        right: Operand<'a>,
    },
    ArrayLength {
        left: Sequence<'a>,
        right: Sequence<'a>,
    },
    ArrayElement {
        left: ElementLeft<'a>,
        right: ElementRight<'a>,
    },
    Property {
        left: Operand<'a>,
        right: Operand<'a>,
        property_name: &'a str,
        property_values_unequal: Box<Unequal<'a>>,
    },
    /// The left optional is empty while the right one holds `right`.
    LeftNull {
        right: Operand<'a>,
    },
    /// The right optional is empty while the left one holds `left`.
    RightNull {
        left: Operand<'a>,
    },
    /// The left value is in its error branch, the right one is not.
    LeftError {
        left: Operand<'a>,
        right: Operand<'a>,
    },
    /// The right value is in its error branch, the left one is not.
    RightError {
        left: Operand<'a>,
        right: Operand<'a>,
    },
    LeftPropertyAccess {
        error: PropertyAccessError,
    },
    RightPropertyAccess {
        error: PropertyAccessError,
    },
}

impl<'a> Unequal<'a> {
    /// The stable name of this mismatch category.
    pub fn tag(&self) -> &'static str {
        match self {
            Unequal::Primitive { .. } => "Primitive",
            Unequal::BooleanEquals { .. } => "BooleanEquals",
            Unequal::ArrayLength { .. } => "ArrayLength",
            Unequal::ArrayElement { .. } => "ArrayElement",
            Unequal::Property { .. } => "Property",
            Unequal::LeftNull { .. } => "LeftNull",
            Unequal::RightNull { .. } => "RightNull",
            Unequal::LeftError { .. } => "LeftError",
            Unequal::RightError { .. } => "RightError",
            Unequal::LeftPropertyAccess { .. } => "LeftPropertyAccess",
            Unequal::RightPropertyAccess { .. } => "RightPropertyAccess",
        }
    }

    /// Follows nested `Property` mismatches down to the innermost one.
    pub fn leaf(&self) -> &Unequal<'a> {
        let mut unequal = self;
        while let Unequal::Property {
            property_values_unequal,
            ..
        } = unequal
        {
            unequal = &**property_values_unequal;
        }
        unequal
    }

    /// The property names leading from the root of the comparison to [`Unequal::leaf`].
    pub fn property_path(&self) -> Vec<&'a str> {
        let mut path = vec![];
        let mut unequal = self;
        while let Unequal::Property {
            property_name,
            property_values_unequal,
            ..
        } = unequal
        {
            path.push(*property_name);
            unequal = &**property_values_unequal;
        }
        path
    }
}

impl fmt::Display for Unequal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unequal::Primitive { left, right } => write!(f, "{:?} != {:?}", left, right),
            Unequal::BooleanEquals { left, right } => {
                write!(f, "{:?} is not equal to {:?}", left, right)
            }
            Unequal::ArrayLength { left, right } => write!(
                f,
                "array lengths differ: {} != {}",
                left.len(),
                right.len()
            ),
            Unequal::ArrayElement { left, right } => write!(
                f,
                "element {} ({:?}) matches none of the {} right-hand elements",
                left.element_index,
                left.element,
                right.array.len()
            ),
            Unequal::Property {
                property_name,
                property_values_unequal,
                ..
            } => match property_values_unequal.as_ref() {
                nested @ Unequal::Property { .. } => {
                    write!(f, "property {:?} > {}", property_name, nested)
                }
                nested => write!(f, "property {:?}: {}", property_name, nested),
            },
            Unequal::LeftNull { right } => write!(f, "left is absent, right is {:?}", right),
            Unequal::RightNull { left } => write!(f, "left is {:?}, right is absent", left),
            Unequal::LeftError { left, right } => {
                write!(f, "left is error {:?}, right is value {:?}", left, right)
            }
            Unequal::RightError { left, right } => {
                write!(f, "left is value {:?}, right is error {:?}", left, right)
            }
            Unequal::LeftPropertyAccess { error } => write!(f, "left read failed: {}", error),
            Unequal::RightPropertyAccess { error } => write!(f, "right read failed: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_property_paths() {
        let (one, two) = (1, 2);
        let (outer, inner) = ("outer", "inner");
        let unequal = Unequal::Property {
            left: &outer,
            right: &outer,
            property_name: "a",
            property_values_unequal: Box::new(Unequal::Property {
                left: &inner,
                right: &inner,
                property_name: "b",
                property_values_unequal: Box::new(Unequal::Primitive {
                    left: &one,
                    right: &two,
                }),
            }),
        };

        assert_eq!(unequal.to_string(), "property \"a\" > property \"b\": 1 != 2");
        assert_eq!(unequal.property_path(), vec!["a", "b"]);
        assert_eq!(unequal.leaf().tag(), "Primitive");
    }

    #[test]
    fn leaf_of_a_non_property_is_itself() {
        let five = 5;
        let unequal = Unequal::RightNull { left: &five };

        assert_eq!(unequal.leaf().tag(), "RightNull");
        assert!(unequal.property_path().is_empty());
        assert_eq!(unequal.to_string(), "left is 5, right is absent");
    }

    #[test]
    fn sequences_render_as_lists() {
        let values = vec![1, 2, 3];
        let sequence = Sequence::new(&values);

        assert_eq!(sequence.len(), 3);
        assert_eq!(format!("{:?}", sequence), "[1, 2, 3]");
        assert_eq!(sequence.get(1).map(|e| format!("{:?}", e)), Some("2".to_string()));
        assert!(sequence.get(3).is_none());
    }

    #[test]
    fn access_failures_render_their_error() {
        let unequal = Unequal::LeftPropertyAccess {
            error: PropertyAccessError::missing("name"),
        };

        assert_eq!(unequal.tag(), "LeftPropertyAccess");
        assert_eq!(
            unequal.to_string(),
            "left read failed: property `name` is missing"
        );
    }
}
