use std::{any::Any, cmp::Ordering, fmt::Debug};

/// A dynamically typed element of a tuple.
///
/// This is the capability through which the [`Tuple`](crate::Tuple) trait exposes the elements of
/// tuples of any arity under a single type. It is implemented for every `'static` type which is
/// [`Debug`] and [`PartialEq`], which covers all the common value types including `Option<T>`,
/// whose `None` plays the role of an absent element.
///
/// Two elements compare equal only when they are of the same concrete type and equal by that
/// type's own [`PartialEq`]; elements of different types are never equal. Ordering is a separate
/// capability, [`OrderedElement`], since many values can be compared for equality but not ordered.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use polytuple::Element;
///
/// let one: &dyn Element = &1_i32;
/// let set: &dyn Element = &HashSet::from([1_i32]);
///
/// assert!(one.eq_element(&1_i32));
/// assert!(!one.eq_element(&1_i64));
/// assert!(!one.eq_element(set));
/// assert_eq!(set.downcast_ref::<HashSet<i32>>().map(HashSet::len), Some(1));
/// ```
pub trait Element: Any + Debug {
    /// View this element as [`Any`], to recover its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Whether `other` is of the same type as this element and equal to it.
    fn eq_element(&self, other: &dyn Element) -> bool;
}

impl<T: Any + Debug + PartialEq> Element for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_element(&self, other: &dyn Element) -> bool {
        other.downcast_ref::<T>().map_or(false, |other| self == other)
    }
}

impl dyn Element {
    /// Whether this element is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow this element as a `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// An [`Element`] which can also be ordered against other elements of its own type.
///
/// Implemented for every `'static` type which is [`Debug`] and [`PartialOrd`]. This is what
/// [`OrderedTuple::compare`](crate::OrderedTuple::compare) needs of every element.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use polytuple::OrderedElement;
///
/// let one: &dyn OrderedElement = &1_i32;
///
/// assert_eq!(one.partial_cmp_element(&2_i32), Some(Ordering::Less));
/// assert_eq!(one.partial_cmp_element(&"two"), None);
/// assert_eq!(one.partial_cmp_element(&f64::NAN), None);
/// ```
pub trait OrderedElement: Element {
    /// The ordering between this element and `other`, if they are of the same type and that type
    /// orders them.
    fn partial_cmp_element(&self, other: &dyn OrderedElement) -> Option<Ordering>;
}

impl<T: Any + Debug + PartialOrd> OrderedElement for T {
    fn partial_cmp_element(&self, other: &dyn OrderedElement) -> Option<Ordering> {
        other
            .as_any()
            .downcast_ref::<T>()
            .and_then(|other| self.partial_cmp(other))
    }
}
