//! `Inspect` implementations for standard library types.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
    hash::BuildHasher,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

use super::{erase, Inspect, Shape};

// =============================================================================
// Scalars
// =============================================================================

macro_rules! impl_inspect_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::scalar(self)
                }
            }
        )*
    };
}

impl_inspect_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr,
);

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::borrowed(self)
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::borrowed(self)
    }
}

impl Inspect for Path {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(self.to_string_lossy())
    }
}

impl Inspect for PathBuf {
    fn shape(&self) -> Shape<'_> {
        self.as_path().shape()
    }
}

// =============================================================================
// Pointers and wrappers
// =============================================================================

impl<T> Inspect for &T
where
    T: Inspect + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Inspect for Box<T>
where
    T: Inspect + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Inspect for Rc<T>
where
    T: Inspect + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Inspect for Arc<T>
where
    T: Inspect + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<B> Inspect for Cow<'_, B>
where
    B: Inspect + ToOwned + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        self.as_ref().shape()
    }
}

impl<T> Inspect for Option<T>
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Absent,
        }
    }
}

impl Inspect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Absent
    }
}

impl<T: ?Sized> Inspect for PhantomData<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Absent
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> Inspect for [T]
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

impl<T, const N: usize> Inspect for [T; N]
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

impl<T> Inspect for Vec<T>
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

impl<T> Inspect for VecDeque<T>
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

impl<T, S> Inspect for HashSet<T, S>
where
    T: Inspect,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

impl<T> Inspect for BTreeSet<T>
where
    T: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self.iter().map(erase))
    }
}

// =============================================================================
// Mappings
// =============================================================================

fn entry<'a, K, V>((key, value): (&'a K, &'a V)) -> (Cow<'a, str>, &'a dyn Inspect)
where
    K: fmt::Display,
    V: Inspect,
{
    (Cow::Owned(key.to_string()), value)
}

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: fmt::Display,
    V: Inspect,
    S: BuildHasher,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(Box::new(self.iter().map(entry)))
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: fmt::Display,
    V: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(Box::new(self.iter().map(entry)))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, BTreeSet, VecDeque},
        net::{IpAddr, Ipv4Addr},
        rc::Rc,
        sync::Arc,
    };

    use super::{erase, Inspect, Shape};

    fn scalar(value: &dyn Inspect) -> String {
        match value.shape() {
            Shape::Scalar(text) => text.into_owned(),
            other => panic!("expected scalar, got {}", other.kind()),
        }
    }

    fn sequence_len(value: &dyn Inspect) -> usize {
        match value.shape() {
            Shape::Sequence(elements) => elements.count(),
            other => panic!("expected sequence, got {}", other.kind()),
        }
    }

    #[test]
    fn numbers_and_flags_are_scalars() {
        assert_eq!(scalar(&42_i32), "42");
        assert_eq!(scalar(&1.5_f64), "1.5");
        assert_eq!(scalar(&true), "true");
        assert_eq!(scalar(&'x'), "x");
    }

    #[test]
    fn strings_borrow_their_contents() {
        let owned = String::from("alice");
        match owned.shape() {
            Shape::Scalar(std::borrow::Cow::Borrowed(text)) => assert_eq!(text, "alice"),
            other => panic!("expected borrowed scalar, got {other:?}"),
        }
        assert_eq!(scalar(&"bob"), "bob");
    }

    #[test]
    fn addresses_render_through_display() {
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(scalar(&ip), "10.0.0.1");
    }

    #[test]
    fn option_none_is_absent() {
        let value: Option<i32> = None;
        assert!(matches!(value.shape(), Shape::Absent));
        assert_eq!(scalar(&Some(7_u8)), "7");
        assert!(matches!(().shape(), Shape::Absent));
        assert!(matches!(std::marker::PhantomData::<String>.shape(), Shape::Absent));
    }

    #[test]
    fn pointers_delegate_to_target() {
        assert_eq!(scalar(&Box::new(3_i64)), "3");
        assert_eq!(scalar(&Rc::new("rc")), "rc");
        assert_eq!(scalar(&Arc::new(String::from("arc"))), "arc");
    }

    #[test]
    fn collections_are_sequences() {
        assert_eq!(sequence_len(&vec![1, 2, 3]), 3);
        assert_eq!(sequence_len(&[1_u8; 4]), 4);
        assert_eq!(sequence_len(&VecDeque::from(vec!["a"])), 1);
        assert_eq!(sequence_len(&BTreeSet::from([1, 2])), 2);
    }

    #[test]
    fn maps_use_display_keys() {
        let map = BTreeMap::from([(1_u32, "one"), (2, "two")]);
        let Shape::Mapping(entries) = map.shape() else {
            panic!("expected mapping");
        };
        let keys: Vec<String> = entries.map(|(key, _)| key.into_owned()).collect();
        assert_eq!(keys, vec!["1", "2"]);
    }
}
