//! The closed set of shapes an inspected value can take.
//!
//! A [`Shape`] is produced on demand by [`Inspect::shape`] and consumed once by
//! the redactor. Containers hand out their children lazily, so nothing below
//! the configured depth is ever visited.

use std::{borrow::Cow, fmt};

use super::Inspect;

/// Lazily produced elements of a [`Shape::Sequence`].
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Inspect> + 'a>;

/// Lazily produced key/value pairs of a [`Shape::Mapping`], keyed by the
/// string form of the underlying key.
pub type Entries<'a> = Box<dyn Iterator<Item = (Cow<'a, str>, &'a dyn Inspect)> + 'a>;

/// How a value presents itself to the redactor.
pub enum Shape<'a> {
    /// No value (`None`, JSON `null`). Absent values are never logged.
    Absent,
    /// A leaf with a meaningful string form.
    Scalar(Cow<'a, str>),
    /// An ordered collection; elements are named by their position.
    Sequence(Elements<'a>),
    /// A key/value container such as a map.
    Mapping(Entries<'a>),
    /// A record with named fields.
    Composite(Vec<Field<'a>>),
}

impl<'a> Shape<'a> {
    /// A scalar rendered through `Display`.
    pub fn scalar<T>(value: &T) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        Self::Scalar(Cow::Owned(value.to_string()))
    }

    /// A scalar borrowing its string form.
    pub fn borrowed(value: &'a str) -> Self {
        Self::Scalar(Cow::Borrowed(value))
    }

    /// A sequence over already type-erased elements.
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Inspect>,
        I::IntoIter: 'a,
    {
        Self::Sequence(Box::new(elements.into_iter()))
    }

    /// A mapping over key/value pairs.
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, &'a dyn Inspect)>,
        I::IntoIter: 'a,
        K: Into<Cow<'a, str>> + 'a,
    {
        Self::Mapping(Box::new(entries.into_iter().map(into_entry::<K>)))
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Absent => "absent",
            Shape::Scalar(_) => "scalar",
            Shape::Sequence(_) => "sequence",
            Shape::Mapping(_) => "mapping",
            Shape::Composite(_) => "composite",
        }
    }
}

fn into_entry<'a, K>((key, value): (K, &'a dyn Inspect)) -> (Cow<'a, str>, &'a dyn Inspect)
where
    K: Into<Cow<'a, str>>,
{
    (key.into(), value)
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Shape::Composite(fields) => f.debug_tuple("Composite").field(fields).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// A named field of a [`Shape::Composite`].
pub struct Field<'a> {
    name: Cow<'a, str>,
    value: FieldValue<'a>,
}

/// The value half of a [`Field`].
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// A value that reports its own shape.
    Inspect(&'a dyn Inspect),
    /// A value only known to be displayable; always a leaf.
    Display(&'a dyn fmt::Display),
}

impl<'a> Field<'a> {
    /// A field whose value is walked through its own [`Inspect`] impl.
    pub fn inspect<N>(name: N, value: &'a dyn Inspect) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        Self {
            name: name.into(),
            value: FieldValue::Inspect(value),
        }
    }

    /// A field rendered through `Display`, for types that do not implement
    /// [`Inspect`].
    pub fn display<N>(name: N, value: &'a dyn fmt::Display) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        Self {
            name: name.into(),
            value: FieldValue::Display(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> FieldValue<'a> {
        self.value
    }

    pub fn into_parts(self) -> (Cow<'a, str>, FieldValue<'a>) {
        (self.name, self.value)
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.value {
            FieldValue::Inspect(_) => "inspect",
            FieldValue::Display(_) => "display",
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &kind)
            .finish()
    }
}
