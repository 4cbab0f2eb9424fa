//! Shape reporting: how a value looks to the redactor.
//!
//! Every value reaching the redactor is classified into one of the variants
//! of [`Shape`]:
//!
//! | Shape | Produced by |
//! |-------|-------------|
//! | `Absent` | `None`, `()`, `PhantomData` |
//! | `Scalar` | strings, numbers, `bool`, `char`, addresses, `#[inspect(display)]` types, unit enum variants |
//! | `Sequence` | `Vec`, slices, arrays, `VecDeque`, sets |
//! | `Mapping` | `HashMap` / `BTreeMap` with `Display` keys |
//! | `Composite` | structs and data-carrying variants deriving `Inspect` |
//!
//! Smart pointers and references report the shape of their target.
//!
//! ## External Types
//!
//! A type from another crate that does not implement [`Inspect`] can still be
//! logged: annotate the field with `#[inspect(display)]` to report it through
//! `Display`, or `#[inspect(skip)]` to leave it out.

mod shape;
mod std_impls;

pub use shape::{Elements, Entries, Field, FieldValue, Shape};

/// A value that can describe its own [`Shape`].
///
/// Usually derived with `#[derive(Inspect)]`. Manual implementations pick the
/// variant that matches the value and hand out borrowed children:
///
/// ```rust
/// use redaction_tree::{Inspect, Shape};
///
/// struct Celsius(f64);
///
/// impl Inspect for Celsius {
///     fn shape(&self) -> Shape<'_> {
///         Shape::scalar(&format_args!("{:.1}C", self.0))
///     }
/// }
/// ```
///
/// A derived type whose field lacks an `Inspect` impl does not compile:
///
/// ```compile_fail
/// use redaction_tree::Inspect;
/// use std::time::SystemTime;
///
/// #[derive(Inspect)]
/// struct Record {
///     id: u64,
///     created: SystemTime,
/// }
/// ```
///
/// Neither does a `#[inspect(display)]` container without a `Display` impl:
///
/// ```compile_fail
/// use redaction_tree::Inspect;
///
/// #[derive(Inspect)]
/// #[inspect(display)]
/// struct OrderId(u64);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Inspect`",
    label = "this type cannot be inspected for logging",
    note = "use `#[derive(Inspect)]` on the type definition",
    note = "or annotate the field with `#[inspect(display)]` or `#[inspect(skip)]`"
)]
pub trait Inspect {
    /// Reports the shape of this value.
    fn shape(&self) -> Shape<'_>;
}

/// Unsizes a reference for [`Shape::sequence`] and [`Shape::mapping`].
pub(crate) fn erase<T: Inspect>(value: &T) -> &dyn Inspect {
    value
}
