//! Structural introspection of values.
//!
//! [`Introspect`] classifies a value into a [`Shape`]: a record with
//! described fields, an optional reference, an ordered sequence, a keyed map
//! or a scalar. The walker only ever sees shapes, so one implementation per
//! type is all it takes to make that type validatable. Records get theirs
//! from `#[derive(Introspect)]`; std containers and scalars are covered by
//! the impls in this module.

mod impls;

pub use impls::Unchecked;

/// Classifies a value for the walker.
///
/// Implementations must be cheap and side-effect free: the walker may ask for
/// the shape of the same value more than once.
pub trait Introspect {
    fn shape(&self) -> Shape<'_>;
}

/// Types whose record descriptors are known statically.
///
/// Implemented by `#[derive(Introspect)]` for structs with fields.
pub trait Described {
    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.name() == name)
    }
}

/// Structural kind of a value, borrowing its children.
pub enum Shape<'a> {
    Record(Record<'a>),
    /// `None` when the referent is absent.
    Optional(Option<&'a dyn Introspect>),
    Sequence(Sequence<'a>),
    Map(Entries<'a>),
    Scalar {
        /// The value equals its type's default.
        is_default: bool,
    },
    /// Opaque leaf; nothing below it is validated.
    Unsupported,
}

impl Shape<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Record(_) => ShapeKind::Record,
            Shape::Optional(_) => ShapeKind::Optional,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Map(_) => ShapeKind::Map,
            Shape::Scalar { .. } => ShapeKind::Scalar,
            Shape::Unsupported => ShapeKind::Unsupported,
        }
    }
}

/// Payload-free discriminant of [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Record,
    Optional,
    Sequence,
    Map,
    Scalar,
    Unsupported,
}

/// Static metadata of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    required: bool,
    flattened: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, required: bool) -> Self {
        Self {
            name,
            required,
            flattened: false,
        }
    }

    /// Mark the field as `#[serde(flatten)]`: its own fields sit next to
    /// the parent's on the wire, so it adds no path segment.
    pub const fn flattened(mut self) -> Self {
        self.flattened = true;
        self
    }

    /// External name, as used in reported paths.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn is_flattened(&self) -> bool {
        self.flattened
    }
}

/// The fields of one record value, paired with their descriptors.
pub struct Record<'a> {
    descriptors: &'static [FieldDescriptor],
    values: Vec<&'a dyn Introspect>,
}

impl<'a> Record<'a> {
    /// `values` must follow the order of `descriptors`.
    pub fn new(descriptors: &'static [FieldDescriptor], values: Vec<&'a dyn Introspect>) -> Self {
        debug_assert_eq!(
            descriptors.len(),
            values.len(),
            "every described field needs exactly one value"
        );
        Self {
            descriptors,
            values,
        }
    }

    pub fn descriptors(&self) -> &'static [FieldDescriptor] {
        self.descriptors
    }

    pub fn fields(&self) -> impl Iterator<Item = Field<'a>> + '_ {
        self.descriptors
            .iter()
            .zip(self.values.iter().copied())
            .map(|(descriptor, value)| Field { descriptor, value })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub descriptor: &'static FieldDescriptor,
    pub value: &'a dyn Introspect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Variable length; empty is its zero value.
    Growable,
    /// Fixed length (`[T; N]`); zero when every element is.
    Fixed,
}

/// Elements of a sequence in positional order.
pub struct Sequence<'a> {
    kind: SequenceKind,
    items: Box<dyn Iterator<Item = &'a dyn Introspect> + 'a>,
}

impl<'a> Sequence<'a> {
    pub fn new<I>(kind: SequenceKind, items: I) -> Self
    where
        I: Iterator<Item = &'a dyn Introspect> + 'a,
    {
        Self {
            kind,
            items: Box::new(items),
        }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }
}

impl<'a> Iterator for Sequence<'a> {
    type Item = &'a dyn Introspect;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

/// Entries of a keyed map, keys already rendered to text.
///
/// Iteration order is whatever the underlying map yields.
pub struct Entries<'a> {
    items: Box<dyn Iterator<Item = (String, &'a dyn Introspect)> + 'a>,
}

impl<'a> Entries<'a> {
    pub fn new<I>(items: I) -> Self
    where
        I: Iterator<Item = (String, &'a dyn Introspect)> + 'a,
    {
        Self {
            items: Box::new(items),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (String, &'a dyn Introspect);

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}
