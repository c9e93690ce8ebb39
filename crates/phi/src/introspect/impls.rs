use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Entries, Introspect, Sequence, SequenceKind, Shape};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Introspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar {
                        is_default: *self == <$ty>::default(),
                    }
                }
            }
        )*
    };
}

impl_scalar!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, (),
    String, Duration,
);

impl Introspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar {
            is_default: self.is_empty(),
        }
    }
}

impl Introspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar {
            is_default: self.is_empty(),
        }
    }
}

// Pointers that can never be absent are transparent.

impl<T: Introspect + ?Sized> Introspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Introspect> Introspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|value| value as &dyn Introspect))
    }
}

impl<T: Introspect> Introspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Sequence::new(
            SequenceKind::Growable,
            self.iter().map(|item| item as &dyn Introspect),
        ))
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Sequence::new(
            SequenceKind::Growable,
            self.iter().map(|item| item as &dyn Introspect),
        ))
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Sequence::new(
            SequenceKind::Fixed,
            self.iter().map(|item| item as &dyn Introspect),
        ))
    }
}

impl<K: Display, V: Introspect, S: BuildHasher> Introspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(Entries::new(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Introspect)),
        ))
    }
}

impl<K: Display, V: Introspect> Introspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(Entries::new(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Introspect)),
        ))
    }
}

#[cfg(feature = "indexmap")]
impl<K: Display, V: Introspect, S: BuildHasher> Introspect for indexmap::IndexMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(Entries::new(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Introspect)),
        ))
    }
}

/// Untyped JSON: `null` is an absent reference, arrays and objects are
/// containers, everything else is a scalar that is zero when `false`, `0` or
/// `""`.
impl Introspect for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        use serde_json::Value;
        match self {
            Value::Null => Shape::Optional(None),
            Value::Bool(value) => Shape::Scalar { is_default: !value },
            Value::Number(number) => Shape::Scalar {
                is_default: number.as_f64() == Some(0.0),
            },
            Value::String(value) => value.shape(),
            Value::Array(items) => items.shape(),
            Value::Object(map) => Shape::Map(Entries::new(
                map.iter()
                    .map(|(key, value)| (key.clone(), value as &dyn Introspect)),
            )),
        }
    }
}

/// Opts a value out of validation.
///
/// The wrapped value is never inspected, so a required `Unchecked` field is
/// never reported and nothing inside it is either. Serializes as the inner
/// value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Unchecked<T>(pub T);

impl<T> Unchecked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Unchecked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Unchecked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Introspect for Unchecked<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported
    }
}
