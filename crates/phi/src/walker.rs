//! The recursive walk that collects missing required fields.
//!
//! `Walker` keeps the current path as a stack (push before visiting a child,
//! pop after) and appends a rendered path for every violation. It never stops
//! early: one walk reports everything.

use std::borrow::Cow;

use tracing::trace;

use crate::introspect::{Entries, Introspect, SequenceKind, Shape};
use crate::options::{MapKeyOrder, ValidateOptions};
use crate::path::{FieldPath, PathSegment};

#[derive(Debug, Clone, Default)]
pub struct Walker {
    options: ValidateOptions,
    path: FieldPath,
    violations: Vec<String>,
}

impl Walker {
    pub fn new(options: ValidateOptions) -> Self {
        Self::at(options, FieldPath::root())
    }

    /// Start below `prefix` instead of at the root, e.g. to validate one
    /// fragment of a larger document.
    pub fn at(options: ValidateOptions, prefix: FieldPath) -> Self {
        Self {
            options,
            path: prefix,
            violations: Vec::new(),
        }
    }

    /// Walk `value` as a non-required slot at the current path.
    pub fn walk(&mut self, value: &dyn Introspect) {
        self.visit_slot(value, false);
    }

    /// Violations recorded so far, in traversal order.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn finish(self) -> Vec<String> {
        self.violations
    }

    fn report(&mut self) {
        let path = self.path.to_string();
        trace!(path = %path, "required field missing");
        self.violations.push(path);
    }

    /// Visit one slot: the root, a field, an element or an entry value.
    ///
    /// `required` only matters once references have been unwrapped; the
    /// zero-value check of the slot itself happens in the enclosing record.
    fn visit_slot(&mut self, value: &dyn Introspect, required: bool) {
        match value.shape() {
            Shape::Optional(referent) => self.visit_referent(referent, required),
            shape => self.descend(shape),
        }
    }

    /// Unwrap any number of optional layers. Dereferencing adds no path
    /// segment; the first absent layer ends the slot.
    fn visit_referent(&mut self, mut referent: Option<&dyn Introspect>, required: bool) {
        loop {
            let Some(value) = referent else {
                if required {
                    self.report();
                }
                return;
            };
            match value.shape() {
                Shape::Optional(next) => referent = next,
                shape => return self.descend(shape),
            }
        }
    }

    fn descend(&mut self, shape: Shape<'_>) {
        match shape {
            Shape::Record(record) => {
                for field in record.fields() {
                    if field.descriptor.is_flattened() {
                        self.visit_flattened(field.value);
                        continue;
                    }
                    let required = field.descriptor.is_required();
                    self.path
                        .push(PathSegment::Field(Cow::Borrowed(field.descriptor.name())));
                    if required && self.is_zero(field.value.shape()) {
                        self.report();
                    } else {
                        self.visit_slot(field.value, required);
                    }
                    self.path.pop();
                }
            }
            Shape::Sequence(items) => {
                for (index, item) in items.enumerate() {
                    self.path.push(PathSegment::Index(index));
                    self.visit_slot(item, false);
                    self.path.pop();
                }
            }
            Shape::Map(entries) => {
                for (key, value) in self.ordered(entries) {
                    self.path.push(PathSegment::Key(key));
                    self.visit_slot(value, false);
                    self.path.pop();
                }
            }
            Shape::Optional(referent) => self.visit_referent(referent, false),
            Shape::Scalar { .. } | Shape::Unsupported => {}
        }
    }

    /// Visit a flattened field at the parent's path. A flattened map holds
    /// the parent's leftover keys, so its entries render as fields.
    fn visit_flattened(&mut self, value: &dyn Introspect) {
        let mut shape = value.shape();
        while let Shape::Optional(referent) = shape {
            let Some(value) = referent else {
                return;
            };
            shape = value.shape();
        }
        match shape {
            Shape::Map(entries) => {
                for (key, value) in self.ordered(entries) {
                    self.path.push(PathSegment::Field(Cow::Owned(key)));
                    self.visit_slot(value, false);
                    self.path.pop();
                }
            }
            shape => self.descend(shape),
        }
    }

    fn ordered<'a>(&self, entries: Entries<'a>) -> Vec<(String, &'a dyn Introspect)> {
        let mut entries: Vec<_> = entries.collect();
        if self.options.map_key_order == MapKeyOrder::Sorted {
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        }
        entries
    }

    /// Whether a slot holds its type's zero value.
    ///
    /// A present reference is never zero, whatever it points at.
    fn is_zero(&self, shape: Shape<'_>) -> bool {
        match shape {
            Shape::Scalar { is_default } => is_default,
            Shape::Optional(referent) => referent.is_none(),
            Shape::Sequence(mut items) => match items.kind() {
                SequenceKind::Growable => {
                    self.options.empty_containers_are_missing && items.next().is_none()
                }
                SequenceKind::Fixed => items.all(|item| self.is_zero(item.shape())),
            },
            Shape::Map(mut entries) => {
                self.options.empty_containers_are_missing && entries.next().is_none()
            }
            Shape::Record(record) => record
                .fields()
                .all(|field| self.is_zero(field.value.shape())),
            Shape::Unsupported => false,
        }
    }
}
