use std::borrow::Cow;
use std::fmt::{self, Display};

/// A location inside a validated value, from the root down.
///
/// The root itself has no segment. Rendering puts a leading field name bare
/// and makes every later segment self-delimiting: `.name` for fields, `[i]`
/// for sequence positions and `[key]` for map keys, so `a.b[0].c` and
/// `a[k1][k2]` both come out as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(pub Vec<PathSegment>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Record field, by external name
    Field(Cow<'static, str>),
    /// Zero-based sequence position
    Index(usize),
    /// Map key in its rendered form
    Key(String),
}

impl FieldPath {
    /// Create an empty path representing the root value
    pub fn root() -> Self {
        FieldPath(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        FieldPath(segments)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i != 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}
