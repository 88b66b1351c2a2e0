//! Host value model: the five categories a hash code is computed for.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Opaque identity of a referenced value (table, function, userdata, ...).
///
/// Wraps the object's address. Two identities are equal iff they were taken
/// from the same live object; equal contents at different addresses yield
/// different identities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity(usize);

impl Identity {
    /// The null reference. Reported by the host for an absent argument.
    pub const NULL: Self = Self(0);

    /// Wraps a raw address.
    #[must_use]
    pub const fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    /// Identity of the object behind `value`.
    #[must_use]
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self::from_ptr(std::ptr::from_ref(value))
    }

    /// Identity of the object `ptr` points to. Metadata of fat pointers is
    /// discarded.
    #[must_use]
    pub fn from_ptr<T: ?Sized>(ptr: *const T) -> Self {
        Self(ptr.cast::<()>().addr())
    }

    /// Identity of the allocation shared by all clones of `rc`.
    #[must_use]
    pub fn of_rc<T: ?Sized>(rc: &Rc<T>) -> Self {
        Self::from_ptr(Rc::as_ptr(rc))
    }

    /// Identity of the allocation shared by all clones of `arc`.
    #[must_use]
    pub fn of_arc<T: ?Sized>(arc: &Arc<T>) -> Self {
        Self::from_ptr(Arc::as_ptr(arc))
    }

    /// Returns the wrapped address.
    #[must_use]
    pub const fn addr(self) -> usize {
        self.0
    }

    /// Returns `true` for the null reference.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:#x})", self.0)
    }
}

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `nil`.
    Nil,
    /// `true` / `false`.
    Boolean,
    /// Double-precision number.
    Number,
    /// Byte string.
    String,
    /// Any referenced value: tables, functions, threads, userdata.
    Other,
}

impl Kind {
    /// Host type name, as a script would see it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A script value as handed to a native function.
///
/// Strings borrow their bytes from the caller; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value<'a> {
    /// `nil`.
    #[default]
    Nil,
    /// Boolean.
    Boolean(bool),
    /// Number.
    Number(f64),
    /// String contents. Not required to be UTF-8.
    String(&'a [u8]),
    /// Referenced value, known only by identity.
    Other(Identity),
}

impl<'a> Value<'a> {
    /// Wraps a reference to an arbitrary host object as [`Value::Other`].
    #[must_use]
    pub fn other<T: ?Sized>(object: &T) -> Self {
        Self::Other(Identity::of(object))
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Boolean(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Returns `true` for `nil`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the string bytes, if this is a string.
    #[must_use]
    pub const fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Self::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Computes the hash code of this value. See [`crate::hashcode`].
    #[must_use]
    pub fn hashcode(&self) -> i32 {
        crate::hash::hashcode(self)
    }
}

impl From<()> for Value<'_> {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::String(bytes)
    }
}

impl From<Identity> for Value<'_> {
    fn from(id: Identity) -> Self {
        Self::Other(id)
    }
}

impl<T> From<Option<T>> for Value<'_>
where
    T: Into<Self>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Nil, Into::into)
    }
}
