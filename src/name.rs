use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Create a [`Name`] from a string literal or identifier, checked for validity
/// at compile time.
///
/// A `Name` created this way borrows a `&'static str` and does not own
/// allocated heap memory or a reference counter, so cloning it is extremely
/// cheap.
///
/// # Examples
///
/// ```
/// use graphql_validator::name;
///
/// assert_eq!(name!("Query").as_str(), "Query");
/// assert_eq!(name!(Query).as_str(), "Query");
/// ```
///
/// ```compile_fail
/// # use graphql_validator::name;
/// // error[E0080]: evaluation of constant value failed
/// let invalid = name!("è_é");
/// ```
#[macro_export]
macro_rules! name {
    ($value: ident) => {
        $crate::name!(stringify!($value))
    };
    ($value: expr) => {{
        const _: () = { assert!($crate::Name::valid_syntax($value)) };
        $crate::Name::new_static_unchecked($value)
    }};
}

/// A GraphQL identifier.
///
/// Equality and hashing are by text. Cloning is cheap: the string value is
/// either a `&'static str` borrow that lives until the end of the program or
/// an atomically reference-counted `Arc<str>`.
#[derive(Clone)]
pub struct Name(Repr);

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Heap(Arc<str>),
}

/// Refers to the name of a GraphQL type defined elsewhere.
pub type NamedType = Name;

/// Tried to create a [`Name`] from a string that is not in valid
/// [GraphQL name](https://spec.graphql.org/October2021/#sec-Names) syntax.
#[derive(Clone, Eq, PartialEq, thiserror::Error)]
#[error("`{0}` is not a valid GraphQL name")]
pub struct InvalidNameError(pub String);

impl Name {
    /// Create a new `Name`, validating its syntax.
    pub fn new(value: &str) -> Result<Self, InvalidNameError> {
        if Self::valid_syntax(value) {
            Ok(Self(Repr::Heap(Arc::from(value))))
        } else {
            Err(InvalidNameError(value.to_owned()))
        }
    }

    /// Create a new `Name` from a static string, validating its syntax.
    pub fn new_static(value: &'static str) -> Result<Self, InvalidNameError> {
        if Self::valid_syntax(value) {
            Ok(Self::new_static_unchecked(value))
        } else {
            Err(InvalidNameError(value.to_owned()))
        }
    }

    /// Create a new `Name` from a static string without validity checking.
    ///
    /// Constructing an invalid name this way may produce nonsensical
    /// diagnostics but not memory-safety issues. Prefer the [`name!`]
    /// macro, which performs the check at compile time.
    ///
    /// [`name!`]: crate::name!
    pub const fn new_static_unchecked(value: &'static str) -> Self {
        Self(Repr::Static(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Static(s) => s,
            Repr::Heap(s) => s,
        }
    }

    #[allow(clippy::len_without_is_empty)] // a GraphQL name is never empty
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Returns whether the given string is a valid
    /// [GraphQL name](https://spec.graphql.org/October2021/#Name).
    pub const fn valid_syntax(value: &str) -> bool {
        let bytes = value.as_bytes();
        let Some(&first) = bytes.first() else {
            return false;
        };
        if !Self::char_is_name_start(first) {
            return false;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !Self::char_is_name_continue(bytes[i]) {
                return false;
            }
            i += 1
        }
        true
    }

    /// <https://spec.graphql.org/October2021/#NameStart>
    const fn char_is_name_start(byte: u8) -> bool {
        byte.is_ascii_alphabetic() || byte == b'_'
    }

    /// <https://spec.graphql.org/October2021/#NameContinue>
    const fn char_is_name_continue(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_'
    }
}

impl std::hash::Hash for Name {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl std::ops::Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Name {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for Name {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl Eq for Name {}

impl PartialEq for Name {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Ord for Name {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Name {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<str> for Name {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&'_ str> for Name {
    #[inline]
    fn eq(&self, other: &&'_ str) -> bool {
        self.as_str() == *other
    }
}

impl From<&'_ Self> for Name {
    #[inline]
    fn from(value: &'_ Self) -> Self {
        value.clone()
    }
}

impl TryFrom<&str> for Name {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl serde::Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const EXPECTING: &str = "a string in GraphQL Name syntax";
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = Name;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(EXPECTING)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Name::new(v)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &EXPECTING))
            }
        }
        deserializer.deserialize_str(Visitor)
    }
}

impl fmt::Debug for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
