//! String type wrapping [`Cow<'static, str>`].
use std::{borrow::Cow, ops::Deref};

/// A transparent wrapper around [`Cow<'static, str>`].
///
/// Tag names, attribute names and values, and text payloads are all `Str`s,
/// so static literals never allocate.
#[repr(transparent)]
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str {
    inner: Cow<'static, str>,
}

impl core::fmt::Display for Str {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl core::fmt::Debug for Str {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        core::fmt::Debug::fmt(self.inner.as_ref(), f)
    }
}

impl From<&'static str> for Str {
    fn from(s: &'static str) -> Self {
        Str { inner: s.into() }
    }
}

impl From<String> for Str {
    fn from(s: String) -> Self {
        Str { inner: s.into() }
    }
}

impl<'a> From<&'a String> for Str {
    fn from(s: &'a String) -> Self {
        Str {
            inner: s.clone().into(),
        }
    }
}

impl From<Cow<'static, str>> for Str {
    fn from(inner: Cow<'static, str>) -> Self {
        Str { inner }
    }
}

impl<'a> From<&'a Cow<'static, str>> for Str {
    fn from(s: &'a Cow<'static, str>) -> Self {
        Str { inner: s.clone() }
    }
}

impl<'a> From<&'a Str> for Str {
    fn from(s: &'a Str) -> Self {
        s.clone()
    }
}

impl Deref for Str {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for Str {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Str {
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn static_str_is_borrowed() {
        let s = Str::from("div");
        assert!(matches!(s.inner, Cow::Borrowed(_)));
        assert_eq!(s, "div");
    }

    #[test]
    fn orders_by_content() {
        let mut strs = vec![Str::from("b".to_string()), Str::from("a"), Str::from("c")];
        strs.sort();
        assert_eq!(
            strs.iter().map(Str::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
