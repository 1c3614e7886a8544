use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// Source of values for `${NAME}` placeholders.
///
/// Returning `None` means the name is unknown; the expander then substitutes
/// nothing.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Reads variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        // The OS cannot hold these names, and some platforms panic on them.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }

        env::var_os(name).map(|value| Cow::Owned(value.to_string_lossy().into_owned()))
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

/// Lookup backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`Lookup`].
///
/// ```
/// use strexpand::{from_fn, Expander};
///
/// let lookup = from_fn(|name: &str| (name == "HOME").then(|| "/home/me".to_string()));
/// assert_eq!(Expander::new(lookup).expand("${HOME}/bin"), "/home/me/bin");
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    FromFn(f)
}

impl<F> Lookup for FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (self.0)(name).map(Cow::Owned)
    }
}
