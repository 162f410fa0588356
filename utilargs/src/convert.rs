//! Conversion of raw option values into typed field values.
//!
//! A [`Chain`] is an ordered list of strategies; the first one that returns
//! `Some` wins. A value no strategy accepts is simply not converted and the
//! field it was meant for keeps its previous value.

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::option::ValueKind;

pub type Strategy<F> = Arc<dyn Fn(&str) -> Option<F> + Send + Sync + 'static>;

pub struct Chain<F> {
    strategies: Vec<Strategy<F>>,
}

impl<F> Chain<F> {
    pub fn new() -> Self {
        Chain {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy, tried after every strategy already in the chain.
    pub fn then<S>(mut self, strategy: S) -> Self
    where
        S: Fn(&str) -> Option<F> + Send + Sync + 'static,
    {
        self.strategies.push(Arc::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn convert(&self, raw: &str) -> Option<F> {
        self.strategies.iter().find_map(|strategy| strategy(raw))
    }
}

impl<F> Clone for Chain<F> {
    fn clone(&self) -> Self {
        Chain {
            strategies: self.strategies.clone(),
        }
    }
}

impl<F> Default for Chain<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> std::fmt::Debug for Chain<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Parse through `FromStr`.
pub fn value_of<F: FromStr>(raw: &str) -> Option<F> {
    raw.parse().ok()
}

/// Construct from the owned string.
pub fn from_string<F: From<String>>(raw: &str) -> Option<F> {
    Some(F::from(raw.to_string()))
}

/// Enumerated types: a fixed table of keywords.
pub trait Keyword: Sized + Clone + 'static {
    const KEYWORDS: &'static [(&'static str, Self)];
}

/// Match a [`Keyword`] table, exactly first, then ignoring ASCII case.
pub fn keyword<F: Keyword>(raw: &str) -> Option<F> {
    F::KEYWORDS
        .iter()
        .find(|(name, _)| *name == raw)
        .or_else(|| {
            F::KEYWORDS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(raw))
        })
        .map(|(_, value)| value.clone())
}

fn boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// ============================================================================
// FromArgument: per-type default chain
// ============================================================================

/// Types a declared field can have without an explicit chain.
pub trait FromArgument: Sized + 'static {
    const KIND: ValueKind = ValueKind::Other;

    fn chain() -> Chain<Self>;
}

impl FromArgument for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn chain() -> Chain<Self> {
        Chain::new().then(boolean)
    }
}

macro_rules! value_of_argument {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArgument for $ty {
                fn chain() -> Chain<Self> {
                    Chain::new().then(value_of::<$ty>)
                }
            }
        )*
    };
}

value_of_argument!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    std::net::IpAddr, std::net::SocketAddr,
);

impl FromArgument for String {
    fn chain() -> Chain<Self> {
        Chain::new().then(from_string::<String>)
    }
}

impl FromArgument for PathBuf {
    fn chain() -> Chain<Self> {
        Chain::new().then(from_string::<PathBuf>)
    }
}

impl FromArgument for OsString {
    fn chain() -> Chain<Self> {
        Chain::new().then(from_string::<OsString>)
    }
}

impl<T: FromArgument> FromArgument for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn chain() -> Chain<Self> {
        let inner = T::chain();
        Chain::new().then(move |raw: &str| inner.convert(raw).map(Some))
    }
}

/// Implement [`FromArgument`] for types that implement [`Keyword`].
///
/// ```
/// use utilargs::{keyword_argument, Keyword};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Scope { Base, One, Sub }
///
/// impl Keyword for Scope {
///     const KEYWORDS: &'static [(&'static str, Self)] =
///         &[("base", Scope::Base), ("one", Scope::One), ("sub", Scope::Sub)];
/// }
///
/// keyword_argument!(Scope);
/// ```
#[macro_export]
macro_rules! keyword_argument {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FromArgument for $ty {
                fn chain() -> $crate::Chain<Self> {
                    $crate::Chain::new().then($crate::convert::keyword::<$ty>)
                }
            }
        )+
    };
}
