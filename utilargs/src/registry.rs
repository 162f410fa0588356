//! Declared options of a target type.
//!
//! A target type lists its options once, in [`Options::declare`], pairing
//! each option's names with an accessor for the field it binds to:
//!
//! ```
//! use utilargs::{Opt, Options, Registry};
//!
//! #[derive(Default)]
//! struct Settings {
//!     name: String,
//!     verbose: bool,
//! }
//!
//! impl Options for Settings {
//!     fn declare(registry: &mut Registry<Self>) {
//!         registry
//!             .field(Opt::short('n').with_long("name"), |s| &mut s.name)
//!             .field(Opt::short('v'), |s| &mut s.verbose);
//!     }
//! }
//!
//! let registry = Registry::<Settings>::of();
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! Descriptors are kept ordered by primary name (the short name if there is
//! one, else the long name), with ties in registration order.

use log::warn;

use crate::convert::{Chain, FromArgument};
use crate::error::DeclarationError;
use crate::option::{Opt, OptionDescriptor, ValueKind};

/// A type whose fields can be bound from command-line options.
pub trait Options: Sized + 'static {
    fn declare(registry: &mut Registry<Self>);
}

/// Converts a raw value and writes it into the field. Returns `false` when
/// the value could not be converted; the field is then left untouched.
type Setter<T> = Box<dyn Fn(&mut T, &str) -> bool + Send + Sync + 'static>;

pub struct Registry<T> {
    descriptors: Vec<OptionDescriptor>,
    setters: Vec<Setter<T>>,
}

impl<T: Options> Registry<T> {
    /// Collect the declarations of `T`.
    pub fn of() -> Self {
        let mut registry = Registry::new();
        T::declare(&mut registry);
        registry
    }
}

impl<T: 'static> Registry<T> {
    pub fn new() -> Self {
        Registry {
            descriptors: Vec::new(),
            setters: Vec::new(),
        }
    }

    /// Declare a field converted with its type's default chain.
    ///
    /// A declaration that fails validation is skipped with a warning; use
    /// [`Registry::try_field`] to handle the error instead.
    pub fn field<F, A>(&mut self, opt: Opt, accessor: A) -> &mut Self
    where
        F: FromArgument,
        A: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        if let Err(e) = self.try_field(opt, accessor) {
            warn!("ignoring option declaration: {}", e);
        }
        self
    }

    pub fn try_field<F, A>(&mut self, opt: Opt, accessor: A) -> Result<&mut Self, DeclarationError>
    where
        F: FromArgument,
        A: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.insert(opt, F::KIND, accessor, F::chain())
    }

    /// Declare a value-bearing field converted with an explicit chain.
    pub fn field_with<F, A>(&mut self, opt: Opt, accessor: A, chain: Chain<F>) -> &mut Self
    where
        F: 'static,
        A: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        if let Err(e) = self.insert(opt, ValueKind::Other, accessor, chain) {
            warn!("ignoring option declaration: {}", e);
        }
        self
    }

    fn insert<F, A>(
        &mut self,
        opt: Opt,
        kind: ValueKind,
        accessor: A,
        chain: Chain<F>,
    ) -> Result<&mut Self, DeclarationError>
    where
        F: 'static,
        A: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.validate(&opt)?;

        let descriptor = opt.into_descriptor(kind);
        let key = descriptor.sort_key();
        let at = self
            .descriptors
            .partition_point(|existing| existing.sort_key() <= key);

        let setter: Setter<T> = Box::new(move |target: &mut T, raw: &str| match chain.convert(raw) {
            Some(value) => {
                *accessor(target) = value;
                true
            }
            None => false,
        });

        self.descriptors.insert(at, descriptor);
        self.setters.insert(at, setter);
        Ok(self)
    }

    fn validate(&self, opt: &Opt) -> Result<(), DeclarationError> {
        if opt.short_name().is_none() && opt.long_name().is_none() {
            return Err(DeclarationError::Unnamed);
        }

        if let Some(c) = opt.short_name() {
            if c == '-' || c.is_whitespace() || c.is_control() {
                return Err(DeclarationError::InvalidShort(c));
            }
            if self.descriptors.iter().any(|d| d.short() == Some(c)) {
                return Err(DeclarationError::DuplicateShort(c));
            }
        }

        if let Some(long) = opt.long_name() {
            if long.is_empty()
                || long.starts_with('-')
                || long.contains('=')
                || long.chars().any(|c| c.is_whitespace() || c.is_control())
            {
                return Err(DeclarationError::InvalidLong(long.to_string()));
            }
            if self.descriptors.iter().any(|d| d.long() == Some(long)) {
                return Err(DeclarationError::DuplicateLong(long.to_string()));
            }
        }

        Ok(())
    }

    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Convert `raw` and write it into the field declared at `position`.
    pub(crate) fn set(&self, position: usize, target: &mut T, raw: &str) -> bool {
        match self.setters.get(position) {
            Some(setter) => setter(target, raw),
            None => false,
        }
    }
}

impl<T: 'static> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}
