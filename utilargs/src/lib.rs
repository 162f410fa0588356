//! Bind POSIX-style command-line options onto the fields of a struct.
//!
//! - [`Options`] / [`Registry`]: a type declares which fields take which
//!   short (`-n`) and long (`--name`) options
//! - [`scan`]: matches an argument vector against the declared options and
//!   splits off the operands
//! - [`Chain`] / [`FromArgument`]: turns raw values into typed field values
//! - [`properties`]: `key=value` files as `--key value` argument vectors
//! - [`UtilArgs`]: does all of the above in one call
//!
//! Binding never fails. Unknown tokens become operands (options after them
//! still match), missing values become `""`, and values that do not convert
//! leave their field untouched. Only reading a property file can return an
//! error.
//!
//! ```
//! use utilargs::{Opt, Options, Registry, UtilArgs};
//!
//! #[derive(Default)]
//! struct Settings {
//!     name: String,
//!     count: u32,
//!     verbose: bool,
//! }
//!
//! impl Options for Settings {
//!     fn declare(registry: &mut Registry<Self>) {
//!         registry
//!             .field(Opt::short('n').with_long("name"), |s| &mut s.name)
//!             .field(Opt::short('c'), |s| &mut s.count)
//!             .field(Opt::short('v'), |s| &mut s.verbose);
//!     }
//! }
//!
//! let args = UtilArgs::process(&["-v", "--name", "Mike", "-c", "3", "a.txt"], Settings::default());
//! assert_eq!(args.target().name, "Mike");
//! assert_eq!(args.target().count, 3);
//! assert!(args.target().verbose);
//! assert_eq!(args.operands(), "a.txt");
//! ```

pub mod bind;
pub mod convert;
pub mod error;
pub mod option;
pub mod properties;
pub mod registry;
pub mod scan;

use std::path::Path;

pub use bind::{bind, bind_file, Binding, BoundParameter};
pub use convert::{Chain, FromArgument, Keyword};
pub use error::{DeclarationError, Error, Result};
pub use option::{Opt, OptionDescriptor, ValueKind};
pub use registry::{Options, Registry};
pub use scan::{scan, Parameter, ScanResult};

/// The outcome of binding one argument vector onto one target.
///
/// Built once per argument vector; holds the arguments, the bound target and
/// what the scan left over.
#[derive(Debug)]
pub struct UtilArgs<T> {
    arguments: Vec<String>,
    target: T,
    binding: Binding,
}

impl<T: Options> UtilArgs<T> {
    pub fn process<S: AsRef<str>>(args: &[S], mut target: T) -> Self {
        let arguments: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let binding = Registry::<T>::of().bind(&arguments, &mut target);
        UtilArgs {
            arguments,
            target,
            binding,
        }
    }

    /// Read `path` as a property file and bind its `key=value` lines as
    /// `--key value` options.
    pub fn process_file<P: AsRef<Path>>(path: P, target: T) -> Result<Self> {
        let arguments = properties::read(path)?;
        Ok(Self::process(&arguments, target))
    }
}

impl<T> UtilArgs<T> {
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Arguments that were not bound, joined by spaces.
    pub fn operands(&self) -> &str {
        self.binding.operands()
    }

    pub fn operands_index(&self) -> usize {
        self.binding.operands_index()
    }

    pub fn parameters(&self) -> &[BoundParameter] {
        self.binding.parameters()
    }
}
