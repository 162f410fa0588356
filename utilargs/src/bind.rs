//! Binding scanned options onto a target.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::option::OptionDescriptor;
use crate::properties;
use crate::registry::{Options, Registry};
use crate::scan::scan;

/// One matched option and what became of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParameter {
    descriptor: OptionDescriptor,
    value: String,
    converted: bool,
}

impl BoundParameter {
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `false` when the value could not be converted and the field was left
    /// as it was.
    pub fn converted(&self) -> bool {
        self.converted
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    parameters: Vec<BoundParameter>,
    operands_index: usize,
    operands: String,
}

impl Binding {
    /// Matched options in discovery order.
    pub fn parameters(&self) -> &[BoundParameter] {
        &self.parameters
    }

    pub fn operands_index(&self) -> usize {
        self.operands_index
    }

    pub fn operands(&self) -> &str {
        &self.operands
    }

    pub fn into_operands(self) -> String {
        self.operands
    }
}

impl<T: 'static> Registry<T> {
    /// Scan `args` and write every matched option into `target`.
    ///
    /// Never fails. A value that cannot be converted leaves its field
    /// unchanged and does not stop the remaining fields from being bound.
    pub fn bind<S: AsRef<str>>(&self, args: &[S], target: &mut T) -> Binding {
        let result = scan(args, self.descriptors());

        let parameters = result
            .parameters()
            .iter()
            .map(|parameter| {
                let converted = self.set(parameter.position(), target, parameter.value());
                if !converted {
                    debug!(
                        "{}: cannot convert {:?}, field left unchanged",
                        parameter.descriptor(),
                        parameter.value()
                    );
                }
                BoundParameter {
                    descriptor: parameter.descriptor().clone(),
                    value: parameter.value().to_string(),
                    converted,
                }
            })
            .collect();

        Binding {
            parameters,
            operands_index: result.operands_index(),
            operands: result.operands().to_string(),
        }
    }
}

/// Bind `args` onto `target` and return the operand text.
pub fn bind<T: Options, S: AsRef<str>>(args: &[S], target: &mut T) -> String {
    Registry::<T>::of().bind(args, target).into_operands()
}

/// Bind a property file onto `target` and return the operand text.
///
/// Only reading the file can fail.
pub fn bind_file<T: Options, P: AsRef<Path>>(path: P, target: &mut T) -> Result<String> {
    let args = properties::read(path)?;
    Ok(bind(&args, target))
}
