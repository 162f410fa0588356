//! The argument scanner.
//!
//! A single left-to-right pass over the argument vector. At each position the
//! token is, in priority order:
//!
//! 1. the `--` delimiter: everything after it is operand text;
//! 2. `--name`, a declared long option;
//! 3. `-x`, a declared short option;
//! 4. `-xyz`, a cluster in which every letter is a declared boolean option;
//! 5. anything else, which is operand text.
//!
//! Scanning goes on past unrecognized tokens, so options after them still
//! match. Only `--` stops it. The operands start at the first token that is
//! neither an option, an option's value nor the delimiter, and run verbatim
//! to the end of the vector.
//!
//! A non-boolean option takes the next token verbatim as its value, whatever
//! that token looks like, or `""` at the end of the vector. A boolean option
//! is always `"true"` and never takes the next token. When an option occurs
//! several times the last value wins.

use log::trace;

use crate::option::OptionDescriptor;

const DELIMITER: &str = "--";
const FLAG_VALUE: &str = "true";

/// A declared option found in the argument vector, with its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'d> {
    descriptor: &'d OptionDescriptor,
    position: usize,
    value: String,
}

impl<'d> Parameter<'d> {
    pub fn descriptor(&self) -> &'d OptionDescriptor {
        self.descriptor
    }

    /// Index of the descriptor in the slice given to [`scan`].
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult<'d> {
    parameters: Vec<Parameter<'d>>,
    operands_index: usize,
    operands: String,
}

impl<'d> ScanResult<'d> {
    /// Matched options, one per descriptor, in descriptor order.
    pub fn parameters(&self) -> &[Parameter<'d>] {
        &self.parameters
    }

    pub fn into_parameters(self) -> Vec<Parameter<'d>> {
        self.parameters
    }

    /// Index of the first operand in the argument vector.
    pub fn operands_index(&self) -> usize {
        self.operands_index
    }

    /// Operand tokens joined by single spaces.
    pub fn operands(&self) -> &str {
        &self.operands
    }
}

enum Token {
    Delimiter,
    Option(usize),
    Cluster(Vec<usize>),
    Unrecognized,
}

fn find_long(descriptors: &[OptionDescriptor], name: &str) -> Option<usize> {
    descriptors.iter().position(|d| d.long() == Some(name))
}

fn find_short(descriptors: &[OptionDescriptor], c: char) -> Option<usize> {
    descriptors.iter().position(|d| d.short() == Some(c))
}

fn classify(arg: &str, descriptors: &[OptionDescriptor]) -> Token {
    if arg == DELIMITER {
        return Token::Delimiter;
    }

    if let Some(name) = arg.strip_prefix("--") {
        return match find_long(descriptors, name) {
            Some(idx) => Token::Option(idx),
            None => Token::Unrecognized,
        };
    }

    let letters = match arg.strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => return Token::Unrecognized,
    };

    let mut chars = letters.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return match find_short(descriptors, c) {
            Some(idx) => Token::Option(idx),
            None => Token::Unrecognized,
        };
    }

    // A cluster is all-or-nothing: one undeclared or non-boolean letter
    // makes the whole token unrecognized.
    let cluster: Option<Vec<usize>> = letters
        .chars()
        .map(|c| find_short(descriptors, c).filter(|&idx| descriptors[idx].is_boolean()))
        .collect();
    match cluster {
        Some(indices) => Token::Cluster(indices),
        None => Token::Unrecognized,
    }
}

/// Match `args` against `descriptors`.
///
/// Never fails: tokens that cannot be matched become operand text.
pub fn scan<'d, S: AsRef<str>>(args: &[S], descriptors: &'d [OptionDescriptor]) -> ScanResult<'d> {
    let mut values: Vec<Option<String>> = vec![None; descriptors.len()];
    let mut next = 0;
    let mut boundary: Option<usize> = None;

    let operands_index = loop {
        let arg = match args.get(next) {
            Some(arg) => arg.as_ref(),
            None => break boundary.unwrap_or(next),
        };

        match classify(arg, descriptors) {
            Token::Delimiter => {
                trace!("delimiter at {}", next);
                break boundary.unwrap_or(next + 1);
            }
            Token::Option(idx) => {
                next += 1;
                let value = if descriptors[idx].is_boolean() {
                    FLAG_VALUE.to_string()
                } else {
                    match args.get(next) {
                        Some(value) => {
                            next += 1;
                            value.as_ref().to_string()
                        }
                        None => String::new(),
                    }
                };
                trace!("{} = {:?}", descriptors[idx], value);
                values[idx] = Some(value);
            }
            Token::Cluster(indices) => {
                next += 1;
                for idx in indices {
                    trace!("{} = {:?} (grouped)", descriptors[idx], FLAG_VALUE);
                    values[idx] = Some(FLAG_VALUE.to_string());
                }
            }
            Token::Unrecognized => {
                if boundary.is_none() {
                    trace!("operands start at {} ({:?})", next, arg);
                    boundary = Some(next);
                }
                next += 1;
            }
        }
    };

    let parameters = values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            value.map(|value| Parameter {
                descriptor: &descriptors[position],
                position,
                value,
            })
        })
        .collect();

    let operands = args[operands_index.min(args.len())..]
        .iter()
        .map(|arg| arg.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    ScanResult {
        parameters,
        operands_index,
        operands,
    }
}
