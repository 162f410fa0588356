//! Declared option descriptors and the `Opt` builder used to declare them.

use std::fmt;

/// Whether an option is a flag or carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A flag. Never consumes the following token; resolves to `"true"`.
    Boolean,
    /// Consumes the following token as its raw value.
    Other,
}

/// One declared option: a short name, a long name, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    short: Option<char>,
    long: Option<String>,
    kind: ValueKind,
}

impl OptionDescriptor {
    pub fn new(short: Option<char>, long: Option<&str>, kind: ValueKind) -> Self {
        OptionDescriptor {
            short,
            long: long.map(|s| s.to_string()),
            kind,
        }
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == ValueKind::Boolean
    }

    /// Name used for discovery ordering: the short name when present,
    /// otherwise the long name.
    pub(crate) fn sort_key(&self) -> String {
        match (self.short, &self.long) {
            (Some(c), _) => c.to_string(),
            (None, Some(long)) => long.clone(),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, &self.long) {
            (Some(c), Some(long)) => write!(f, "-{}/--{}", c, long),
            (Some(c), None) => write!(f, "-{}", c),
            (None, Some(long)) => write!(f, "--{}", long),
            (None, None) => write!(f, "<unnamed>"),
        }
    }
}

// ============================================================================
// Opt: declaration builder
// ============================================================================

/// Names of a field's option. The value kind is taken from the field type
/// when the declaration is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opt {
    short_name: Option<char>,
    long_name: Option<String>,
}

impl Opt {
    pub fn short(c: char) -> Self {
        Opt {
            short_name: Some(c),
            long_name: None,
        }
    }

    pub fn long(name: &str) -> Self {
        Opt {
            short_name: None,
            long_name: Some(name.to_string()),
        }
    }

    pub fn with_short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    pub fn with_long(mut self, name: &str) -> Self {
        self.long_name = Some(name.to_string());
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub(crate) fn into_descriptor(self, kind: ValueKind) -> OptionDescriptor {
        OptionDescriptor {
            short: self.short_name,
            long: self.long_name,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_both_names() {
        let d = Opt::short('c')
            .with_long("city")
            .into_descriptor(ValueKind::Other);
        assert_eq!(d.short(), Some('c'));
        assert_eq!(d.long(), Some("city"));
        assert!(!d.is_boolean());
    }

    #[test]
    fn sort_key_prefers_short_name() {
        let both = OptionDescriptor::new(Some('n'), Some("name"), ValueKind::Other);
        let long_only = OptionDescriptor::new(None, Some("city"), ValueKind::Other);
        assert_eq!(both.sort_key(), "n");
        assert_eq!(long_only.sort_key(), "city");
    }

    #[test]
    fn display_shows_declared_names() {
        let d = OptionDescriptor::new(Some('v'), None, ValueKind::Boolean);
        assert_eq!(d.to_string(), "-v");
        let d = OptionDescriptor::new(Some('c'), Some("city"), ValueKind::Other);
        assert_eq!(d.to_string(), "-c/--city");
    }
}
