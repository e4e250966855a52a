use std::fmt;

/// Short D-Bus interface name such as `Encoder`, qualified under a root
/// like `org.hwangsaeul.Gaeul`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<root>.<name>`, without a trailing separator.
    pub fn qualified_prefix(&self, root: &str) -> String {
        format!("{root}.{}", self.0)
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
