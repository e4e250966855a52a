use crate::error::CodegenError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TOOL: &str = "gdbus-codegen";
pub const DEFAULT_INTERFACE_ROOT: &str = "org.hwangsaeul.Gaeul";
pub const DEFAULT_C_NAMESPACE: &str = "GaeulDBus";
pub const DEFAULT_NAME_ANNOTATION: &str = "org.gtk.GDBus.C.Name";

/// Naming constants and the generator binary used for every invocation.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    pub tool: String,
    pub interface_root: String,
    pub c_namespace: String,
    pub name_annotation: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.into(),
            interface_root: DEFAULT_INTERFACE_ROOT.into(),
            c_namespace: DEFAULT_C_NAMESPACE.into(),
            name_annotation: DEFAULT_NAME_ANNOTATION.into(),
        }
    }
}

impl CodegenConfig {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let config_err = |message: String| CodegenError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|err| config_err(err.to_string()))?;
        let config = Self::from_toml(&contents).map_err(|err| config_err(err.to_string()))?;
        if let Some(key) = config.empty_key() {
            return Err(config_err(format!("{key} must not be empty")));
        }
        Ok(config)
    }

    /// First key whose value is empty, in file order.
    pub fn empty_key(&self) -> Option<&'static str> {
        [
            ("tool", &self.tool),
            ("interface_root", &self.interface_root),
            ("c_namespace", &self.c_namespace),
            ("name_annotation", &self.name_annotation),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
    }
}
