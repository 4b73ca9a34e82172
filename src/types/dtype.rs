//! Element type tags

use crate::error::ArrayError;
use std::fmt;
use std::str::FromStr;

/// Data type of the elements of a typed array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DType {
    #[default]
    Int,
    Float,
    Str,
    Bool,
}

impl DType {
    /// Canonical short name
    pub fn name(self) -> &'static str {
        match self {
            DType::Int => "int",
            DType::Float => "float",
            DType::Str => "string",
            DType::Bool => "bool",
        }
    }

    /// Look up a dtype by name, accepting the common aliases
    pub fn from_name(name: &str) -> Result<Self, ArrayError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(DType::Int),
            "float" | "double" => Ok(DType::Float),
            "string" | "str" => Ok(DType::Str),
            "bool" | "boolean" => Ok(DType::Bool),
            _ => Err(ArrayError::UnknownDType(name.to_string())),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DType::Int | DType::Float)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::from_name(s)
    }
}
