//! JSON Patch documents applied to flat resource representations
//!
//! Only single-segment pointers such as `/title` are addressable; the
//! patched representations have no nested members.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::error::ApiError;

/// One patch operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Test { path: String, value: Value },
}

/// Ordered list of operations, applied all or nothing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPatch(pub Vec<PatchOperation>);

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("Unsupported patch path '{0}'")]
    InvalidPath(String),

    #[error("Patch path '{0}' does not name a known member")]
    UnknownMember(String),

    #[error("Test failed for patch path '{0}'")]
    TestFailed(String),
}

impl PatchError {
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidPath(path) | Self::UnknownMember(path) | Self::TestFailed(path) => path,
        }
    }
}

impl From<PatchError> for ApiError {
    fn from(err: PatchError) -> Self {
        ApiError::unprocessable(err.to_string())
            .with_param(err.path().to_string())
            .with_code("invalid_patch")
    }
}

impl JsonPatch {
    /// Applies every operation to `document`
    ///
    /// The document is left untouched when any operation fails. Removing
    /// a member resets it to `null`, since every member is always present.
    pub fn apply(&self, document: &mut Map<String, Value>) -> Result<(), PatchError> {
        let mut patched = document.clone();

        for operation in &self.0 {
            match operation {
                PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
                    *member(&mut patched, path)? = value.clone();
                }
                PatchOperation::Remove { path } => {
                    *member(&mut patched, path)? = Value::Null;
                }
                PatchOperation::Test { path, value } => {
                    if *member(&mut patched, path)? != *value {
                        return Err(PatchError::TestFailed(path.clone()));
                    }
                }
            }
        }

        *document = patched;
        Ok(())
    }
}

fn member<'a>(document: &'a mut Map<String, Value>, path: &str) -> Result<&'a mut Value, PatchError> {
    let name = path
        .strip_prefix('/')
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
        .ok_or_else(|| PatchError::InvalidPath(path.to_string()))?;

    let name = name.replace("~1", "/").replace("~0", "~");

    document
        .get_mut(&name)
        .ok_or_else(|| PatchError::UnknownMember(path.to_string()))
}
