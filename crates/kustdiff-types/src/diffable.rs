//! The diffable payload: an ordered list of source/destination mappings.
//!
//! Field names are lower camel case everywhere. Anything else (for instance
//! `SrcPath`) is an unknown field and the whole payload is rejected, so a
//! mis-cased producer fails loudly instead of rendering empty paths.

use serde::{Deserialize, Serialize};

use crate::error::TypeResult;

/// One comparison unit: `src_path` with `src_content` becomes `dst_path`
/// with `dst_content`.
///
/// Paths are display labels only; nothing is read from disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Mapping {
    pub src_path: String,
    pub dst_path: String,
    pub src_content: String,
    pub dst_content: String,
}

impl Mapping {
    pub fn new(
        src_path: impl Into<String>,
        dst_path: impl Into<String>,
        src_content: impl Into<String>,
        dst_content: impl Into<String>,
    ) -> Self {
        Self {
            src_path: src_path.into(),
            dst_path: dst_path.into(),
            src_content: src_content.into(),
            dst_content: dst_content.into(),
        }
    }
}

/// The full ordered set of mappings for one render.
///
/// Order determines the order of sections in every output. Duplicate paths
/// are kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Diffable {
    pub mappings: Vec<Mapping>,
}

impl Diffable {
    pub fn new(mappings: Vec<Mapping>) -> Self {
        Self { mappings }
    }

    /// Parse and validate a JSON payload of the form
    /// `{"mappings": [{"srcPath", "dstPath", "srcContent", "dstContent"}, ...]}`.
    pub fn from_json(payload: &str) -> TypeResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Parse a payload from any reader (a file or stdin).
    pub fn from_reader<R: std::io::Read>(reader: R) -> TypeResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }
}

impl<'a> IntoIterator for &'a Diffable {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}
