use serde::Deserialize;
use std::{
    fs::File,
    io::{stdin, Read},
    path::Path,
};

/// One scale invocation, as delivered by the function trigger.
///
/// Missing payload fields keep their empty/zero values; there is no
/// validation beyond type coercion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleRequest {
    pub cluster_name: Option<String>,
    pub namespaces: Vec<String>,
    pub replicas: i32,
}

impl ScaleRequest {
    /// Reads a JSON payload from a file, or from standard input for `-`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path == Path::new("-") {
            Self::from_reader(stdin())
        } else {
            Self::from_reader(File::open(path)?)
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
