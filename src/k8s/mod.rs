mod scale;
mod workloads;

pub use scale::*;
pub use workloads::*;

use std::fmt;

/// Identifies one Deployment in one namespace. Derived by listing,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRef {
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for DeploymentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
