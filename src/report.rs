use crate::k8s::DeploymentRef;
use serde::Serialize;
use std::collections::BTreeMap;

pub const REPORT_PREFIX: &str = "Scaled Deployments: ";

/// The targets that were actually scaled, keyed `"namespace/name"` and
/// mapped to the replica count applied. Entries are added only on
/// success; a failed target leaves no entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScaleReport(BTreeMap<String, i32>);

impl ScaleReport {
    pub fn record(&mut self, target: &DeploymentRef, replicas: i32) {
        self.0.insert(target.to_string(), replicas);
    }

    pub fn replicas(&self, target: &str) -> Option<i32> {
        self.0.get(target).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Failure {
    #[error("Failed to list deployments in namespace {namespace}: {reason}")]
    List { namespace: String, reason: String },
    #[error("Failed to scale deployment {target}: {reason}")]
    Scale {
        target: DeploymentRef,
        reason: String,
    },
}

/// How far a batch got. Aborting before any work (a configuration or
/// authentication failure) is the `Err` arm of [`crate::Client::run`]
/// instead; by the time an `Outcome` exists, every target was attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every listed target was scaled.
    Complete(ScaleReport),
    /// Some targets were skipped; the report covers the rest.
    Partial {
        report: ScaleReport,
        failures: Vec<Failure>,
    },
}

impl Outcome {
    pub fn report(&self) -> &ScaleReport {
        match self {
            Outcome::Complete(report) => report,
            Outcome::Partial { report, .. } => report,
        }
    }

    pub fn failures(&self) -> &[Failure] {
        match self {
            Outcome::Complete(_) => &[],
            Outcome::Partial { failures, .. } => failures,
        }
    }

    /// The invocation result line: fixed prefix plus the JSON report.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            "{}{}",
            REPORT_PREFIX,
            serde_json::to_string(self.report())?
        ))
    }
}
