use crate::k8s::Workloads;
use crate::report::{Failure, Outcome, ScaleReport};
use crate::request::ScaleRequest;

/// Applies the requested replica count to every deployment in every
/// requested namespace: namespaces in request order, deployments in
/// listing order, one target at a time.
///
/// A namespace that cannot be listed or a target that cannot be scaled
/// is logged, recorded as a failure and skipped; neither aborts the run.
pub async fn run<W: Workloads>(workloads: &W, request: &ScaleRequest) -> Outcome {
    let mut report = ScaleReport::default();
    let mut failures = Vec::new();

    for namespace in &request.namespaces {
        let targets = match workloads.deployments(namespace).await {
            Ok(targets) => targets,
            Err(err) => {
                let failure = Failure::List {
                    namespace: namespace.clone(),
                    reason: err.to_string(),
                };
                log::error!("{failure}");
                failures.push(failure);
                continue;
            }
        };

        log::debug!("Namespace {namespace}: {} deployment(s)", targets.len());

        for target in targets {
            match workloads.scale(&target, request.replicas).await {
                Ok(()) => {
                    log::info!("Scaled deployment {target} to {} replicas", request.replicas);
                    report.record(&target, request.replicas);
                }
                Err(err) => {
                    let failure = Failure::Scale {
                        target,
                        reason: err.to_string(),
                    };
                    log::error!("{failure}");
                    failures.push(failure);
                }
            }
        }
    }

    if failures.is_empty() {
        Outcome::Complete(report)
    } else {
        Outcome::Partial { report, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::DeploymentRef;
    use kube::error::ErrorResponse;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: reason.to_string(),
            reason: reason.to_string(),
            code,
        })
    }

    /// In-memory stand-in for a cluster: namespaces with deployment
    /// names, plus injectable listing and scaling failures.
    #[derive(Default)]
    struct FakeCluster {
        namespaces: BTreeMap<String, Vec<String>>,
        fail_list: HashSet<String>,
        fail_scale: HashSet<String>,
        scaled: Mutex<Vec<(String, i32)>>,
    }

    impl FakeCluster {
        fn namespace(mut self, namespace: &str, deployments: &[&str]) -> Self {
            self.namespaces.insert(
                namespace.to_string(),
                deployments.iter().map(|d| d.to_string()).collect(),
            );
            self
        }

        fn fail_list(mut self, namespace: &str) -> Self {
            self.fail_list.insert(namespace.to_string());
            self
        }

        fn fail_scale(mut self, target: &str) -> Self {
            self.fail_scale.insert(target.to_string());
            self
        }

        fn scaled(&self) -> Vec<(String, i32)> {
            self.scaled.lock().unwrap().clone()
        }
    }

    impl Workloads for FakeCluster {
        async fn deployments(&self, namespace: &str) -> Result<Vec<DeploymentRef>, kube::Error> {
            if self.fail_list.contains(namespace) {
                return Err(api_error(503, "ServiceUnavailable"));
            }

            Ok(self
                .namespaces
                .get(namespace)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|name| DeploymentRef {
                    namespace: namespace.to_string(),
                    name,
                })
                .collect())
        }

        async fn scale(&self, target: &DeploymentRef, replicas: i32) -> Result<(), kube::Error> {
            if self.fail_scale.contains(&target.to_string()) {
                return Err(api_error(409, "Conflict"));
            }

            self.scaled
                .lock()
                .unwrap()
                .push((target.to_string(), replicas));
            Ok(())
        }
    }

    fn request(namespaces: &[&str], replicas: i32) -> ScaleRequest {
        ScaleRequest {
            cluster_name: None,
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect(),
            replicas,
        }
    }

    #[tokio::test]
    async fn empty_namespace_list_yields_empty_report() {
        let cluster = FakeCluster::default();

        let outcome = run(&cluster, &request(&[], 3)).await;

        assert_eq!(outcome, Outcome::Complete(ScaleReport::default()));
        assert!(cluster.scaled().is_empty());
    }

    #[tokio::test]
    async fn scales_every_deployment_in_every_namespace() {
        let cluster = FakeCluster::default()
            .namespace("ns1", &["a", "b"])
            .namespace("ns2", &[]);

        let outcome = run(&cluster, &request(&["ns1", "ns2"], 3)).await;

        let report = outcome.report();
        assert_eq!(report.len(), 2);
        assert_eq!(report.replicas("ns1/a"), Some(3));
        assert_eq!(report.replicas("ns1/b"), Some(3));
        assert!(matches!(outcome, Outcome::Complete(_)));
    }

    #[tokio::test]
    async fn empty_namespace_produces_no_entries_and_no_failure() {
        let cluster = FakeCluster::default().namespace("ns1", &[]);

        let outcome = run(&cluster, &request(&["ns1"], 2)).await;

        assert!(outcome.report().is_empty());
        assert!(outcome.failures().is_empty());
    }

    #[tokio::test]
    async fn listing_failure_skips_only_that_namespace() {
        let cluster = FakeCluster::default()
            .namespace("ns2", &["c"])
            .fail_list("ns1");

        let outcome = run(&cluster, &request(&["ns1", "ns2"], 1)).await;

        assert_eq!(outcome.report().replicas("ns2/c"), Some(1));
        assert_eq!(outcome.report().len(), 1);
        assert!(matches!(
            outcome.failures(),
            [Failure::List { namespace, .. }] if namespace == "ns1"
        ));
    }

    #[tokio::test]
    async fn scale_failure_skips_only_that_target() {
        let cluster = FakeCluster::default()
            .namespace("ns1", &["a", "b"])
            .fail_scale("ns1/b");

        let outcome = run(&cluster, &request(&["ns1"], 0)).await;

        assert_eq!(outcome.report().replicas("ns1/a"), Some(0));
        assert_eq!(outcome.report().replicas("ns1/b"), None);
        assert!(matches!(
            outcome.failures(),
            [Failure::Scale { target, .. }] if target.to_string() == "ns1/b"
        ));
        assert_eq!(cluster.scaled(), vec![("ns1/a".to_string(), 0)]);
    }

    #[tokio::test]
    async fn targets_are_processed_in_request_then_listing_order() {
        let cluster = FakeCluster::default()
            .namespace("ns2", &["c"])
            .namespace("ns1", &["a", "b"]);

        run(&cluster, &request(&["ns2", "ns1"], 5)).await;

        assert_eq!(
            cluster.scaled(),
            vec![
                ("ns2/c".to_string(), 5),
                ("ns1/a".to_string(), 5),
                ("ns1/b".to_string(), 5),
            ]
        );
    }

    #[tokio::test]
    async fn rerunning_the_same_request_is_idempotent() {
        let cluster = FakeCluster::default().namespace("ns1", &["a"]);
        let request = request(&["ns1"], 4);

        let first = run(&cluster, &request).await;
        let second = run(&cluster, &request).await;

        assert_eq!(first, second);
        assert_eq!(
            cluster.scaled(),
            vec![("ns1/a".to_string(), 4), ("ns1/a".to_string(), 4)]
        );
    }
}
