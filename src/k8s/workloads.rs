use super::{DeploymentRef, Scale};
use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::ListParams, Api, ResourceExt};

/// The two cluster operations a batch needs: enumerate and scale.
///
/// Tests implement this with an in-memory fake; the real implementation
/// talks to the API server.
pub trait Workloads {
    async fn deployments(&self, namespace: &str) -> Result<Vec<DeploymentRef>, kube::Error>;

    async fn scale(&self, target: &DeploymentRef, replicas: i32) -> Result<(), kube::Error>;
}

pub struct ClusterWorkloads {
    client: kube::Client,
}

impl ClusterWorkloads {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl Workloads for ClusterWorkloads {
    async fn deployments(&self, namespace: &str) -> Result<Vec<DeploymentRef>, kube::Error> {
        let deployments = self.api(namespace).list(&ListParams::default()).await?;

        Ok(deployments
            .into_iter()
            .map(|deployment| DeploymentRef {
                namespace: namespace.to_string(),
                name: deployment.name_any(),
            })
            .collect())
    }

    async fn scale(&self, target: &DeploymentRef, replicas: i32) -> Result<(), kube::Error> {
        self.api(&target.namespace)
            .replicas(&target.name, replicas)
            .await
            .map(|_| ())
    }
}
