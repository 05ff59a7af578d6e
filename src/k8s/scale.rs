use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::autoscaling::v1;
use kube::{
    api::{Patch, PatchParams},
    Api,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt::Debug;

/// Kinds carrying the scale sub-resource.
pub trait Scalable {}

pub trait Scale {
    async fn replicas(&self, name: &str, replicas: i32) -> Result<v1::Scale, kube::Error>;
}

impl<S> Scale for Api<S>
where
    S: Scalable + Clone + DeserializeOwned + Debug,
{
    async fn replicas(&self, name: &str, replicas: i32) -> Result<v1::Scale, kube::Error> {
        let pp = PatchParams::default();
        // patch the scale sub-resource only; the rest of the spec stays untouched
        self.patch_scale(
            name,
            &pp,
            &Patch::Merge(json!({"spec":{"replicas": replicas}})),
        )
        .await
    }
}

impl Scalable for Deployment {}
