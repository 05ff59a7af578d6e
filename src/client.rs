use kube::config::{KubeConfigOptions, KubeconfigError};
use std::future::Future;

#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    #[error("Failed to evaluate configuration: {0}")]
    Config(#[from] KubeconfigError),
    #[error("Failed to create client: {0}")]
    Kube(#[from] kube::Error),
    #[error("Operation failed: {0}")]
    Operation(#[source] E),
}

/// Builds a cluster client from the kubeconfig and runs one operation
/// against it. Failing to obtain the client aborts before the operation
/// runs at all.
#[derive(Clone)]
pub struct Client {
    context: Option<String>,
}

impl Client {
    pub fn new(context: Option<String>) -> Self {
        Self { context }
    }

    pub async fn run<F, Fut, R, E>(&self, f: F) -> Result<R, RunError<E>>
    where
        F: FnOnce(Context) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        // a fresh client every time; a one-shot invocation has nothing to cache
        let config = kube::Config::from_kubeconfig(&KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        })
        .await?;
        let client = kube::Client::try_from(config)?;

        match f(Context { client }).await {
            Ok(result) => Ok(result),
            Err(err) => Err(RunError::Operation(err)),
        }
    }
}

pub struct Context {
    pub client: kube::Client,
}
