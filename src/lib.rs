pub mod batch;
pub mod k8s;
pub mod report;
pub mod request;

mod client;

pub use client::{Client, Context, RunError};

use crate::request::ScaleRequest;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Adjust the replica count of deployments
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Kubeconfig context naming the target cluster
    #[clap(short, long, value_parser)]
    pub context: Option<String>,
    /// Verbose
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scale every deployment in the given namespaces
    Scale {
        /// Namespace to process; repeatable, processed in the given order
        #[clap(short, long = "namespace", required = true)]
        namespaces: Vec<String>,
        /// Desired replica count
        #[clap(short, long, value_parser = clap::value_parser!(i32).range(0..))]
        replicas: i32,
    },
    /// Run a JSON scale request, as delivered by the function trigger
    Invoke {
        /// Payload file, or "-" for standard input
        payload: PathBuf,
    },
    /// Scale every deployment in one namespace down to zero
    Drain {
        /// Namespace to drain
        #[clap(short, long, default_value = "default")]
        namespace: String,
    },
}

impl Args {
    /// Lowers the invoked subcommand into a single scale request.
    ///
    /// Defaults (the drain namespace, the zero target) live here, at the
    /// boundary, and nowhere in the operation logic.
    pub fn request(&self) -> anyhow::Result<ScaleRequest> {
        Ok(match &self.command {
            Command::Scale {
                namespaces,
                replicas,
            } => ScaleRequest {
                cluster_name: None,
                namespaces: namespaces.clone(),
                replicas: *replicas,
            },
            Command::Invoke { payload } => ScaleRequest::load(payload)?,
            Command::Drain { namespace } => ScaleRequest {
                cluster_name: None,
                namespaces: vec![namespace.clone()],
                replicas: 0,
            },
        })
    }
}
