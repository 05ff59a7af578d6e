use clap::Parser;
use log::LevelFilter;
use scalectl::{batch, k8s::ClusterWorkloads, report::Outcome, Args, Client};
use std::convert::Infallible;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Configure log
    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let request = args.request()?;

    // The payload's cluster name wins over the command line
    let context = request.cluster_name.clone().or_else(|| args.context.clone());
    let client = Client::new(context);

    let outcome = client
        .run(|ctx| {
            let request = &request;
            async move {
                let workloads = ClusterWorkloads::new(ctx.client);
                Ok::<_, Infallible>(batch::run(&workloads, request).await)
            }
        })
        .await?;

    if let Outcome::Partial { failures, .. } = &outcome {
        log::warn!("{} target(s) could not be scaled", failures.len());
    }

    println!("{}", outcome.render()?);
    Ok(())
}
