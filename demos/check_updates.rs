// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use update_checker::{checker::Builder, FetchContext, UpdateStatus};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Pretend we ship commons-lang3 3.9.0 and want to know how far behind
    // the published releases we are.
    let checker = Builder::new(
        "org.apache.commons".to_string(),
        "commons-lang3".to_string(),
        "3.9.0".to_string(),
    )
    .maven_central()
    .build()
    .expect("Should succeed to build the checker");

    let ctx = FetchContext::default();

    println!("------------------------------------------------------------------");
    println!("### available versions:");
    let versions = checker
        .versions(&ctx)
        .await
        .expect("Should succeed to fetch versions");
    for version in &versions {
        println!("{}", version);
    }
    println!("------------------------------------------------------------------");

    println!("### latest:");
    let latest = checker
        .latest_version(&ctx)
        .await
        .expect("Should succeed to fetch the latest version");
    println!("{:?}", latest);
    println!("------------------------------------------------------------------");

    println!("### latest bundle:");
    let bundle_url = checker
        .latest_bundle_url(&ctx)
        .await
        .expect("Should succeed to locate the latest bundle");
    println!("{:?}", bundle_url.map(|url| url.to_string()));
    println!("------------------------------------------------------------------");

    println!("### status:");
    match checker.status(&ctx).await {
        UpdateStatus::UpToDate => println!("up to date"),
        UpdateStatus::Outdated => println!("a newer version is available"),
        UpdateStatus::Unknown => println!("no versioning information found"),
    }
    println!("------------------------------------------------------------------");
}
