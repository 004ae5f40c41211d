//! Build a package and report what was staged

use crate::cli::Cli;
use crate::error::Result;
use colored::Colorize;
use llap_core::{
    DirectoryResolver, LocalBundleFetcher, PackageBuilder, PackageEnvironment,
    PackageReport,
};
use llap_fs::LocalFs;

pub fn run_package(cli: &Cli) -> Result<()> {
    let env = PackageEnvironment::detect(cli.conf_dirs.clone(), cli.home.clone());
    let fs = LocalFs::new();
    let artifacts = DirectoryResolver::new(cli.library_dirs());
    let fetcher = LocalBundleFetcher::new();

    let report = PackageBuilder::new(&env, &fs, &artifacts, &fetcher).build(&cli.package_options())?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &PackageReport) {
    let manifest = &report.manifest;

    println!(
        "{} LLAP package staged in {}",
        "=>".green().bold(),
        report.staging.root().display().to_string().cyan()
    );
    println!("  java.home:      {}", manifest.java_home);
    println!("  container MB:   {}", manifest.container_mb);
    println!("  heap MB:        {}", manifest.memory_per_instance_mb);
    println!("  cache bytes:    {}", manifest.cache_bytes);
    println!("  executors:      {}", manifest.num_executors);
    println!("  resolved keys:  {}", report.resolved.len());
    println!("  steps:          {}", report.steps.completed.len());
    if report.diagnostics.warnings().next().is_some() {
        println!();
    }

    for warning in report.diagnostics.warnings() {
        println!("{} {}", "warn:".yellow().bold(), warning.message);
    }
}
