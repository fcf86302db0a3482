use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::Style;
use carousel_core::source::{open_source, parse_with_report, AllowList, ParseReport};

#[derive(Args)]
pub struct ParseArgs {
    /// Listing file or http(s) URL (defaults to source.location from the config)
    pub source: Option<String>,

    /// Accept URLs containing this host fragment; repeatable, replaces the configured list
    #[arg(long = "host")]
    pub hosts: Vec<String>,

    /// Also show skipped lines and why they were dropped
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: &ParseArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let location = args
        .source
        .clone()
        .unwrap_or_else(|| config.source.location.clone());
    let hosts = if args.hosts.is_empty() {
        config.allowed_hosts
    } else {
        AllowList::new(args.hosts.iter().cloned())
    };

    let source = open_source(&location)?;
    let raw = source.fetch()?;
    let report = parse_with_report(&raw, &hosts);
    tracing::debug!(
        images = report.images.len(),
        skipped = report.skipped.len(),
        "Parsed {}",
        source.name()
    );

    if args.report {
        print_report(source.name(), &hosts, &report);
    } else {
        for url in &report.images {
            println!("{url}");
        }
    }

    Ok(())
}

fn print_report(source_name: &str, hosts: &AllowList, report: &ParseReport) {
    let title = Style::new().cyan().bold();
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let url_style = Style::new().green();
    let skipped_style = Style::new().dim().yellow();

    println!();
    println!("  {}", title.apply_to("Image Listing"));
    println!();
    println!("  {:<10}{}", label.apply_to("Source"), value.apply_to(source_name));
    println!("  {:<10}{}", label.apply_to("Hosts"), value.apply_to(hosts));
    println!(
        "  {:<10}{}",
        label.apply_to("Accepted"),
        value.apply_to(report.images.len())
    );
    println!(
        "  {:<10}{}",
        label.apply_to("Skipped"),
        value.apply_to(report.skipped.len())
    );
    println!();

    for (i, url) in report.images.iter().enumerate() {
        println!("  {:>4}  {}", label.apply_to(i + 1), url_style.apply_to(url));
    }

    if !report.skipped.is_empty() {
        println!();
        for skipped in &report.skipped {
            println!(
                "  {:>4}  {} {}",
                label.apply_to(format!("L{}", skipped.line_number)),
                skipped_style.apply_to(format!("[{}]", skipped.reason)),
                skipped.text
            );
        }
    }
    println!();
}
