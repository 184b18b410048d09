use std::process::ExitCode;

use clap::Parser;
use p24_usd_eur::api::{self, DayFetch};
use p24_usd_eur::error::Result;
use p24_usd_eur::{CURRENCIES, Cli, DayReport, filter_currencies};
use reqwest::Client;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Cli) -> Result<()> {
    let client = Client::builder().build()?;

    let fetched = api::fetch_last_days(&client, args.days).await?;
    let reports: Vec<DayReport> = fetched
        .into_iter()
        .filter_map(DayFetch::into_report)
        .collect();

    let mut reports = filter_currencies(reports, CURRENCIES);
    reports.sort_unstable();

    print_report(&reports);
    Ok(())
}

fn print_report(reports: &[DayReport]) {
    for day in reports {
        println!("Exchange rates for {}:", day.key);
        for rate in &day.rates {
            println!("  {}: {}", rate.currency.as_deref().unwrap_or("?"), rate);
        }
    }
}
