mod args;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AppServicesError, Clock, StatsView};
use storage::Storage;
use ui::{App, build_app_context};

use crate::args::{Args, Command, print_usage};

fn print_stats(stats: &StatsView) {
    let width = stats
        .rows
        .iter()
        .map(|row| row.word.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Word".len());

    println!("{:<width$}  {:>11}  Latest misspelling", "Word", "Times Wrong");
    for row in &stats.rows {
        println!(
            "{:<width$}  {:>11}  {}",
            row.word.as_str(),
            row.wrong_count,
            row.latest_misspelling.as_deref().unwrap_or("-"),
        );
    }
    println!();
    println!(
        "{} mistakes across {} words",
        stats.total_mistakes(),
        stats.words_with_mistakes()
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(
        std::env::args().skip(1),
        std::env::var("SPELLING_DATA_DIR").ok(),
        std::env::var("SPELLING_WORD_LIST").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if args.command == Command::Help {
        print_usage();
        return Ok(());
    }

    let storage = Storage::text_files(&args.data_dir, args.catalog_source()).await?;
    let services = match AppServices::bootstrap(&storage, args.overrides, Clock::default_clock())
        .await
    {
        Ok(services) => services,
        Err(err @ AppServicesError::Catalog(_)) => {
            log::error!("{err}");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    for warning in services.startup_warnings() {
        log::warn!("{warning}");
    }

    match args.command {
        Command::Stats => {
            print_stats(&services.controller().stats());
            Ok(())
        }
        Command::Ui | Command::Help => {
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Spelling Practice")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(build_app_context(services))
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
