use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{run_fetch, ProjectsClient, ShowcaseConfig, ShowcaseEvent, ShowcaseState};
use shared::domain::Category;
use tracing_subscriber::EnvFilter;

mod render;

use render::{render_view, Rendered};

/// Used when `RUST_LOG` is unset. Logs go to stderr so stdout stays parseable.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(about = "List portfolio projects by category")]
struct Args {
    /// Category id: ALL, STATIC, RESPONSIVE, DYNAMIC or REACT.
    #[arg(long, default_value = "ALL")]
    category: Category,
    /// List every category in selector order instead of one.
    #[arg(long, conflicts_with = "category")]
    all: bool,
    #[arg(long)]
    api_url: Option<String>,
    /// Print display records as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = ShowcaseConfig::load()?;
    if let Some(api_url) = &args.api_url {
        config.set_api_url(api_url)?;
    }
    let client = ProjectsClient::new(config.api_url);
    tracing::debug!(api_url = %client.api_url(), all = args.all, "listing projects");

    let categories: Vec<Category> = if args.all {
        Category::ALL.to_vec()
    } else {
        vec![args.category]
    };

    let mut state = ShowcaseState::new();
    let mut failed = false;
    for category in categories {
        let event = if category == state.selected() && state.latest_request().is_none() {
            ShowcaseEvent::Mounted
        } else {
            ShowcaseEvent::CategoryChanged(category)
        };
        let Some(request) = state.apply(event) else {
            continue;
        };
        let completion = run_fetch(&client, request).await;
        state.apply(completion);

        if args.all {
            println!("== {} ==", category.display_text());
        }
        match render_view(state.view(), args.json)? {
            Rendered::Stdout(text) => println!("{text}"),
            Rendered::Stderr(text) => {
                eprintln!("{text}");
                failed = true;
            }
            Rendered::Nothing => {}
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
