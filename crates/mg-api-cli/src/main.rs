use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mg_api::{ApiClient, HttpResponse, RequestOptions, RequestParams};
use mg_api_config::{ApiConfig, ConfigManager, ConfigStore};
use mg_api_http::Headers;

#[derive(Parser, Debug)]
#[command(name = "mg-api")]
#[command(about = "Send authenticated GET/POST requests to a JSON API")]
struct Cli {
    /// Config file (defaults to <config dir>/mg-api/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL, overrides the configured one
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Pre-encoded Basic credential, overrides the configured one
    #[arg(long, global = true)]
    auth_hash: Option<String>,

    /// Log request diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the URL for a path under the base URL
    Endpoint {
        /// Path relative to the base URL
        path: Option<String>,
    },
    /// GET a path with query parameters
    Get {
        /// Path relative to the base URL
        path: String,

        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },
    /// POST a JSON body built from parameters
    Post {
        /// Path relative to the base URL
        path: String,

        /// Body field as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Header as name:value (repeatable); replaces the JSON default
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let client = ApiClient::from_config(&config)?;

    let mut stdout = std::io::stdout().lock();
    run(&client, cli.command, &mut stdout).await
}

fn resolve_config(cli: &Cli) -> Result<ApiConfig> {
    let mut manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = manager
        .load_config()
        .with_context(|| format!("failed to load {}", manager.config_path().display()))?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(auth_hash) = &cli.auth_hash {
        config.auth_hash = auth_hash.clone();
    }

    manager.validate_config(&config)?;
    Ok(config)
}

async fn run(client: &ApiClient, command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Endpoint { path } => {
            writeln!(out, "{}", client.endpoint(path.as_deref()))?;
        }
        Commands::Get { path, params } => {
            let params: RequestParams = params.into_iter().collect();
            let response = client.get(&client.endpoint(Some(&path)), &params).await?;
            print_response(out, &response)?;
        }
        Commands::Post {
            path,
            params,
            headers,
        } => {
            let params: RequestParams = params.into_iter().collect();
            let mut options = RequestOptions::default();
            if !headers.is_empty() {
                options = options.with_headers(headers.into_iter().collect::<Headers>());
            }
            let response = client
                .post(&client.endpoint(Some(&path)), &params, options)
                .await
                .ok_or_else(|| anyhow!("POST {path} failed; rerun with --verbose for details"))?;
            print_response(out, &response)?;
        }
    }
    Ok(())
}

fn print_response(out: &mut impl Write, response: &HttpResponse) -> Result<()> {
    writeln!(out, "{}", response.status)?;
    if !response.body.is_empty() {
        writeln!(out, "{}", response.body)?;
    }
    Ok(())
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected name:value, got '{s}'"))
}
