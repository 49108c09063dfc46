mod cli;

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use cli::Cli;
use dwitulis_core::{AppConfig, OpenRouterClient, RewritePlan, TaskOutcome, dispatch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();
    debug!(config = ?cli.config, model = ?cli.model, "CLI arguments parsed");

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model.clone() {
        config.model = model;
    }

    let api_key = config.resolve_api_key();
    if api_key.is_none() {
        return Err(format!(
            "API key belum diatur. Setel variabel lingkungan {} terlebih dahulu.",
            config.api_key_env
        )
        .into());
    }

    let client = OpenRouterClient::new(config.endpoint.clone(), api_key)
        .with_chat_timeout(Duration::from_secs(config.chat_timeout_secs));

    if cli.list_models {
        let catalog = client.models().await;
        if let Some(advisory) = &catalog.advisory {
            eprintln!("Catatan: {advisory}");
        }
        for model in &catalog.models {
            println!("{model}");
        }
        return Ok(());
    }

    let article = read_article(&cli)?;
    if article.trim().is_empty() {
        return Err("Artikel tidak boleh kosong.".into());
    }

    let instruction_left = match &cli.left {
        Some(path) => fs::read_to_string(path)?,
        None => config.instructions.left.clone(),
    };
    let instruction_right = match &cli.right {
        Some(path) => fs::read_to_string(path)?,
        None => config.instructions.right.clone(),
    };

    let plan = RewritePlan::new(
        config.model.clone(),
        article,
        instruction_left,
        instruction_right,
    );

    info!(model = config.model.as_str(), "Processing article");
    let pair = dispatch(&client, &plan).await;

    render("Unggahan Media Sosial", &pair.left);
    println!();
    render("Naskah Markdown", &pair.right);

    Ok(())
}

fn read_article(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match &cli.article {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn render(title: &str, outcome: &TaskOutcome) {
    println!("=== {title} ===");
    if outcome.success {
        println!("{}", outcome.content);
    } else {
        println!("[GAGAL] {}", outcome.content);
    }
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
