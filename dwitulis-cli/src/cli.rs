use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "dwitulis",
    version,
    about = "Pengolah teks ganda: satu artikel, dua hasil tulis ulang sekaligus"
)]
pub struct Cli {
    /// Article file to process; reads stdin when omitted
    #[arg(long)]
    pub article: Option<PathBuf>,

    /// Configuration file path (defaults to config/client.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model identifier, overrides the configured one
    #[arg(long)]
    pub model: Option<String>,

    /// File holding the left task instruction, overrides the preset
    #[arg(long)]
    pub left: Option<PathBuf>,

    /// File holding the right task instruction, overrides the preset
    #[arg(long)]
    pub right: Option<PathBuf>,

    /// List the provider's available models and exit
    #[arg(long)]
    pub list_models: bool,
}
