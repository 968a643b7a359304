use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cadastro")]
#[command(about = "Customer registry tools: CPF/CNPJ validation and invoice analysis")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a CPF or CNPJ and print its normalized form
    Validate {
        /// Identifier, with or without punctuation
        identifier: String,
    },
    /// Analyze invoice text with the configured completion service
    Analyze {
        /// Invoice text passed directly on the command line
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the invoice text from a file instead
        #[arg(long)]
        file: Option<String>,
    },
}
