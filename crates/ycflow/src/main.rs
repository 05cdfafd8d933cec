mod commands;
mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ycflow")]
#[command(
    about = "Keep a Yandex Cloud compute instance in its declared shape",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, replace or keep a compute instance
    ///
    /// An existing instance whose cores, memory or disk size differ is
    /// deleted and created again without confirmation.
    Instance {
        /// Instance name, unique within the folder
        #[arg(short, long)]
        name: String,
        /// Number of CPU cores (default from config: 2)
        #[arg(long)]
        cores: Option<i64>,
        /// Memory size in GB (default from config: 2)
        #[arg(long)]
        memory_g: Option<i64>,
        /// Boot disk size in GB (default from config: 10)
        #[arg(long)]
        disk_g: Option<i64>,
        /// Image family (default from config: centos-8)
        #[arg(long)]
        image: Option<String>,
        /// Public SSH key placed on the instance (default from config: ~/.ssh/id_rsa.pub)
        #[arg(long)]
        ssh_key: Option<String>,
        /// Only report whether anything would change
        #[arg(long)]
        check: bool,
        /// yc executable (overrides config)
        #[arg(long, env = "YCFLOW_YC")]
        yc: Option<String>,
    },
    /// Write a text file, replacing it atomically when the content differs
    File {
        /// Destination path; a bare name is relative to the current directory
        #[arg(short, long)]
        path: String,
        /// File content
        #[arg(short, long)]
        content: String,
        /// Only report whether the file would change
        #[arg(long)]
        check: bool,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the JSON result, logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Instance {
            name,
            cores,
            memory_g,
            disk_g,
            image,
            ssh_key,
            check,
            yc,
        } => {
            let config = ycflow_config::load_config()?;
            let options = commands::instance::InstanceOptions {
                name,
                cores,
                memory_g,
                disk_g,
                image,
                ssh_key,
                check,
                yc,
            };
            commands::instance::handle(&config, options).await?;
        }
        Commands::File {
            path,
            content,
            check,
        } => {
            commands::file::handle(&path, &content, check)?;
        }
        Commands::Version => {
            println!("ycflow {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
