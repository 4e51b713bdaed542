use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashui_demos::{demos, load_config, render_demo};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dashui-demos")]
#[command(about = "Render the dashui demo dashboards to standalone HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available demos
    List,
    /// Build a demo and print or save its HTML
    Render {
        demo: String,

        #[arg(long, short)]
        out: Option<PathBuf>,

        /// TOML file with UiConfig overrides
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    /// Build a demo, replay its scripted interactions, then export
    Simulate {
        demo: String,

        #[arg(long, short)]
        out: Option<PathBuf>,

        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            for demo in demos::DEMOS {
                println!("{:<24}{}", demo.name, demo.about);
            }
            Ok(())
        }
        Commands::Render { demo, out, config } => export(&demo, out, config, false),
        Commands::Simulate { demo, out, config } => export(&demo, out, config, true),
    }
}

fn export(demo: &str, out: Option<PathBuf>, config: Option<PathBuf>, simulate: bool) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let html = render_demo(demo, config, simulate)?;
    match out {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {demo} to {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
