use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use servicemap::cli::{Cli, Commands, OutputFormat, PersistenceArg};
use servicemap::config::Config;
use servicemap::execute::CommandExecutor;
use servicemap::extract::StructureExtractor;
use servicemap::io::RealFileSystem;
use servicemap::model::dump;
use servicemap::{marshal, plugins};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            path,
            format,
            default_persistence,
        } => run_extract(&path, format, default_persistence),
        Commands::Plugins => run_plugins(),
    }
}

fn run_extract(
    project_dir: &Path,
    format: OutputFormat,
    default_persistence: Option<PersistenceArg>,
) -> Result<()> {
    let fs = RealFileSystem::new();
    let config = Config::load(&fs, project_dir);
    let mut options = config.extract_options();
    if let Some(persistence) = default_persistence {
        options.default_persistence = persistence.into();
    }

    let extractor = StructureExtractor::with_options(fs, options);
    let modules = extractor.extract(project_dir)?;

    match format {
        OutputFormat::Json => println!("{}", marshal::to_json_pretty(&modules)?),
        OutputFormat::Text => {
            println!("{}", "Project structure".bold());
            print!("{}", dump::modules(&modules));
        }
    }
    Ok(())
}

fn run_plugins() -> Result<()> {
    let fs = RealFileSystem::new();
    let executor = CommandExecutor::new();
    let discovered = plugins::discover(&fs, &executor)?;

    if discovered.is_empty() {
        println!("no generator plugins found");
        return Ok(());
    }
    println!("{}", "Generator plugins".bold());
    for plugin in discovered {
        println!("  {}  {}", plugin.name.cyan(), plugin.path.display());
    }
    Ok(())
}
