//! repoforge CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use repoforge::{
    application::{GenerateRequest, GenerateUseCase, PublishStubsUseCase, SetupUseCase},
    core::{Config, EnvStubDirSource, ProjectLayout},
    generation::{ArtifactStatus, GenerationMode, GenerationReport, InjectionOutcome, ModeSet},
    infrastructure::{EmbeddedTemplateStore, FileSystemWriter, LayeredTemplateStore},
};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repoforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the Laravel project
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,
    /// Config file (defaults to <project-root>/repoforge.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Install the repository interface, base repository, provider and helper traits
    Setup,
    /// Generate repository pattern files for an entity
    Generate {
        /// Entity name, e.g. Product
        name: String,
        /// Generate all files
        #[arg(short, long)]
        all: bool,
        /// Generate the model
        #[arg(short, long)]
        model: bool,
        /// Generate the repository
        #[arg(short, long)]
        repository: bool,
        /// Generate the service and its repository
        #[arg(short, long)]
        service: bool,
        /// Generate the controller with its service, repository and resources
        #[arg(short, long)]
        controller: bool,
        /// Generate the migration
        #[arg(short = 'f', long)]
        migration: bool,
        /// Directory of customized stubs
        #[arg(long)]
        stub_dir: Option<PathBuf>,
        /// SQLite database checked for existing tables
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Copy the built-in stubs into the project for customization
    #[command(name = "publish-stubs")]
    PublishStubs {
        /// Output directory (defaults to resources/stubs/repoforge)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let root = cli.project_root.clone();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| root.join(Config::FILE_NAME));
    let config = Config::load_or_default(&config_path).context("Failed to load configuration")?;
    let layout = config.layout(&root);
    debug!(root = %root.display(), config = %config_path.display(), "Resolved project");

    match cli.command {
        Commands::Setup => {
            let stub_dir = config.resolve_stub_dir(&root, None, &EnvStubDirSource);
            run_setup(layout, stub_dir)?;
        }
        Commands::Generate {
            name,
            all,
            model,
            repository,
            service,
            controller,
            migration,
            stub_dir,
            database,
        } => {
            let modes: ModeSet = [
                (all, GenerationMode::All),
                (model, GenerationMode::Model),
                (repository, GenerationMode::Repository),
                (service, GenerationMode::Service),
                (controller, GenerationMode::Controller),
                (migration, GenerationMode::Migration),
            ]
            .into_iter()
            .filter_map(|(selected, mode)| selected.then_some(mode))
            .collect();

            let request = GenerateRequest {
                name,
                modes,
                stub_dir: config.resolve_stub_dir(&root, stub_dir.as_deref(), &EnvStubDirSource),
                database: config.resolve_database(&root, database.as_deref()),
            };
            let report = GenerateUseCase::new(layout.clone()).execute(request)?;
            print_report(&layout, &report);
        }
        Commands::PublishStubs { output } => {
            let response = PublishStubsUseCase::new(EmbeddedTemplateStore::new())
                .execute(&root, output.as_deref())
                .context("Failed to publish stubs")?;
            println!(
                "Published {} stub(s) to {}",
                response.exported,
                response.output_dir.display()
            );
        }
    }

    Ok(())
}

fn run_setup(layout: ProjectLayout, stub_dir: Option<PathBuf>) -> anyhow::Result<()> {
    info!("Installing repository pattern files");
    let report = SetupUseCase::new(
        layout.clone(),
        Box::new(LayeredTemplateStore::new(stub_dir)),
        Box::new(FileSystemWriter::new()),
    )
    .execute()
    .context("Failed to install repository pattern files")?;

    for path in &report.created {
        println!("Created {}", layout.display_relative(path));
    }
    for path in &report.existing {
        println!("Skipped {} (already exists)", layout.display_relative(path));
    }
    println!("Repository pattern setup completed.");
    Ok(())
}

fn print_report(layout: &ProjectLayout, report: &GenerationReport) {
    for record in &report.records {
        let path = layout.display_relative(&record.path);
        match &record.status {
            ArtifactStatus::Produced => println!("Created {}: {path}", record.kind),
            ArtifactStatus::Skipped(reason) => println!("Skipped {}: {reason}", record.kind),
            ArtifactStatus::Failed(message) => println!("Failed {}: {message}", record.kind),
        }
    }

    if let Some(binding) = &report.binding {
        print_injection(layout, "Binding", &binding.provider);
        print_injection(layout, "Provider registration", &binding.registration);
    }
    if let Some(route) = &report.route {
        print_injection(layout, "Route", route);
    }

    println!("{}", report.outcome().message(&report.entity));
}

fn print_injection(layout: &ProjectLayout, what: &str, outcome: &InjectionOutcome) {
    let path = layout.display_relative(outcome.path());
    match outcome {
        InjectionOutcome::Created { .. } => println!("{what}: created {path}"),
        InjectionOutcome::Updated { .. } => println!("{what}: updated {path}"),
        InjectionOutcome::Unchanged { .. } => println!("{what}: already present in {path}"),
        InjectionOutcome::Reformatted { .. } => println!("{what}: normalized {path}"),
        InjectionOutcome::Manual {
            reason,
            instructions,
            ..
        } => {
            println!("{what}: could not update {path} ({reason}). Add manually:");
            for line in instructions {
                println!("{line}");
            }
        }
    }
}
