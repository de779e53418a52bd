use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use pattern_hub::app::App;
use pattern_hub::config::ConfigLoader;
use pattern_hub::domain::{PaperSource, PathLevel};
use pattern_hub::error::HubError;
use pattern_hub::output::JsonOutput;
use pattern_hub::papers::PapersHttpClient;
use pattern_hub::paths::PathsHttpClient;
use pattern_hub::reading_club::StudyGroupsHttpClient;
use pattern_hub::store::LevelFilter;

#[derive(Parser)]
#[command(name = "pattern-hub")]
#[command(about = "Aggregate Pattern platform learning paths, research papers and reading clubs")]
#[command(version, author)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Fetch the learning-path listing")]
    Paths(PathsArgs),
    #[command(about = "Fetch a research-paper listing")]
    Papers(PapersArgs),
    #[command(about = "Fetch the reading-club listing")]
    ReadingClub(ReadingClubArgs),
}

#[derive(Args)]
struct PathsArgs {
    #[arg(long, value_enum)]
    level: Option<PathLevel>,
}

#[derive(Args)]
struct PapersArgs {
    #[arg(long, value_enum, default_value_t = PaperSource::ComplexityDigest)]
    source: PaperSource,

    #[arg(long)]
    domain: Option<String>,

    #[arg(long)]
    keyword: Option<String>,
}

#[derive(Args)]
struct ReadingClubArgs {
    #[arg(long)]
    sample: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(hub) = report.downcast_ref::<HubError>() {
            return ExitCode::from(map_exit_code(hub));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &HubError) -> u8 {
    match error {
        HubError::ConfigRead(_)
        | HubError::ConfigParse(_)
        | HubError::InvalidPaperSource(_)
        | HubError::InvalidLevel(_) => 2,
        HubError::PathsHttp(_)
        | HubError::PathsStatus { .. }
        | HubError::PapersHttp(_)
        | HubError::PapersStatus { .. }
        | HubError::StudyGroupsHttp(_)
        | HubError::StudyGroupsStatus { .. }
        | HubError::EmptyListing(_) => 3,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::resolve(cli.config.as_deref())?;

    let paths_client = PathsHttpClient::new(&config.api_base)?;
    let papers_client = PapersHttpClient::new(&config.api_base)?;
    let groups_client =
        StudyGroupsHttpClient::new(&config.portal_api_base, config.study_groups_timeout_secs)?;
    let mut app = App::new(paths_client, papers_client, groups_client);

    match cli.command {
        Commands::Paths(args) => {
            let filter = args.level.map(LevelFilter::Only).unwrap_or_default();
            let view = app.fetch_paths(filter);
            JsonOutput::print_paths(&view).into_diagnostic()?;
        }
        Commands::Papers(args) => {
            let domain = args.domain.filter(|domain| domain != "全部");
            let view = app.fetch_papers(args.source, domain, args.keyword);
            JsonOutput::print_papers(&view).into_diagnostic()?;
        }
        Commands::ReadingClub(args) => {
            let view = app.fetch_sessions(args.sample);
            JsonOutput::print_sessions(&view).into_diagnostic()?;
        }
    }

    Ok(())
}
