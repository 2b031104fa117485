use clap::{Parser, Subcommand};
use folio_gen::config::{self, SiteConfig};
use folio_gen::loader::{self, BundledSource, ContentSource, FileSource};
use folio_gen::{generate, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that write output.
#[derive(clap::Args, Clone)]
struct CacheArgs {
    /// Disable the output cache and rewrite every file
    #[arg(long)]
    no_cache: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-gen")]
#[command(about = "Static site generator for single-page portfolios")]
#[command(long_about = "\
Static site generator for single-page portfolios

One JSON document describes you; folio-gen renders it as a single page with
hero, about, skills, projects, experience and contact sections.

Content structure:

  content/
  ├── config.toml          # Site config (optional, sparse overrides)
  ├── portfolio.json       # The portfolio document
  └── assets/              # Images, favicon → copied to <output>/assets/

Document shape (camelCase keys):
  personal        name, title, subtitle, bio (Markdown), location, email,
                  phone, avatar?, favicon?, ogImage?
  social          github?, linkedin?, twitter?, website?
  skills          frontend[], backend[], tools[]  ({ name, level 0-100, icon })
  projects[]      id, name, description, image, techStack[], liveUrl?,
                  githubUrl, featured, status (Completed | In Development | Planned)
  experience[]    id, position, company, location, startDate, endDate?,
                  current, description, achievements[], technologies[]
  education[]     degree, school, location, startDate, endDate, gpa?, honors[]?
  certifications[] name, issuer, date, credentialId

Dates are YYYY-MM-DD or YYYY-MM.

Run 'folio-gen gen-content' for a complete sample document and
'folio-gen gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Use the built-in sample document instead of <source>/portfolio.json
    #[arg(long, global = true)]
    bundled: bool,

    /// Log debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio into the output directory
    Build(CacheArgs),
    /// Validate the content document and print its inventory
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the built-in sample portfolio document
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build(cache_args) => {
            let config = config::load_config(&cli.source)?;
            let source = content_source(&cli.source, &config, cli.bundled);
            println!("==> Building {} → {}", source.describe(), cli.output.display());
            let report = generate::build(
                &config,
                source.as_ref(),
                &cli.source,
                &cli.output,
                !cache_args.no_cache,
            )?;
            output::print_build_output(&report);
            if report.is_failed() {
                return Err("build produced an error page: Failed to load portfolio data".into());
            }
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            let source = content_source(&cli.source, &config, cli.bundled);
            println!("==> Checking {}", source.describe());
            let doc = source.fetch()?;
            let warnings = loader::data_quality_warnings(&doc);
            output::print_check_output(&doc, &source.describe(), &warnings);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", loader::BUNDLED_DOCUMENT);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "folio_gen=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Pick the content source for a command.
fn content_source(dir: &Path, config: &SiteConfig, bundled: bool) -> Box<dyn ContentSource> {
    if bundled {
        Box::new(BundledSource::default())
    } else {
        Box::new(FileSource::in_dir(dir, &config.content_file))
    }
}
