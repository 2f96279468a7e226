//! CLI entry point for abta

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use abta::helpers::ArchiveKind;

#[derive(Parser)]
#[command(name = "abta")]
#[command(version)]
#[command(about = "A Japanese-first blog template toolkit", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name to use instead of the title's slug
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List site content
    List {
        /// Type of content to list (post, tag, year, month)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show posts grouped by year and month
    Archive {
        /// One flat entry per month instead of per year
        #[arg(short, long)]
        monthly: bool,

        /// Show at most this many years (or months)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the sidebar HTML list
        #[arg(long)]
        html: bool,
    },

    /// Print JSON-LD structured data
    Schema {
        /// What to describe (site, archive, post)
        #[arg(default_value = "site")]
        target: String,

        /// Post id, for the post target
        id: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug { "abta=debug,info" } else { "abta=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            abta::commands::init::init_site(&target_dir)?;
            println!("Initialized blog site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let site = abta::Site::new(&base_dir)?;
            let path = abta::commands::new::create_post(&site, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type } => {
            let site = abta::Site::new(&base_dir)?;
            abta::commands::list::run(&site, &r#type)?;
        }

        Commands::Archive {
            monthly,
            limit,
            html,
        } => {
            let site = abta::Site::new(&base_dir)?;
            let kind = if monthly {
                ArchiveKind::Monthly
            } else {
                ArchiveKind::Yearly
            };
            abta::commands::archive::run(&site, kind, limit, html)?;
        }

        Commands::Schema { target, id } => {
            let site = abta::Site::new(&base_dir)?;
            abta::commands::schema::run(&site, &target, id.as_deref())?;
        }

        Commands::Version => {
            println!("abta version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
