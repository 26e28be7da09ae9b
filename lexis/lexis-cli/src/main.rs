//! Lexis CLI - Command-line interface for querying a lexical semantic graph.
//!
//! # Usage
//!
//! ```bash
//! # Write a configuration pointing at a corpus snapshot
//! lexis config init --corpus ./wordnet.json
//!
//! # Inspect a synset and its hypernym paths
//! lexis synset dog.n.01
//! lexis paths dog.n.01
//!
//! # Walk a relation
//! lexis closure dog.n.01 hypernym --depth 2
//!
//! # Compare two synsets
//! lexis similarity dog.n.01 cat.n.01 --metric all
//! lexis distance run.v.01 eat.v.01 --simulate-root
//! lexis similarity run.v.01 eat.v.01 --simulate-root=false
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lexis_cli::{commands, output, Metric, OutputFormat};
use lexis_core::{PartOfSpeech, RelationKind};
use lexis_query::{LcsOptions, DEFAULT_OTHER_SYNSET};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Lexis - Query engine for lexical semantic graphs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Corpus snapshot to load, overriding the configuration
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Output format (human, json, plain)
    #[arg(long, global = true, default_value = "human")]
    format: OutputFormatArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Path,
    Lch,
    Wup,
    All,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Path => Metric::Path,
            MetricArg::Lch => Metric::Lch,
            MetricArg::Wup => Metric::Wup,
            MetricArg::All => Metric::All,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show a synset with its lemmas, depths and relations
    Synset {
        /// Synset name (e.g. dog.n.01)
        name: String,
    },

    /// Show a lemma with its usage details and relations
    Lemma {
        /// Lemma identifier (e.g. dog.n.01.dog)
        id: String,
    },

    /// List synsets in corpus order
    List {
        /// Restrict to one part of speech (n, v, a, s, r)
        #[arg(short, long)]
        pos: Option<PartOfSpeech>,

        /// Maximum number of synsets to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Nodes reachable along one relation kind
    Closure {
        /// Start synset name, or lemma identifier with --lemma
        name: String,

        /// Relation kind (e.g. hypernym, part_meronym, antonym)
        kind: RelationKind,

        /// Maximum number of hops
        #[arg(short, long)]
        depth: Option<usize>,

        /// Walk lemma relations instead of synset relations
        #[arg(long)]
        lemma: bool,
    },

    /// Hypernym paths from a synset to its roots
    Paths {
        /// Synset name
        name: String,
    },

    /// Every hypernym of a synset with its distance
    Ancestors {
        /// Synset name
        name: String,
    },

    /// Hypernyms shared by two synsets
    Common {
        /// First synset name
        a: String,
        /// Second synset name
        b: String,
    },

    /// Deepest hypernyms shared by two synsets
    LowestCommon {
        /// First synset name
        a: String,
        /// Second synset name
        b: String,

        /// Fall back to a virtual root when nothing is shared
        #[arg(long)]
        simulate_root: bool,

        /// Rank subsumers by their longest path to a root
        #[arg(long)]
        max_depth: bool,
    },

    /// Shortest path distance between two synsets
    Distance {
        /// First synset name
        a: String,
        /// Second synset name
        #[arg(default_value = DEFAULT_OTHER_SYNSET)]
        b: String,

        /// Join separate taxonomies under a virtual root (default: false)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        simulate_root: Option<bool>,
    },

    /// Similarity scores between two synsets
    Similarity {
        /// First synset name
        a: String,
        /// Second synset name
        #[arg(default_value = DEFAULT_OTHER_SYNSET)]
        b: String,

        /// Score to compute
        #[arg(short, long, default_value = "all")]
        metric: MetricArg,

        /// Join separate taxonomies under a virtual root (default: true)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        simulate_root: Option<bool>,
    },

    /// Corpus, taxonomy and cache statistics
    Stats,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(format!("{:#}", e));
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = OutputFormat::from(cli.format);
    format.apply();

    if let Commands::Config(ConfigCommands::Init { force }) = cli.command {
        init_logging(cli.verbose, "info");
        return commands::config_init(cli.config.as_deref(), cli.corpus, force).await;
    }

    let config = commands::load_config(cli.config.as_deref(), cli.corpus).await?;
    init_logging(cli.verbose, &config.general.log_level);

    if let Commands::Config(ConfigCommands::Show) = cli.command {
        return commands::config_show(&config, format);
    }

    let engine = commands::load_engine(&config).await?;

    match cli.command {
        Commands::Synset { name } => commands::synset_show(&engine, &name, format),
        Commands::Lemma { id } => commands::lemma_show(&engine, &id, format),
        Commands::List { pos, limit } => commands::list_synsets(&engine, pos, limit, format),
        Commands::Closure {
            name,
            kind,
            depth,
            lemma,
        } => commands::closure(&engine, &name, kind, depth, lemma, format),
        Commands::Paths { name } => commands::paths(&engine, &name, format),
        Commands::Ancestors { name } => commands::ancestors(&engine, &name, format),
        Commands::Common { a, b } => commands::common(&engine, &a, &b, format),
        Commands::LowestCommon {
            a,
            b,
            simulate_root,
            max_depth,
        } => {
            let options = LcsOptions {
                simulate_root,
                use_min_depth: !max_depth,
            };
            commands::lowest_common(&engine, &a, &b, options, format)
        }
        Commands::Distance {
            a,
            b,
            simulate_root,
        } => commands::distance(&engine, &a, &b, simulate_root, format),
        Commands::Similarity {
            a,
            b,
            metric,
            simulate_root,
        } => commands::similarity(&engine, &a, &b, metric.into(), simulate_root, format),
        Commands::Stats => commands::stats(&engine, format),
        Commands::Config(_) => Ok(()),
    }
}

fn init_logging(verbose: bool, level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("lexis_core=debug,lexis_graph=debug,lexis_query=debug,lexis_cli=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "lexis_core={level},lexis_graph={level},lexis_query={level},lexis_cli={level},warn"
            ))
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
