//! Clap derive structures for the `prostory` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use prostory_core::models::{ActivityCategory, GalleryColumn, GalleryPosition, Season};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// prostory -- read the Строгановские Просторы backend the way the site does
#[derive(Debug, Parser)]
#[command(
    name = "prostory",
    version,
    about = "Inspect Строгановские Просторы site data from the command line",
    long_about = "Fetches lodges, activities, news, gallery and the rest of the site's\n\
        backend data through the same normalizing, coalescing data layer the\n\
        site renders with.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend API root (overrides config)
    #[arg(long, env = "API_BASE_URL", global = true)]
    pub api_base: Option<String>,

    /// Public site URL (overrides config)
    #[arg(long, env = "SITE_URL", global = true)]
    pub site_url: Option<String>,

    /// Config file path
    #[arg(long, env = "PROSTORY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PROSTORY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lodges and lodge types
    #[command(alias = "l")]
    Lodges(LodgesArgs),

    /// Activities
    #[command(alias = "a")]
    Activities(ActivitiesArgs),

    /// Event types
    #[command(alias = "e")]
    Events(EventsArgs),

    /// News articles
    News(NewsArgs),

    /// Gallery images
    #[command(alias = "g")]
    Gallery(GalleryArgs),

    /// Landing hero section
    Hero,

    /// Restaurant info, images, meal types and benefits
    Restaurant(RestaurantArgs),

    /// Landing page figures
    #[command(alias = "stats")]
    Statistics,

    /// Run one render pass over the landing page and report each resource
    Prefetch(PrefetchArgs),

    /// Print sitemap.xml
    Sitemap(SitemapArgs),

    /// Print robots.txt
    Robots,

    /// Format a number the way the site displays it
    FormatNumber(FormatNumberArgs),

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Lodges ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LodgesArgs {
    #[command(subcommand)]
    pub command: LodgesCommand,
}

#[derive(Debug, Subcommand)]
pub enum LodgesCommand {
    /// List lodges
    #[command(alias = "ls")]
    List(LodgeListArgs),

    /// Show one lodge
    Get {
        /// Lodge ID or slug
        id: String,
    },

    /// List lodge types
    Types,
}

#[derive(Debug, Args)]
pub struct LodgeListArgs {
    /// Lodge type slug
    #[arg(long = "type")]
    pub lodge_type: Option<String>,

    /// Minimum starting price
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum starting price
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Minimum capacity
    #[arg(long)]
    pub capacity_min: Option<u32>,

    /// Maximum capacity
    #[arg(long)]
    pub capacity_max: Option<u32>,

    /// Ordering field, e.g. `price_from` or `-capacity`
    #[arg(long)]
    pub ordering: Option<String>,
}

// ── Activities ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ActivitiesArgs {
    #[command(subcommand)]
    pub command: ActivitiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ActivitiesCommand {
    /// List activities
    #[command(alias = "ls")]
    List {
        /// `active` or `peaceful`
        #[arg(long)]
        category: Option<ActivityCategory>,

        /// `winter` or `summer`
        #[arg(long)]
        season: Option<Season>,

        /// Ordering field
        #[arg(long)]
        ordering: Option<String>,
    },

    /// Show one activity
    Get {
        /// Activity ID or slug
        id: String,
    },
}

// ── Events ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List event types
    #[command(alias = "ls")]
    List,

    /// Show one event type
    Get {
        /// Event type ID or slug
        id: String,
    },
}

// ── News ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewsArgs {
    #[command(subcommand)]
    pub command: NewsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NewsCommand {
    /// List news
    #[command(alias = "ls")]
    List,

    /// Show one article
    Get {
        /// Article ID or slug
        id: String,
    },
}

// ── Gallery ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[derive(Debug, Subcommand)]
pub enum GalleryCommand {
    /// List gallery images
    #[command(alias = "ls")]
    List {
        /// `main`, `hero`, `lodge` or `activity`
        #[arg(long)]
        position: Option<GalleryPosition>,

        /// `left`, `center` or `right`
        #[arg(long)]
        column: Option<GalleryColumn>,

        /// Ordering field
        #[arg(long)]
        ordering: Option<String>,
    },
}

// ── Restaurant ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RestaurantArgs {
    #[command(subcommand)]
    pub command: RestaurantCommand,
}

#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// Restaurant description
    Info,
    /// Restaurant photos
    Images,
    /// Meals served and their times
    MealTypes,
    /// Restaurant benefits
    Benefits,
}

// ── Prefetch / Sitemap / Format ──────────────────────────────────────

#[derive(Debug, Args)]
pub struct PrefetchArgs {
    /// Run as client hydration (deferred resources are fetched too)
    #[arg(long)]
    pub client: bool,
}

#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Proxy the backend's sitemap instead of generating one
    #[arg(long)]
    pub backend: bool,
}

#[derive(Debug, Args)]
pub struct FormatNumberArgs {
    /// A number, numeric string, or JSON scalar (`null`, `""`)
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets redacted)
    Show,
    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
