// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::{self, consts::CONFIG_FILE, ScrapeOptions, Source},
    core::net::HttpFetcher,
    progress::Progress,
    query::{Category, Query},
    runner,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dino_stats")]
#[command(about = "Scrape and query Path of Titans creature stats")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// key = value config file (default: ./dino_stats.conf if present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print creatures whose name matches, optionally narrowed to matching stats
    Find {
        name: String,
        stat: Option<String>,

        /// Keep the Combat category
        #[arg(short = 'a', long = "ability")]
        ability: bool,

        /// Keep the Core category
        #[arg(short = 'c', long)]
        core: bool,

        /// Keep the Multiplier category
        #[arg(short = 'm', long)]
        multiplier: bool,

        #[arg(long, value_enum, default_value_t = SourceArg::Curve)]
        source: SourceArg,
    },
    /// Scrape the configured sources and replace their record files
    Scrape {
        #[arg(long, value_enum, default_value_t = ScrapeTarget::All)]
        source: ScrapeTarget,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Curve,
    Wiki,
}

impl From<SourceArg> for Source {
    fn from(s: SourceArg) -> Self {
        match s {
            SourceArg::Curve => Source::Curve,
            SourceArg::Wiki => Source::Wiki,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ScrapeTarget {
    Curve,
    Wiki,
    All,
}

impl ScrapeTarget {
    pub fn sources(self) -> Vec<Source> {
        match self {
            ScrapeTarget::Curve => vec![Source::Curve],
            ScrapeTarget::Wiki => vec![Source::Wiki],
            ScrapeTarget::All => Source::ALL.to_vec(),
        }
    }
}

/// Build the query for `find` from its arguments.
pub fn find_query(name: &str, stat: Option<&str>, ability: bool, core: bool, multiplier: bool) -> Query {
    let mut q = Query::new(name);
    if let Some(stat) = stat {
        q = q.with_stat(stat);
    }
    for (on, cat) in [(ability, Category::Combat), (core, Category::Core), (multiplier, Category::Multiplier)] {
        if on {
            q = q.with_category(cat);
        }
    }
    q
}

/// Prints scrape progress to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name} FAILED: {reason}", self.done, self.total);
    }
}

fn load_options(cli: &Cli) -> crate::Result<ScrapeOptions> {
    let opts = match &cli.config {
        Some(path) => config::file::load(path)?,
        None => config::file::load_or_default(&PathBuf::from(CONFIG_FILE))?,
    };
    Ok(opts)
}

pub fn run(cli: Cli) -> crate::Result<()> {
    let opts = load_options(&cli)?;
    crate::log::init(&opts.log_file);

    match cli.command {
        Commands::Find { name, stat, ability, core, multiplier, source } => {
            let query = find_query(&name, stat.as_deref(), ability, core, multiplier);
            let path = &opts.source(source.into()).out_path;
            let found = runner::run_find(path, &query)?;
            println!("{}", runner::render(&found));
        }
        Commands::Scrape { source } => {
            println!("Scraping...");
            let fetcher = HttpFetcher::new(opts.timeout);
            let mut console = ConsoleProgress::default();
            let progress: &mut dyn Progress = &mut console;
            let summary = runner::run_scrape(&opts, &source.sources(), &fetcher, Some(progress))?;
            for (src, path, count) in &summary.files_written {
                println!("Wrote {count} {src} creatures to {}", path.display());
            }
            if summary.warnings > 0 {
                eprintln!("{} table warnings; see {}", summary.warnings, opts.log_file.display());
            }
            println!("Scraping complete!");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_flags_map_to_categories() {
        let cli = Cli::try_parse_from(["dino_stats", "find", "rex", "speed", "-c", "--multiplier"]).unwrap();
        let Commands::Find { name, stat, ability, core, multiplier, source } = cli.command else {
            panic!("expected find");
        };
        assert_eq!(source, SourceArg::Curve);
        let q = find_query(&name, stat.as_deref(), ability, core, multiplier);
        assert_eq!(q.name, "rex");
        assert_eq!(q.stat.as_deref(), Some("speed"));
        assert_eq!(q.categories.into_iter().collect::<Vec<_>>(), vec![Category::Core, Category::Multiplier]);
    }

    #[test]
    fn no_flags_means_no_category_filter() {
        let q = find_query("rex", None, false, false, false);
        assert!(q.categories.is_empty());
        assert!(q.stat.is_none());
    }

    #[test]
    fn scrape_takes_no_positionals() {
        assert!(Cli::try_parse_from(["dino_stats", "scrape", "extra"]).is_err());
        let cli = Cli::try_parse_from(["dino_stats", "scrape"]).unwrap();
        assert!(matches!(cli.command, Commands::Scrape { source: ScrapeTarget::All }));
        assert!(Cli::try_parse_from(["dino_stats", "find"]).is_err());
    }
}
