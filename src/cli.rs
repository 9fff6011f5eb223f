// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::consts::{DEFAULT_MAX_ATTEMPTS, FEED_URL};
use crate::config::options::{AppOptions, FeedOptions};
use crate::export::{self, Delim};
use crate::feed::{load_with_retry, HttpFeed, Product};
use crate::i18n::{Lang, Strings};
use crate::log::{self as logger, LevelFilter};
use crate::progress::Progress;
use crate::view::{Catalog, SortMode, ViewState};

#[derive(Parser, Debug)]
#[command(name = "boas_shop", about = "Browse the Boas Shop sneaker inventory from the terminal.")]
pub struct Args {
    /// Feed URL (published spreadsheet CSV)
    #[arg(long, default_value = FEED_URL)]
    pub url: String,

    /// Maximum fetch attempts (0 behaves like 1)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: u32,

    /// Case-insensitive substring of name or SKU
    #[arg(long)]
    pub search: Option<String>,

    /// Only products stocking this size (repeatable; any match)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    #[arg(long, value_enum, default_value_t = SortArg::Default)]
    pub sort: SortArg,

    /// en | pt (default: from LC_ALL / LC_MESSAGES / LANG)
    #[arg(long)]
    pub lang: Option<Lang>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Emit a header row for csv/tsv output
    #[arg(long)]
    pub include_headers: bool,

    /// Write csv/tsv to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Default,
    PriceAsc,
    PriceDesc,
}

impl From<SortArg> for SortMode {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Default => SortMode::Default,
            SortArg::PriceAsc => SortMode::PriceAsc,
            SortArg::PriceDesc => SortMode::PriceDesc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

impl Args {
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            feed: FeedOptions {
                url: self.url.clone(),
                max_attempts: self.attempts,
            },
            lang: self.lang,
        }
    }

    pub fn view_state(&self) -> ViewState {
        let mut view = ViewState::new();
        if let Some(term) = &self.search {
            view.search_term = term.clone();
        }
        for size in &self.sizes {
            if !view.is_size_selected(size) {
                view.toggle_size(size);
            }
        }
        view.sort_mode = self.sort.into();
        view
    }
}

/// Attempt progress on stderr so stdout stays clean for piping.
struct StderrProgress {
    total: u32,
}

impl Progress for StderrProgress {
    fn begin(&mut self, max_attempts: u32) {
        self.total = max_attempts;
    }
    fn attempt_failed(&mut self, n: u32, error: &str) {
        eprintln!("Attempt {}/{} failed: {}", n, self.total, error);
    }
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logger::init(level, true) {
        eprintln!("Logger init failed: {e}");
    }

    let options = args.app_options();
    let lang = options.resolved_lang();
    let strings = lang.strings();
    logf!("CLI: url={} attempts={} lang={}", options.feed.url, options.feed.attempts(), lang);

    let feed = HttpFeed::new(options.feed.url.clone());
    let mut prog = StderrProgress { total: 0 };
    let products = load_with_retry(&feed, options.feed.max_attempts, Some(&mut prog as &mut dyn Progress))
        .map_err(|e| eyre!("{}: {}", strings.error, e))?;

    let mut catalog = Catalog::new(products);
    catalog.apply(args.view_state());
    let visible = catalog.visible();
    logf!("CLI: {} of {} product(s) after filters", visible.len(), catalog.all().len());

    match args.format {
        OutputFormat::Table => {
            let stdout = io::stdout();
            write_table(stdout.lock(), visible, strings)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delim = if args.format == OutputFormat::Csv { Delim::Csv } else { Delim::Tsv };
            let headers = export::headers(strings);
            let headers = args.include_headers.then_some(headers.as_slice());

            match &args.out {
                Some(path) => {
                    export::write_products(path, visible, headers, delim)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Wrote {} product(s) → {}", visible.len(), path.display());
                }
                None => print!("{}", export::products_to_string(visible, headers, delim)?),
            }
        }
    }

    Ok(())
}

/// Fixed-width text table; a localized line when nothing matched.
pub fn write_table<W: Write>(mut w: W, products: &[Product], strings: &Strings) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(w, "{}", strings.no_results);
    }

    let header = [strings.col_name, strings.col_sku, strings.col_price, strings.col_sizes].map(String::from);
    let rows: Vec<Vec<String>> = products.iter().map(export::product_row).collect();

    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |w: &mut W, cells: &[String]| -> io::Result<()> {
        let last = cells.len() - 1;
        for (i, cell) in cells.iter().enumerate() {
            if i == last {
                writeln!(w, "{cell}")?;
            } else {
                let pad = widths[i] - cell.chars().count();
                write!(w, "{cell}{}  ", " ".repeat(pad))?;
            }
        }
        Ok(())
    };

    line(&mut w, &header[..])?;
    let rule: Vec<String> = widths.iter().map(|n| "-".repeat(*n)).collect();
    line(&mut w, &rule[..])?;
    for row in &rows {
        line(&mut w, &row[..])?;
    }
    Ok(())
}
