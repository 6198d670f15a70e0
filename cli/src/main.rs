//! clozepdf CLI - cloze-quiz dataset extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use clozepdf::{
    extract_runs, render, ExtractOptions, FontHistogram, JsonFormat, LopdfReader, PageSelection,
    RunSource,
};

#[derive(Parser)]
#[command(name = "clozepdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract cloze-quiz datasets from fixed-layout PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the quiz dataset as JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "3-48", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Heading font size in points
        #[arg(long, default_value = "11.04")]
        heading_size: f32,

        /// Body font size in points
        #[arg(long, default_value = "9.0")]
        body_size: f32,

        /// Boilerplate marker stripped from every run
        #[arg(long)]
        boilerplate: Option<String>,

        /// Paragraph-break delimiter character
        #[arg(long)]
        delimiter: Option<char>,

        /// Prefix for item ids
        #[arg(long, default_value = "c")]
        id_prefix: String,
    },

    /// Show the font-size histogram for calibration
    Fonts {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "3-48", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            pages,
            heading_size,
            body_size,
            boilerplate,
            delimiter,
            id_prefix,
        }) => {
            let mut options = ExtractOptions::new()
                .with_heading_size(heading_size)
                .with_body_size(body_size)
                .with_id_prefix(id_prefix)
                .with_pages(parse_pages(pages.as_deref())?);
            if let Some(marker) = boilerplate {
                options = options.with_boilerplate(marker);
            }
            if let Some(ch) = delimiter {
                options = options.with_delimiter(ch);
            }
            cmd_extract(&input, output.as_deref(), compact, &options)
        }
        Some(Commands::Fonts { input, pages }) => {
            cmd_fonts(&input, parse_pages(pages.as_deref())?)
        }
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(
                    &input,
                    cli.output.as_deref(),
                    false,
                    &ExtractOptions::default(),
                )
            } else {
                println!("{}", "Usage: clozepdf <FILE> [OUTPUT]".yellow());
                println!("       clozepdf --help for more information");
                Ok(())
            }
        }
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = LopdfReader::open(input)?;
    let runs = collect_runs(&reader, options);

    let dataset = extract_runs(runs, options);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&dataset, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!(
            "{} {} ({} sections, {} items)",
            "Saved to".green(),
            path.display(),
            dataset.section_count(),
            dataset.item_count()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_fonts(input: &Path, pages: PageSelection) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new().with_pages(pages);
    let reader = LopdfReader::open(input)?;
    let runs = collect_runs(&reader, &options);

    let mut histogram = FontHistogram::new();
    histogram.add_runs(&runs);

    println!("{}", "Font sizes by frequency:".green().bold());
    for (size, count) in histogram.entries() {
        println!("  {:>10.3} pt {:>8} runs", size, count);
    }

    match histogram.suggest() {
        Some(cal) => {
            println!();
            println!(
                "{} --body-size {} --heading-size {}",
                "Suggested calibration:".cyan(),
                cal.body_size,
                cal.heading_size
            );
        }
        None => println!("{}", "No calibration suggestion (too few sizes)".yellow()),
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let reader = LopdfReader::open(input)?;

    println!("{}", "Document information:".green().bold());
    println!("  {} {}", "File:".dimmed(), input.display());
    println!("  {} {}", "PDF version:".dimmed(), reader.version());
    println!("  {} {}", "Pages:".dimmed(), reader.page_count());
    println!(
        "  {} {}",
        "Encrypted:".dimmed(),
        if reader.is_encrypted() { "yes" } else { "no" }
    );

    Ok(())
}

fn cmd_version() {
    println!("clozepdf {}", env!("CARGO_PKG_VERSION"));
}

/// Gather runs for every selected page, with a progress bar. Pages that
/// fail to read are skipped; extraction degrades rather than aborts.
fn collect_runs(reader: &LopdfReader, options: &ExtractOptions) -> Vec<clozepdf::StyledRun> {
    let selected: Vec<u32> =
        (1..=reader.page_count()).filter(|p| options.pages.includes(*p)).collect();

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut runs = Vec::new();
    for page_num in selected {
        match reader.page_runs(page_num) {
            Ok(page_runs) => runs.extend(page_runs),
            Err(e) => log::warn!("skipping unreadable page {}: {}", page_num, e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    runs
}
