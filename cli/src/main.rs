//! docdeck CLI - published document to flashcard outline tool

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docdeck::outline::{DEFAULT_COMMENT_END, DEFAULT_COMMENT_START};
use docdeck::{render, source, HtmlParser, JsonFormat, OutlineBuilder, OutlineOptions};

#[derive(Parser)]
#[command(name = "docdeck")]
#[command(version)]
#[command(about = "Turn published documents into flashcard outlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to an outline
    Outline {
        /// Input HTML file or published document URL
        #[arg(value_name = "FILE|URL")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output the {deckName, data} JSON record instead of org text
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Paragraph text that opens a skipped region
        #[arg(long, env = "DOCDECK_COMMENT_START", default_value = DEFAULT_COMMENT_START)]
        comment_start: String,

        /// Paragraph text that closes a skipped region
        #[arg(long, env = "DOCDECK_COMMENT_END", default_value = DEFAULT_COMMENT_END)]
        comment_end: String,

        /// Keep images instead of replacing them with placeholders
        #[arg(long)]
        keep_images: bool,

        /// Leave $$...$$ aliases untouched
        #[arg(long)]
        no_cloze: bool,

        /// Build table lines on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Check whether a URL can be outlined
    Check {
        /// URL to classify
        #[arg(value_name = "URL")]
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            json,
            compact,
            comment_start,
            comment_end,
            keep_images,
            no_cloze,
            sequential,
        } => {
            let options = OutlineOptions::new()
                .with_comment_markers(comment_start, comment_end)
                .with_images(!keep_images)
                .with_cloze(!no_cloze)
                .with_parallel(!sequential);
            let format = match (json, compact) {
                (false, _) => None,
                (true, false) => Some(JsonFormat::Pretty),
                (true, true) => Some(JsonFormat::Compact),
            };
            cmd_outline(&input, output.as_deref(), format, options)
        }
        Commands::Check { url, json } => cmd_check(&url, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &str,
    output: Option<&Path>,
    format: Option<JsonFormat>,
    options: OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = if fetch::is_url(input) {
        HtmlParser::new(fetch::fetch_document(input)?)
    } else {
        HtmlParser::open(input)?
    };
    let document = parser.parse()?;
    let outline = OutlineBuilder::with_options(options).build(document);

    if outline.is_empty() {
        log::warn!("Outline for {} has no lines", input);
    }

    let rendered = match format {
        Some(format) => render::to_json(&outline, format)?,
        None => render::to_org(&outline),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!(
            "{} {} ({} lines)",
            "Saved to".green(),
            path.display(),
            outline.len()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_check(url: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let kind = source::resolve(url)?;

    if json {
        let report = serde_json::json!({
            "url": url,
            "type": kind,
            "outline": kind == source::PageType::Document,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}: {}", "Type".bold(), kind);
    match kind {
        source::PageType::Document => println!("{}", "Ready to outline".green()),
        source::PageType::Spreadsheet => {
            println!("{}", "Spreadsheets are not outlined".yellow())
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docdeck".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Published document to flashcard outline tool");
    println!();
    println!("License: MIT");
}
