//! cardpress CLI - flashcard booklet printing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cardpress::{
    detect_format_from_path, Cardpress, GridShape, HeaderMode, JsonFormat, PaperSize,
};

#[derive(Parser)]
#[command(name = "cardpress")]
#[command(version)]
#[command(about = "Print flashcard booklet PDFs from two-column word lists", long_about = None)]
struct Cli {
    /// Input word list (CSV or Excel)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the booklet PDF
    #[command(alias = "make")]
    Pdf {
        /// Input word list (CSV or Excel)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (input name with .pdf if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Preview the page plan as text
    Plan {
        /// Input word list (CSV or Excel)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        read: ReadArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write the page plan as JSON
    Json {
        /// Input word list (CSV or Excel)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        read: ReadArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show word list and booklet information
    Info {
        /// Input word list (CSV or Excel)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        read: ReadArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ReadArgs {
    /// CSV field delimiter
    #[arg(long, default_value = ",", value_name = "CHAR")]
    delimiter: char,

    /// First row handling
    #[arg(long, value_enum, default_value = "auto")]
    header: HeaderArg,
}

#[derive(Args)]
struct LayoutArgs {
    /// Grid columns per page
    #[arg(long, default_value = "2")]
    columns: usize,

    /// Grid rows per page
    #[arg(long, default_value = "5")]
    rows: usize,

    /// Paper size
    #[arg(long, value_enum, default_value = "a6")]
    paper: Paper,

    /// Page margin in millimeters
    #[arg(long, default_value = "8")]
    margin: f32,

    /// Text font size in points
    #[arg(long, default_value = "10")]
    font_size: f32,

    /// Skip the border and cell separator lines
    #[arg(long)]
    no_grid: bool,

    /// Print each cell's coordinate label (e.g. "12A")
    #[arg(long)]
    coords: bool,

    /// PDF document title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HeaderArg {
    /// Skip the first row iff it looks like a header
    Auto,
    /// Always skip the first row
    Skip,
    /// Always keep the first row as card data
    Keep,
}

impl From<HeaderArg> for HeaderMode {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Auto => HeaderMode::Auto,
            HeaderArg::Skip => HeaderMode::Skip,
            HeaderArg::Keep => HeaderMode::Keep,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Paper {
    A4,
    A5,
    A6,
    Letter,
}

impl From<Paper> for PaperSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::A4 => PaperSize::A4,
            Paper::A5 => PaperSize::A5,
            Paper::A6 => PaperSize::A6,
            Paper::Letter => PaperSize::Letter,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Pdf {
            input,
            output,
            read,
            layout,
        }) => cmd_pdf(&input, output.as_deref(), &read, &layout),
        Some(Commands::Plan {
            input,
            output,
            read,
            layout,
        }) => cmd_plan(&input, output.as_deref(), &read, &layout),
        Some(Commands::Json {
            input,
            output,
            compact,
            read,
            layout,
        }) => cmd_json(&input, output.as_deref(), compact, &read, &layout),
        Some(Commands::Info { input, read, layout }) => cmd_info(&input, &read, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_pdf(
                    &input,
                    cli.output.as_deref(),
                    &ReadArgs {
                        delimiter: ',',
                        header: HeaderArg::Auto,
                    },
                    &LayoutArgs {
                        columns: 2,
                        rows: 5,
                        paper: Paper::A6,
                        margin: 8.0,
                        font_size: 10.0,
                        no_grid: false,
                        coords: false,
                        title: None,
                    },
                )
            } else {
                println!("{}", "Usage: cardpress <FILE> [OUTPUT]".yellow());
                println!("       cardpress --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(read: &ReadArgs, layout: &LayoutArgs) -> Result<Cardpress, Box<dyn std::error::Error>> {
    if !read.delimiter.is_ascii() {
        return Err(format!("Delimiter must be a single ASCII character: {}", read.delimiter).into());
    }

    let mut builder = Cardpress::new()
        .with_grid(GridShape::new(layout.columns, layout.rows)?)
        .with_delimiter(read.delimiter as u8)
        .with_paper(layout.paper.into())
        .with_margin_mm(layout.margin)
        .with_font_size(layout.font_size);

    builder = match HeaderMode::from(read.header) {
        HeaderMode::Auto => builder,
        HeaderMode::Skip => builder.skip_header(),
        HeaderMode::Keep => builder.keep_header(),
    };
    if layout.no_grid {
        builder = builder.without_grid_lines();
    }
    if layout.coords {
        builder = builder.with_coords();
    }
    if let Some(ref title) = layout.title {
        builder = builder.with_title(title.clone());
    }

    Ok(builder)
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}.pdf", stem))
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    read: &ReadArgs,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output(input));

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading word list...");
    let booklet = builder(read, layout)?.load(input)?;
    pb.inc(1);

    pb.set_message("Paginating...");
    let page_count = booklet.page_count();
    pb.inc(1);

    pb.set_message("Writing PDF...");
    booklet.write_pdf(&output)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} cards on {} pages",
        "Created".green().bold(),
        booklet.deck().card_count(),
        page_count
    );
    println!("  {} {}", "└─".dimmed(), output.display());

    Ok(())
}

fn cmd_plan(
    input: &Path,
    output: Option<&Path>,
    read: &ReadArgs,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let booklet = builder(read, layout)?.load(input)?;
    let plan = booklet.to_plan_text();

    if let Some(path) = output {
        fs::write(path, &plan)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", plan);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    read: &ReadArgs,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let booklet = builder(read, layout)?.load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = booklet.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(
    input: &Path,
    read: &ReadArgs,
    layout: &LayoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let booklet = builder(read, layout)?.load(input)?;
    let deck = booklet.deck();

    println!("{}", "Word List".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Type".bold(), format);
    println!("{}: {}", "Column A words".bold(), deck.front().len());
    println!("{}: {}", "Column B words".bold(), deck.back().len());
    println!("{}: {}", "Cards".bold(), deck.card_count());

    println!();
    println!("{}", "Booklet".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Grid".bold(), booklet.grid());
    println!("{}: {}", "Paper".bold(), PaperSize::from(layout.paper));
    println!("{}: {}", "Pages needed".bold(), booklet.page_count());
    println!(
        "{}: {}",
        "Layout".bold(),
        "alternating front/back pages, back rows mirrored"
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "cardpress".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Flashcard booklet printing tool");
    println!();
    println!("License: MIT");
}
