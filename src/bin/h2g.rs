//! htmlgrid CLI - Resolve HTML tables into spreadsheet grids

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use htmlgrid::{parse_html_tables, GridError, GridResult, ParseOptions, Table};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "h2g")]
#[command(version)]
#[command(about = "htmlgrid - Resolve HTML tables into spreadsheet grids", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// TOML file with resolution options
    #[arg(short, long)]
    config: Option<String>,

    /// Estimate column widths from cell text
    #[arg(short, long)]
    auto_width: bool,

    /// Do not give unstyled link cells the default link style
    #[arg(long)]
    no_link_style: bool,

    /// Pretty print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print a human-readable grid summary instead of JSON
    #[arg(short, long)]
    summary: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(Commands::Info) = cli.command {
        print_info();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> GridResult<()> {
    let options = load_options(cli)?;

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path).map_err(|e| GridError::io(path, e))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tables = parse_html_tables(&input, &options);

    let result = if cli.summary {
        summarize(&tables)
    } else if cli.pretty {
        serde_json::to_string_pretty(&tables).map_err(|e| GridError::invalid(e.to_string()))?
    } else {
        serde_json::to_string(&tables).map_err(|e| GridError::invalid(e.to_string()))?
    };

    // Output
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path).map_err(|e| GridError::io(path, e))?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ {} table(s) written to: {}", tables.len(), path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

/// Options from the config file, then command-line flags on top
#[cfg(feature = "cli")]
fn load_options(cli: &Cli) -> GridResult<ParseOptions> {
    let mut options = match cli.config {
        Some(ref path) => {
            let text = fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
            toml::from_str::<ParseOptions>(&text)
                .map_err(|e| GridError::invalid(format!("config {}: {}", path, e)))?
        }
        None => ParseOptions::default(),
    };

    if cli.auto_width {
        options.compute_auto_width = true;
    }
    if cli.no_link_style {
        options.apply_default_link_style = false;
    }
    Ok(options)
}

/// One block per table: caption, dimensions, then one line per row
#[cfg(feature = "cli")]
fn summarize(tables: &[Table]) -> String {
    let mut out = String::new();
    for (i, table) in tables.iter().enumerate() {
        out.push_str(&format!(
            "Table {} [{} x {}]",
            i + 1,
            table.num_rows(),
            table.num_cols()
        ));
        if let Some(ref caption) = table.caption {
            out.push_str(&format!(" \"{}\"", caption));
        }
        out.push('\n');

        for tr in &table.rows {
            let cells: Vec<String> = tr
                .cells
                .iter()
                .map(|td| {
                    let mut cell = format!("{}:{}", td.col, td.text().replace('\n', "\\n"));
                    if td.col_span > 1 || td.row_span > 1 {
                        cell.push_str(&format!(" ({}x{})", td.row_span, td.col_span));
                    }
                    cell
                })
                .collect();
            let hidden = if tr.visible { "" } else { " (hidden)" };
            out.push_str(&format!("  r{}{}: {}\n", tr.index, hidden, cells.join(" | ")));
        }
    }
    out.trim_end().to_string()
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("htmlgrid - Resolve HTML tables into spreadsheet grids");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Features:");
    println!("  ✓ colspan / rowspan resolution onto absolute columns");
    println!("  ✓ Style cascade (table → row group → row → cell)");
    println!("  ✓ Content typing: text, number, boolean, formula, link, image, drop-down");
    println!("  ✓ Rich-text runs from <span> elements");
    println!("  ✓ Column width estimation (--auto-width)");
    println!();
    println!("Cell override attributes:");
    println!("  string, double, formula, url, email, dropDownList");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install htmlgrid --features cli");
    eprintln!("  h2g [OPTIONS] [INPUT_FILE]");
}
