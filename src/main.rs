//! Slurve CLI
//!
//! Usage:
//!   slurve [OPTIONS] --layout <FILE> [INPUT]
//!   slurve [OPTIONS] --points <DESCRIPTOR> --width <W> --height <H>
//!
//! Options:
//!   -l, --layout <FILE>   Element layout boxes (TOML) for HTML prerendering
//!   -p, --points <DESC>   Render a single overlay instead of an HTML page
//!   -c, --config <FILE>   Overlay configuration (TOML)
//!   -v, --verbose         Debug logging
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::warn;

use slurve::logging::{init_logging, LoggingConfig};
use slurve::{prerender_html, ElementBounds, LayoutSheet, Overlay, OverlayConfig};

#[derive(Parser)]
#[command(name = "slurve")]
#[command(about = "Slanted and curved SVG borders for HTML elements")]
struct Cli {
    /// HTML input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Element layout boxes keyed by element id (TOML format)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Overlay configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render one overlay from this descriptor, e.g. "0,0,5 -10,0,5 0,0,5 10,0,5"
    #[arg(short, long, allow_hyphen_values = true)]
    points: Option<String>,

    /// Element width for --points
    #[arg(long, default_value_t = 100.0)]
    width: f64,

    /// Element height for --points
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// Extra overlay classes for --points
    #[arg(long)]
    classes: Option<String>,

    /// Round coordinates to this many decimal places
    #[arg(long)]
    precision: Option<u32>,

    /// Debug logging (a bare level in RUST_LOG, e.g. RUST_LOG=warn, still wins)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(LoggingConfig::default().verbose(cli.verbose));

    let mut config = match &cli.config {
        Some(path) => match OverlayConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => OverlayConfig::default(),
    };
    if let Some(digits) = cli.precision {
        config = config.with_precision(digits);
    }

    if let Some(descriptor) = &cli.points {
        render_single(descriptor, &cli, &config);
        return;
    }

    let Some(layout_path) = &cli.layout else {
        if cli.input.is_none() && io::stdin().is_terminal() {
            print_intro();
            return;
        }
        eprintln!("Error: HTML prerendering needs --layout <FILE>");
        process::exit(1);
    };

    let layout = match LayoutSheet::from_file(layout_path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error loading layout '{}': {}", layout_path.display(), e);
            process::exit(1);
        }
    };

    let html = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    match prerender_html(&html, &layout, &config) {
        Ok(output) => {
            if !output.skipped.is_empty() {
                warn!("{} element(s) left without an overlay", output.skipped.len());
            }
            print!("{}", output.html);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn render_single(descriptor: &str, cli: &Cli, config: &OverlayConfig) {
    let element = ElementBounds::sized(cli.width, cli.height);
    match Overlay::build(descriptor, cli.classes.as_deref(), element, config) {
        Ok(overlay) => println!("{}", overlay.to_document()),
        Err(e) => {
            eprint!("{}", e.format(descriptor, "--points"));
            process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Slurve - slanted and curved SVG borders for HTML elements

USAGE:
    slurve --layout boxes.toml page.html > out.html
    slurve --points "0,0,5 -10,0,5 0,0,5 10,0,5" --width 200 --height 80

DESCRIPTOR:
    One x,y,r triple per corner: top-left, top-right, bottom-right, bottom-left.
    x,y offset the corner from the element box; r rounds it (default 0).

HTML:
    Elements with data-slurve="..." get an <svg class="slurve-svg"> as their
    first child. Extra classes come from data-slurve-classes.

LAYOUT FILE:
    [boxes.hero]        # element id
    width = 640
    height = 320"#
    );
}
