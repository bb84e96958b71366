use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use rand::{Rng, SeedableRng};
use tagcloud_core::export::{to_json, CloudLayout};
use tagcloud_core::metrics::cloud_stats;
use tagcloud_core::render::render_cloud;
use tagcloud_core::{CircularCloudLayouter, Point, Size};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "tagcloud",
    about = "Lay out tag-cloud rectangles around a center point",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a demo cloud from random sizes and export JSON (+ PNG)
    Demo(DemoArgs),
    /// Render a layout JSON to PNG
    Render(RenderArgs),
    /// Print shape statistics for a layout JSON
    Stats(StatsArgs),
}

#[derive(Parser, Debug, Clone)]
struct DemoArgs {
    // Input
    /// Number of rectangles to place
    #[arg(short, long, default_value_t = 100, help_heading = "Input")]
    count: usize,
    /// Minimum rectangle side
    #[arg(long, default_value_t = 10, help_heading = "Input")]
    min_size: i32,
    /// Maximum rectangle side
    #[arg(long, default_value_t = 100, help_heading = "Input")]
    max_size: i32,
    /// Cloud center x
    #[arg(long, default_value_t = 0, help_heading = "Input")]
    center_x: i32,
    /// Cloud center y
    #[arg(long, default_value_t = 0, help_heading = "Input")]
    center_y: i32,
    /// RNG seed for reproducible output
    #[arg(long, help_heading = "Input")]
    seed: Option<u64>,

    // Output
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Output")]
    out_dir: PathBuf,
    /// Layout base name (files will be name.json/.png)
    #[arg(short, long, default_value = "cloud", help_heading = "Output")]
    name: String,
    /// Skip PNG rendering
    #[arg(long, default_value_t = false, help_heading = "Output")]
    no_png: bool,
    /// Margin around the cloud (pixels)
    #[arg(long, default_value_t = 16, help_heading = "Output")]
    margin: u32,
    /// Draw red outlines (debug)
    #[arg(long, default_value_t = false, help_heading = "Output")]
    outlines: bool,
}

#[derive(Parser, Debug, Clone)]
struct RenderArgs {
    /// Layout JSON file
    input: PathBuf,
    /// Output PNG path (defaults to the input path with a .png extension)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Margin around the cloud (pixels)
    #[arg(long, default_value_t = 16)]
    margin: u32,
    /// Draw red outlines (debug)
    #[arg(long, default_value_t = false)]
    outlines: bool,
}

#[derive(Parser, Debug, Clone)]
struct StatsArgs {
    /// Layout JSON file
    input: PathBuf,
    /// Print stats as JSON instead of a summary line
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Demo(args) => run_demo(args),
        Commands::Render(args) => run_render(args),
        Commands::Stats(args) => run_stats(args),
    }
}

fn run_demo(args: &DemoArgs) -> anyhow::Result<()> {
    if args.min_size < 1 || args.max_size < args.min_size {
        anyhow::bail!(
            "invalid size range {}..={}",
            args.min_size,
            args.max_size
        );
    }
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;

    let mut rng = match args.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let center = Point::new(args.center_x, args.center_y);
    let mut layouter = CircularCloudLayouter::new(center);
    for _ in 0..args.count {
        let w = rng.gen_range(args.min_size..=args.max_size);
        let h = rng.gen_range(args.min_size..=args.max_size);
        layouter.place(Size::new(w, h))?;
    }
    info!(count = layouter.rects().len(), "placed rectangles");

    let layout = CloudLayout::new(center, layouter.rects().to_vec());
    let json_path = args.out_dir.join(format!("{}.json", args.name));
    write_layout(&layout, &json_path)?;
    info!(path = %json_path.display(), "wrote layout");

    let stats = cloud_stats(&layout.rects, center)?;
    info!("{}", stats.summary());

    if !args.no_png {
        let png_path = args.out_dir.join(format!("{}.png", args.name));
        let img = render_cloud(&layout.rects, args.margin, args.outlines)?;
        img.save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!(path = %png_path.display(), "wrote image");
    }
    Ok(())
}

fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    let layout = read_layout(&args.input)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_extension("png"));
    let img = render_cloud(&layout.rects, args.margin, args.outlines)?;
    img.save_with_format(&out, image::ImageFormat::Png)
        .with_context(|| format!("write {}", out.display()))?;
    info!(path = %out.display(), "wrote image");
    Ok(())
}

fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    let layout = read_layout(&args.input)?;
    let stats = cloud_stats(&layout.rects, layout.center)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.summary());
    }
    Ok(())
}

fn read_layout(path: &Path) -> anyhow::Result<CloudLayout> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let layout: CloudLayout =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    Ok(layout)
}

fn write_layout(layout: &CloudLayout, path: &Path) -> anyhow::Result<()> {
    let value = to_json(layout);
    fs::write(path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
