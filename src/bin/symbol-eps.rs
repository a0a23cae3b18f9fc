use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "symbol-eps", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a scene as an EPS file.
    Render(RenderArgs),
    /// Write a scene as EPS to stdout.
    Print(PrintArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Writer options JSON (creator, default_title, font_name, font_size, ring_mapping).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Override the %%Creator comment.
    #[arg(long)]
    creator: Option<String>,

    /// How ring bounding boxes map onto page coordinates.
    #[arg(long, value_enum)]
    ring_mapping: Option<RingMappingChoice>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output EPS path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RingMappingChoice {
    Legacy,
    Mirrored,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Print(args) => cmd_print(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_scene_json(path: &Path) -> anyhow::Result<symbol_eps::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let scene = symbol_eps::Scene::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse scene JSON '{}'", path.display()))?;
    Ok(scene)
}

fn make_options(style: &StyleArgs) -> anyhow::Result<symbol_eps::EpsOptions> {
    let mut opts = match &style.options {
        Some(path) => {
            let f =
                File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f))
                .with_context(|| format!("parse options JSON '{}'", path.display()))?
        }
        None => symbol_eps::EpsOptions::default(),
    };

    if let Some(creator) = &style.creator {
        opts = opts.with_creator(creator.clone());
    }
    if let Some(choice) = style.ring_mapping {
        opts = opts.with_ring_mapping(match choice {
            RingMappingChoice::Legacy => symbol_eps::RingMapping::Legacy,
            RingMappingChoice::Mirrored => symbol_eps::RingMapping::Mirrored,
        });
    }
    opts.validate()?;
    Ok(opts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let opts = make_options(&args.style)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    symbol_eps::EpsWriter::new(&scene)
        .with_options(opts)
        .write_file(&args.out)
        .with_context(|| format!("write eps '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let opts = make_options(&args.style)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    symbol_eps::EpsWriter::new(&scene)
        .with_options(opts)
        .write_to(&mut out)
        .context("write eps to stdout")?;
    Ok(())
}
