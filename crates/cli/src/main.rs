use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use polyquery::api::{
    draw_collection, load_polygons, write_polygon_file, LatticeCfg, Session, SessionCfg,
    VertexCount,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

mod stats;

#[derive(Parser)]
#[command(name = "polyquery-cli", version = polyquery::VERSION)]
#[command(about = "Load a polygon file and answer AREA/MAX/MIN/COUNT/LESSAREA/INFRAME/SAME queries")]
#[command(args_conflicts_with_subcommands = true)]
struct Cmd {
    /// Polygon file, one `N (x;y) ...` per line; commands are read from stdin
    file: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Fractional digits printed for areas
    #[arg(long, default_value_t = 1)]
    precision: usize,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Summarize a polygon file
    Stats {
        file: PathBuf,
        /// Print pretty JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a reproducible random polygon file
    Gen {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 3)]
        min_vertices: usize,
        #[arg(long, default_value_t = 8)]
        max_vertices: usize,
        /// Coordinates are drawn from [-span, span]
        #[arg(long, default_value_t = 20)]
        span: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, _) => LevelFilter::DEBUG,
    }
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(log_level(cmd.verbose, cmd.quiet))
        .with_writer(io::stderr)
        .init();
    let res = match cmd.action {
        Some(Action::Stats { file, json }) => stats(&file, json),
        Some(Action::Gen {
            count,
            min_vertices,
            max_vertices,
            span,
            seed,
            out,
        }) => gen(count, min_vertices, max_vertices, span, seed, &out),
        None => match cmd.file {
            Some(file) => run(&file, cmd.script.as_deref(), cmd.precision),
            None => Err(anyhow::anyhow!("expected a polygon file argument")),
        },
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", SessionCfg::default().invalid_token);
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(file: &Path, script: Option<&Path>, precision: usize) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("reading polygons from {}", file.display()))?;
    let loaded = load_polygons(&String::from_utf8_lossy(&bytes));
    tracing::info!(
        file = %file.display(),
        polygons = loaded.polygons.len(),
        skipped = loaded.skipped,
        "loaded"
    );
    let cfg = SessionCfg {
        precision,
        ..SessionCfg::default()
    };
    let session = Session::new(loaded.polygons, cfg);
    let stdout = io::stdout();
    let tally = match script {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(f), stdout.lock())?
        }
        None => session.run(io::stdin().lock(), stdout.lock())?,
    };
    tracing::info!(
        answered = tally.answered,
        rejected = tally.rejected,
        "session_done"
    );
    Ok(())
}

fn stats(file: &Path, json: bool) -> Result<()> {
    let summary = stats::summarize_file(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

fn gen(
    count: usize,
    min_vertices: usize,
    max_vertices: usize,
    span: i32,
    seed: u64,
    out: &Path,
) -> Result<()> {
    tracing::info!(count, min_vertices, max_vertices, span, seed, out = %out.display(), "gen");
    let cfg = LatticeCfg {
        vertex_count: VertexCount::Uniform {
            min: min_vertices,
            max: max_vertices,
        },
        span,
    };
    let polys = draw_collection(cfg, seed, count);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let f = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_polygon_file(&polys, BufWriter::new(f))
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
