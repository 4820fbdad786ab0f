use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use doodleface::{
    Classification, Customization, DoodleEngine, EngineOpts, Emotion, FaceLandmarks, Rect,
};

#[derive(Parser, Debug)]
#[command(name = "doodleface", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose one frame of landmarks into doodle strokes (SVG or JSON).
    Compose(ComposeArgs),
    /// Load one asset key and print what it holds.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Directory holding `<key>.json` sketch files.
    #[arg(long)]
    assets: PathBuf,

    /// Landmarks JSON for one face.
    #[arg(long)]
    landmarks: PathBuf,

    /// Customization JSON (emotion, eye flags, eyeglasses, colors).
    #[arg(long)]
    state: Option<PathBuf>,

    /// Classifier label to apply before composing (e.g. "Happy", "Disgust"). Falls back to `--state`.
    #[arg(long)]
    emotion: Option<String>,

    /// Classifier eyeglasses result (`--eyeglasses` alone means true). Falls back to `--state`.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    eyeglasses: Option<bool>,

    /// Landmarks are normalized to this face box `x,y,w,h` and get projected into pixels.
    #[arg(long, value_parser = parse_face_box)]
    normalized_face_box: Option<Rect>,

    /// Sketch selection seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; `.json` writes the frame as JSON, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,

    /// SVG canvas width.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// SVG canvas height.
    #[arg(long, default_value_t = 480)]
    height: u32,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Directory holding `<key>.json` sketch files.
    #[arg(long)]
    assets: PathBuf,

    /// Asset key, e.g. `eye-closed`.
    #[arg(long)]
    key: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_face_box(s: &str) -> Result<Rect, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("face box '{s}': {e}"))?;
    let [x, y, w, h] = parts[..] else {
        return Err(format!("face box '{s}' must be x,y,w,h"));
    };
    if w <= 0.0 || h <= 0.0 {
        return Err(format!("face box '{s}' must have positive size"));
    }
    Ok(Rect::from_origin_size((x, y), (w, h)))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {what} '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {what} '{}'", path.display()))
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut landmarks: FaceLandmarks = read_json(&args.landmarks, "landmarks")?;
    if let Some(face_box) = args.normalized_face_box {
        landmarks = landmarks.project(face_box);
    }

    let mut state: Customization = match &args.state {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read customization '{}'", path.display()))?;
            Customization::from_json_str(&text)
                .with_context(|| format!("parse customization '{}'", path.display()))?
        }
        None => Customization::default(),
    };

    let classification =
        (args.emotion.is_some() || args.eyeglasses.is_some()).then(|| Classification {
            emotion: args
                .emotion
                .as_deref()
                .map(Emotion::from_label)
                .unwrap_or(state.emotion),
            has_eyeglasses: args.eyeglasses.unwrap_or(state.has_eyeglasses),
            ..Classification::default()
        });

    let mut opts = EngineOpts::default();
    if let Some(seed) = args.seed {
        opts.seed = seed;
    }
    let mut engine = DoodleEngine::from_dir(&args.assets, opts);
    let frame = engine.process_frame(&mut state, classification.as_ref(), &landmarks);
    for skipped in &frame.skipped {
        eprintln!("skipped {:?}: {}", skipped.feature, skipped.message);
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let is_json = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let body = if is_json {
        serde_json::to_string_pretty(&frame).context("serialize frame")?
    } else {
        frame.to_svg(args.width, args.height)
    };
    std::fs::write(&args.out, body)
        .with_context(|| format!("write output '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} features, {} skipped)",
        args.out.display(),
        frame.features.len(),
        frame.skipped.len()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let mut engine = DoodleEngine::from_dir(&args.assets, EngineOpts::default());
    let sketches = engine
        .store_mut()
        .get_sketches(&args.key)
        .with_context(|| format!("load asset '{}'", args.key))?;

    let strokes: usize = sketches.iter().map(|s| s.strokes().len()).sum();
    let points: usize = sketches.iter().map(|s| s.point_count()).sum();
    println!("key: {}", args.key);
    println!("sketches: {}", sketches.len());
    println!("strokes: {strokes}");
    println!("points: {points}");
    if let Ok(bounds) =
        doodleface::bounding_box_of(sketches.iter().flat_map(|s| s.points()), "asset")
    {
        println!(
            "bounds: x={} y={} w={} h={}",
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        );
    }
    Ok(())
}
