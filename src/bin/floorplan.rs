//! CLI tool: draw a room preset (or a JSON room template) as SVG.
//!
//! Usage:
//!   floorplan <bathroom|bedroom|kitchen|living-room> [options]
//!   floorplan --template room.json [options]

use std::env;
use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use floorplan::preset::Preset;
use floorplan::{Generator, RoomTemplate, Style, SvgCanvas};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Options {
    room: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    layout: Option<String>,
    bed: Option<String>,
    style: Option<String>,
    template: Option<String>,
    output: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: floorplan <bathroom|bedroom|kitchen|living-room> [options]");
    eprintln!("       floorplan --template room.json [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --width W          Inner room width in metres");
    eprintln!("  --height H         Inner room height in metres");
    eprintln!("  --layout L         Bathroom layout: shower or bathtub");
    eprintln!("  --bed TYPE         Bedroom bed: twin, full, queen or king");
    eprintln!("  --style FILE       JSON style overrides");
    eprintln!("  --template FILE    JSON room template instead of a preset");
    eprintln!("  --output FILE      SVG output path (default: plan.svg)");
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{name} needs a value"))
        };
        match arg.as_str() {
            "--width" => {
                let v = value("--width")?;
                opts.width = Some(v.parse().with_context(|| format!("invalid width '{v}'"))?);
            }
            "--height" => {
                let v = value("--height")?;
                opts.height = Some(v.parse().with_context(|| format!("invalid height '{v}'"))?);
            }
            "--layout" => opts.layout = Some(value("--layout")?),
            "--bed" => opts.bed = Some(value("--bed")?),
            "--style" => opts.style = Some(value("--style")?),
            "--template" => opts.template = Some(value("--template")?),
            "--output" => opts.output = Some(value("--output")?),
            other if other.starts_with("--") => bail!("unknown option: {other}"),
            other => {
                if opts.room.is_some() {
                    bail!("unexpected argument: {other}");
                }
                opts.room = Some(other.to_owned());
            }
        }
    }
    Ok(opts)
}

fn preset_template(opts: &Options, base: &Style) -> Result<(RoomTemplate, Style)> {
    let Some(room) = &opts.room else {
        bail!("no room type given");
    };
    let mut preset = Preset::from_name(room)?.with_size(opts.width, opts.height);
    match &mut preset {
        Preset::Bathroom(p) => {
            if let Some(layout) = &opts.layout {
                p.layout.clone_from(layout);
            }
        }
        Preset::Bedroom(p) => {
            if let Some(bed) = &opts.bed {
                p.bed_type.clone_from(bed);
            }
        }
        Preset::Kitchen(_) | Preset::LivingRoom(_) => {}
    }
    Ok((preset.template(), preset.style(base)))
}

fn run(opts: &Options) -> Result<()> {
    let base = match &opts.style {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read style '{path}'"))?;
            Style::from_json(&json).with_context(|| format!("invalid style '{path}'"))?
        }
        None => Style::default(),
    };

    let (template, style) = match &opts.template {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read template '{path}'"))?;
            let template: RoomTemplate = serde_json::from_str(&json)
                .with_context(|| format!("invalid template '{path}'"))?;
            (template, base)
        }
        None => preset_template(opts, &base)?,
    };

    let plan = Generator::new(&style)
        .generate(&template)
        .with_context(|| format!("cannot lay out '{}'", template.title))?;
    let mut canvas = SvgCanvas::new().with_title_size(style.fonts.title);
    plan.render(&mut canvas)?;
    let document = canvas
        .into_document()
        .context("canvas produced no document")?;

    let output = opts.output.as_deref().unwrap_or("plan.svg");
    fs::write(output, document).with_context(|| format!("cannot write '{output}'"))?;
    info!(
        output,
        fixtures = plan.layout.fixtures.len(),
        warnings = plan.layout.warnings.len(),
        "{}",
        template.title
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,floorplan=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let result = parse_args(&args).and_then(|opts| run(&opts));
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        print_usage();
        process::exit(1);
    }
}
