use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use kite_engine::coords::{Origin, Size, Vec2};
use kite_engine::logging::{init_logging, LoggingConfig};
use kite_engine::paint::{BitmapHandle, Color, FontPaint};
use kite_engine::render::RecordingSurface;
use kite_engine::scene::{NodeId, NodeKind, Sprite, ZIndex};
use kite_engine::time::FrameClock;
use kite_engine::tween::{Delay, Ease, PropertyAction, Sequence, TweenMode, Value};
use kite_engine::{Stage, StageConfig};

const SURFACE: Size = Size { width: 320.0, height: 240.0 };

/// Drives a demo stage headlessly and reports what it draws.
#[derive(Parser, Debug)]
#[command(name = "kite-studio", version)]
struct StudioArgs {
    /// Number of frames to run.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Print a status line every N frames (0 disables).
    #[arg(long, default_value_t = 30)]
    report_every: u32,

    /// Coordinate origin of the scene.
    #[arg(long, value_enum, default_value_t = OriginArg::UpperLeft)]
    origin: OriginArg,

    /// Draw node outlines instead of contents.
    #[arg(long, default_value_t = false)]
    outlines: bool,

    /// Sleep between frames and take dt from a frame clock.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum OriginArg {
    UpperLeft,
    LowerLeft,
}

impl From<OriginArg> for Origin {
    fn from(arg: OriginArg) -> Self {
        match arg {
            OriginArg::UpperLeft => Origin::UpperLeft,
            OriginArg::LowerLeft => Origin::LowerLeft,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = StudioArgs::parse();
    run(args)
}

fn run(args: StudioArgs) -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║             KITE STUDIO v0.1           ║");
    println!("  ║   headless stage  ·  recording surface ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let origin = Origin::from(args.origin);
    let config = StageConfig::default()
        .with_origin(origin)
        .with_debug_outlines(args.outlines)
        .with_clear_color(Color::rgb(18, 18, 24));
    let mut stage = Stage::new(config);
    let cast = build_scene(&mut stage);
    log::info!("scene ready: {} node(s), {} action(s)", stage.scene().len(), stage.actions().len());

    let mut surface = RecordingSurface::new(SURFACE, origin);
    let mut clock = FrameClock::new();
    let fixed_dt = 1.0 / f64::from(args.fps);
    let frame_interval = Duration::try_from_secs_f64(fixed_dt)
        .with_context(|| format!("invalid frame interval for --fps {}", args.fps))?;

    for frame in 0..args.frames {
        let dt = if args.realtime {
            std::thread::sleep(frame_interval);
            clock.tick().dt
        } else {
            fixed_dt
        };

        stage.update(dt);
        surface.reset();
        let drawn = stage.render(&mut surface);

        if args.report_every > 0 && frame % args.report_every == 0 {
            report(&stage, &cast, frame, drawn, surface.draws().count());
        }
    }

    println!();
    println!("  {} frame(s) rendered, {} action(s) still running.", args.frames, stage.actions().len());
    println!();
    Ok(())
}

/// Nodes the report follows.
struct Cast {
    crate_box: NodeId,
    wheel: NodeId,
    label: NodeId,
    runner: NodeId,
}

fn build_scene(stage: &mut Stage) -> Cast {
    let scene = stage.scene_mut();
    let root = scene.root();

    let backdrop = scene.spawn(
        root,
        NodeKind::Rectangle,
        &[
            Value::Vector2(SURFACE.width / 2.0, SURFACE.height / 2.0),
            Value::Vector2(SURFACE.width, SURFACE.height),
        ],
    );
    scene.set_name(backdrop, "backdrop");
    if let Some(node) = scene.node_mut(backdrop) {
        node.z = ZIndex::new(-10);
        node.transform.color = Color::rgb(40, 44, 52);
    }

    let crate_box = scene.spawn(
        root,
        NodeKind::Rectangle,
        &[Value::Vector2(20.0, 40.0), Value::Vector2(24.0, 24.0)],
    );
    scene.set_name(crate_box, "crate");

    // The wheel's spoke is a child: it follows the wheel's rotation.
    let wheel = scene.spawn(
        root,
        NodeKind::Ellipse,
        &[Value::Vector2(160.0, 120.0), Value::Vector2(48.0, 48.0)],
    );
    scene.set_name(wheel, "wheel");
    let spoke = scene.spawn(
        wheel,
        NodeKind::Rectangle,
        &[Value::Vector2(0.0, 0.0), Value::Vector2(4.0, 40.0)],
    );
    if let Some(node) = scene.node_mut(spoke) {
        node.z = ZIndex::new(1);
        node.transform.color = Color::black();
    }

    let label = scene.spawn(
        root,
        NodeKind::text("kite", FontPaint::new("sans", 18.0, Color::white())),
        &[Value::Vector2(160.0, 20.0), Value::Vector2(60.0, 20.0)],
    );
    scene.set_name(label, "label");
    if let Some(node) = scene.node_mut(label) {
        node.z = ZIndex::new(5);
    }

    let runner = scene.spawn(
        root,
        NodeKind::Sprite(Sprite::from_grid(BitmapHandle(1), Size::new(16.0, 16.0), 4, 8, 0.08)),
        &[Value::Vector2(40.0, 200.0), Value::Vector2(32.0, 32.0)],
    );
    scene.set_name(runner, "runner");

    let mut pending = Vec::new();
    if let Some(node) = scene.node_mut(crate_box) {
        let slide = PropertyAction::bind(
            node,
            "Transformation.Position",
            Value::Vector2(280.0, 40.0),
            TweenMode::Absolute,
            2.0,
            Ease::InOutCubic,
        );
        let back = PropertyAction::by(node, "Transformation.Position", Vec2::new(-260.0, 0.0), 1.5);
        pending.push((crate_box, Sequence::new().then(slide).then(Delay::new(0.5)).then(back)));
    }
    if let Some(node) = scene.node_mut(wheel) {
        let spin = PropertyAction::by(node, "Transformation.Rotation", 720.0, 4.0);
        pending.push((wheel, Sequence::new().then(spin)));
    }
    if let Some(node) = scene.node_mut(label) {
        let fade = PropertyAction::bind(
            node,
            "Transformation.Opacity",
            Value::Scalar(0.0),
            TweenMode::Absolute,
            3.0,
            Ease::OutSine,
        );
        pending.push((label, Sequence::new().then(Delay::new(1.0)).then(fade)));
    }
    if let Some(node) = scene.node_mut(runner) {
        let run = PropertyAction::by(node, "Transformation.Position", Vec2::new(240.0, 0.0), 3.0);
        let hop = PropertyAction::by(node, "Z", 3.0, 0.1);
        pending.push((runner, Sequence::new().then(run).then(hop)));
    }

    for (node, action) in pending {
        stage.run_action(node, action);
    }

    Cast { crate_box, wheel, label, runner }
}

fn report(stage: &Stage, cast: &Cast, frame: u32, drawn: usize, draws: usize) {
    let scene = stage.scene();
    let Some(crate_box) = scene.node(cast.crate_box) else { return };
    let Some(wheel) = scene.node(cast.wheel) else { return };
    let Some(label) = scene.node(cast.label) else { return };
    let Some(runner) = scene.node(cast.runner) else { return };

    let frame_index = match &runner.kind {
        NodeKind::Sprite(sprite) => sprite.frame_index(),
        _ => 0,
    };
    let p = crate_box.transform.position;

    println!(
        "  [{frame:>4}]  nodes {drawn:>2}  draws {draws:>2}  crate ({:>6.1}, {:>5.1})  wheel {:>6.1}°  label α {:>3}  runner z {} frame {}",
        p.x,
        p.y,
        wheel.transform.rotation,
        label.transform.color.a,
        runner.z.get(),
        frame_index,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = StudioArgs::try_parse_from(["kite-studio"]).unwrap();
        assert_eq!(args.frames, 300);
        assert_eq!(args.fps, 60);
        assert_eq!(Origin::from(args.origin), Origin::UpperLeft);
        assert!(!args.outlines && !args.realtime);
    }

    #[test]
    fn origin_and_flags() {
        let args = StudioArgs::try_parse_from([
            "kite-studio",
            "--origin",
            "lower-left",
            "--outlines",
            "--frames",
            "5",
        ])
        .unwrap();
        assert_eq!(Origin::from(args.origin), Origin::LowerLeft);
        assert!(args.outlines);
        assert_eq!(args.frames, 5);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(StudioArgs::try_parse_from(["kite-studio", "--fps", "0"]).is_err());
    }

    #[test]
    fn short_demo_runs() {
        let args = StudioArgs::try_parse_from(["kite-studio", "--frames", "3", "--report-every", "0"]).unwrap();
        run(args).unwrap();
    }
}
