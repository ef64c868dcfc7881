//! Headless scene driver used by `folio simulate`.

use std::f32::consts::TAU;
use std::time::Instant;

use folio_common::{HostEvent, Point, Viewport};
use folio_config::FolioConfig;
use folio_fx::{FrameQueue, FrameTimer, LoopId, RecordingSurface, Scene};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::SimulateArgs;

/// Frames per pointer revolution.
const ORBIT_FRAMES: f32 = 120.0;

const PAGE_SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];
const SKILL_LEVELS: [f32; 3] = [90.0, 75.0, 60.0];

/// Summary of a simulated run, printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frames: u32,
    pub viewport: Viewport,
    pub particles: usize,
    /// Draw commands on the surface after the last frame.
    pub circles: usize,
    pub lines: usize,
    pub pointer_lines: usize,
    pub pointer: Option<Point>,
    pub orbs: Vec<[f32; 2]>,
    pub cursor_ring: Option<Point>,
    pub scroll_progress: f32,
    pub active_section: Option<String>,
    pub skill_scales: Vec<f32>,
    pub loop_frames: Vec<(LoopId, u64)>,
    pub avg_frame_ms: f64,
    pub worst_frame_ms: f64,
    pub fps: f64,
}

/// Pointer position for `frame`: a circle around the viewport center.
fn scripted_pointer(frame: u32, viewport: Viewport) -> Point {
    let angle = frame as f32 / ORBIT_FRAMES * TAU;
    let radius = viewport.width.min(viewport.height) / 3.0;
    Point::new(
        viewport.width / 2.0 + radius * angle.cos(),
        viewport.height / 2.0 + radius * angle.sin(),
    )
}

/// Scroll offset for `frame`, moving linearly from top to bottom over the run.
fn scripted_scroll(frame: u32, frames: u32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = (document_height - viewport_height).max(0.0);
    if frames <= 1 {
        return scrollable;
    }
    scrollable * frame as f32 / (frames - 1) as f32
}

fn lay_out_page(scene: &mut Scene<RecordingSurface, Vec<Point>>, document_height: f32) {
    let spacing = document_height / PAGE_SECTIONS.len() as f32;
    let scroll = scene.scroll_mut();
    for (i, id) in PAGE_SECTIONS.iter().enumerate() {
        let top = i as f32 * spacing;
        scroll.add_section(*id, top);
        scroll.add_reveal(top + spacing * 0.25);
    }
    let skills_top = 2.0 * spacing;
    for (i, level) in SKILL_LEVELS.iter().enumerate() {
        scroll.add_skill_bar(skills_top + 60.0 * (i + 1) as f32, *level);
    }
}

pub fn simulate(config: &FolioConfig, args: &SimulateArgs) -> FrameReport {
    let mut config = config.clone();
    if args.seed.is_some() {
        config.particles.seed = args.seed;
    }

    let viewport = Viewport::new(args.width, args.height);
    let stage = vec![Point::ORIGIN; config.orbs.orbs.len()];
    let mut scene = Scene::new(&config, viewport, Some(RecordingSurface::new()), Some(stage));
    lay_out_page(&mut scene, args.document_height);

    let dt = config.performance.frame_interval() as f32;
    let mut timer = FrameTimer::with_capacity(config.performance.timing_samples as usize);
    let mut queue = FrameQueue::new();
    scene.start(&mut queue);

    info!(frames = args.frames, width = viewport.width, height = viewport.height, "simulation started");

    for frame in 0..args.frames {
        if args.resize_at == Some(frame) {
            debug!(frame, "scripted resize");
            scene.handle(&HostEvent::Resize {
                width: args.resize_width,
                height: args.resize_height,
            });
        }

        let current = scene.viewport();
        let pointer = scripted_pointer(frame, current);
        scene.handle(&HostEvent::PointerMove {
            x: pointer.x,
            y: pointer.y,
        });
        scene.handle(&HostEvent::Scroll {
            scroll_y: scripted_scroll(frame, args.frames, args.document_height, current.height),
            document_height: args.document_height,
        });

        let started = Instant::now();
        for id in queue.take_due() {
            scene.run_frame(id, dt, &mut queue);
        }
        timer.record(started.elapsed());
    }
    scene.stop();

    let report = build_report(&scene, args.frames, &timer);
    info!(
        circles = report.circles,
        lines = report.lines,
        fps = report.fps,
        "simulation finished"
    );
    report
}

fn build_report(scene: &Scene<RecordingSurface, Vec<Point>>, frames: u32, timer: &FrameTimer) -> FrameReport {
    let pointer = scene.pointer().position();
    let (circles, lines, pointer_lines) = scene
        .particles()
        .surface()
        .map(|s| {
            let to_pointer = pointer.map_or(0, |p| s.lines_to(p).count());
            (s.circle_count(), s.line_count(), to_pointer)
        })
        .unwrap_or_default();

    let tweens = scene.tweens();
    FrameReport {
        frames,
        viewport: scene.viewport(),
        particles: scene.particles().field().len(),
        circles,
        lines,
        pointer_lines,
        pointer,
        orbs: scene
            .orbs()
            .stage()
            .map(|stage| stage.iter().map(|p| [p.x, p.y]).collect())
            .unwrap_or_default(),
        cursor_ring: tweens.cursor.as_ref().map(|c| c.ring()),
        scroll_progress: tweens.scroll.progress(),
        active_section: tweens.scroll.active_section().map(|s| s.id.clone()),
        skill_scales: tweens.scroll.skill_bars().iter().map(|b| b.scale()).collect(),
        loop_frames: LoopId::ALL.iter().map(|&id| (id, scene.frames(id))).collect(),
        avg_frame_ms: timer.frame_time_ms(),
        worst_frame_ms: timer.worst_frame_ms(),
        fps: timer.fps(),
    }
}
