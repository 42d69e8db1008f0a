//! End-to-end tests driving the renderer against a fake terminal surface.

use logpane::{ProgressRenderer, RenderError, TerminalSurface};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake terminal with fixed dimensions that records every painted frame
#[derive(Clone)]
struct RecordingSurface {
    width: u16,
    height: u16,
    frames: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingSurface {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn last_frame(&self) -> Vec<String> {
        self.frames.lock().unwrap().last().cloned().unwrap_or_default()
    }

    fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

impl TerminalSurface for RecordingSurface {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn redraw(&mut self, lines: &[String]) -> Result<(), RenderError> {
        self.frames.lock().unwrap().push(lines.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Renderer with throttling disabled so every mutation paints
fn unthrottled(
    surface: &RecordingSurface,
    max_steps: u64,
) -> ProgressRenderer<RecordingSurface> {
    ProgressRenderer::with_options(surface.clone(), max_steps, Duration::ZERO, 60).unwrap()
}

#[test]
fn five_single_advances_match_one_advance_of_five() {
    let surface_a = RecordingSurface::new(200, 24);
    let mut a = unthrottled(&surface_a, 100);
    for _ in 0..5 {
        a.advance(1).unwrap();
    }

    let surface_b = RecordingSurface::new(200, 24);
    let mut b = unthrottled(&surface_b, 100);
    b.advance(5).unwrap();

    assert_eq!(a.bar().current(), 5);
    assert_eq!(b.bar().current(), 5);
    assert!(surface_a.last_frame()[1].contains("5/100"));
    assert!(surface_b.last_frame()[1].contains("5/100"));
    // Intermediate frames differ, the final counter does not.
    assert!(surface_a.frame_count() > surface_b.frame_count());
}

#[test]
fn log_pane_keeps_only_the_newest_lines() {
    // Height 10 leaves capacity for 6 log lines.
    let surface = RecordingSurface::new(200, 10);
    let mut r = unthrottled(&surface, 10);
    for i in 0..12 {
        r.write_info(format!("msg {i}")).unwrap();
    }

    assert_eq!(r.log_len(), 6);
    let frame = surface.last_frame();
    assert!(!frame.iter().any(|l| l.contains("msg 5")));
    assert!(frame.iter().any(|l| l.contains("msg 6")));
    assert!(frame.iter().any(|l| l.contains("msg 11")));
}

#[test]
fn warning_and_error_reach_the_summary_table() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 10);
    r.write_warning("x").unwrap();
    r.write_error("y").unwrap();

    let mut rendered = None;
    r.finish_with(
        true,
        |question, default_yes| {
            assert_eq!(question, "Show warnings and errors?");
            assert!(default_yes);
            true
        },
        |headers, rows| {
            rendered = Some((
                headers.iter().map(ToString::to_string).collect::<Vec<_>>(),
                rows.to_vec(),
            ));
        },
    )
    .unwrap();

    let (headers, rows) = rendered.expect("summary table rendered");
    assert_eq!(headers, vec!["Warnings", "Errors"]);
    assert_eq!(rows, vec![["x".to_string(), "y".to_string()]]);
}

#[test]
fn declined_summary_prompt_renders_no_table() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 10);
    r.write_warning("w").unwrap();

    r.finish_with(true, |_, _| false, |_, _| panic!("declined, no table"))
        .unwrap();
}

#[test]
fn clean_run_never_prompts() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 10);
    r.write_info("all good").unwrap();

    r.finish_with(
        true,
        |_, _| panic!("no warnings or errors, prompt must not run"),
        |_, _| panic!("no table either"),
    )
    .unwrap();
}

#[test]
fn narrow_terminal_clamps_the_layout() {
    let surface = RecordingSurface::new(40, 24);
    let r = unthrottled(&surface, 100);

    let plan = r.plan();
    assert_eq!(plan.effective_line_length, 40);
    assert_eq!(plan.bar_width, 25); // 40 - 8 - 7
}

#[test]
fn title_row_spans_the_effective_line_length() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 10);
    r.set_title("Deploying").unwrap();

    let frame = surface.last_frame();
    assert!(frame[0].contains("Deploying"));
    // Padded with spaces out to the 60-cell line, inside the style codes.
    assert!(frame[0].contains("Deploying "));
}

#[test]
fn stats_row_shows_duration_and_memory() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 10);
    r.advance(1).unwrap();

    let frame = surface.last_frame();
    assert!(frame[2].contains("sec"));
    assert!(frame[2].contains('B')); // B / KB / MB
}

#[test]
fn advancing_past_max_is_cosmetic_not_fatal() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 4);
    r.advance(6).unwrap();

    assert!(surface.last_frame()[1].contains("6/4"));
    assert_eq!(r.bar().percent(), 150);
}

#[test]
fn zero_max_steps_is_degenerate_but_renders() {
    let surface = RecordingSurface::new(200, 24);
    let mut r = unthrottled(&surface, 0);
    r.write_info("working").unwrap();
    r.finish_with(false, |_, _| false, |_, _| ()).unwrap();

    let frame = surface.last_frame();
    assert!(frame[1].contains("0/0"));
    assert!(frame[1].contains("100%"));
}
