use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use chart_cursor::api::CursorConfig;
use chart_cursor::core::PlotFrame;
use chart_cursor::extensions::{CursorContext, CursorEvent, CursorListener};
use chart_cursor::interaction::{
    Cursor, CursorGeometry, PointerDispatcher, PointerEvent, RadarCursor, XyCursor,
};
use chart_cursor::render::{Renderer, SvgRenderer};
use serde::{Deserialize, Serialize};

const USAGE: &str = "usage: cursor_replay --input <script.json> [--output <events.jsonl>] [--svg <frame.svg>]";
const SURFACE: u64 = 1;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    svg: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplayKind {
    Xy,
    Radar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplayStep {
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    /// Advances animations by the given milliseconds.
    Advance(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayScript {
    kind: ReplayKind,
    #[serde(default)]
    config: CursorConfig,
    frame: PlotFrame,
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Serialize)]
struct ReplayLine {
    step: usize,
    event: CursorEvent,
}

struct Recorder {
    step: Rc<RefCell<usize>>,
    lines: Rc<RefCell<Vec<ReplayLine>>>,
}

impl CursorListener for Recorder {
    fn id(&self) -> &str {
        "cursor-replay-recorder"
    }

    fn on_event(&mut self, event: CursorEvent, _context: CursorContext) {
        let step = *self.step.borrow();
        self.lines.borrow_mut().push(ReplayLine { step, event });
    }
}

fn main() {
    let _ = chart_cursor::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let script: ReplayScript =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let (lines, svg) = match script.kind {
        ReplayKind::Xy => {
            let cursor = XyCursor::new(script.config.clone(), SURFACE, script.frame)
                .map_err(|err| err.to_string())?;
            replay(cursor, &script)?
        }
        ReplayKind::Radar => {
            let cursor = RadarCursor::new(script.config.clone(), SURFACE, script.frame)
                .map_err(|err| err.to_string())?;
            replay(cursor, &script)?
        }
    };

    let mut rendered = String::new();
    for line in &lines {
        let json = serde_json::to_string(line).map_err(|err| format!("encode failed: {err}"))?;
        rendered.push_str(&json);
        rendered.push('\n');
    }
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{rendered}"),
    }
    if let Some(path) = &args.svg {
        fs::write(path, svg)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }
    Ok(())
}

fn replay<G: CursorGeometry + 'static>(
    mut cursor: Cursor<G>,
    script: &ReplayScript,
) -> Result<(Vec<ReplayLine>, String), String> {
    let step = Rc::new(RefCell::new(0usize));
    let lines = Rc::new(RefCell::new(Vec::new()));
    cursor
        .register_listener(Box::new(Recorder {
            step: Rc::clone(&step),
            lines: Rc::clone(&lines),
        }))
        .map_err(|err| err.to_string())?;

    let dispatcher = PointerDispatcher::new();
    let cursor = cursor.into_shared(&dispatcher);
    for (index, replay_step) in script.steps.iter().enumerate() {
        *step.borrow_mut() = index;
        let event = match *replay_step {
            ReplayStep::Down([x, y]) => PointerEvent::down(x, y),
            ReplayStep::Move([x, y]) => PointerEvent::moved(x, y),
            ReplayStep::Up([x, y]) => PointerEvent::up(x, y),
            ReplayStep::Advance(delta_ms) => {
                cursor.borrow_mut().advance(delta_ms);
                continue;
            }
        };
        dispatcher.dispatch(&event.over(SURFACE));
    }

    let mut renderer = SvgRenderer::new();
    let frame = cursor.borrow().frame();
    renderer.render(&frame).map_err(|err| err.to_string())?;
    let svg = renderer.document(
        frame.frame.origin.x + frame.frame.size.width,
        frame.frame.origin.y + frame.frame.size.height,
    );
    cursor.borrow_mut().dispose();

    let lines = lines.take();
    Ok((lines, svg))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut svg = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--svg" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --svg".to_owned())?;
                svg = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    Ok(CliArgs { input, output, svg })
}
