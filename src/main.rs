//! Headless walkthrough: replays a short scripted walk through the input
//! processor and camera controller and logs where the camera ends up.
//!
//! Usage: `lookabout [options.toml]` (set `RUST_LOG=info` to see output).

use std::path::Path;
use std::process::ExitCode;

use lookabout::camera::CameraController;
use lookabout::input::{InputEvent, InputProcessor};
use lookabout::options::Options;
use lookabout::util::frame_timing::{Clock, FixedStepClock};

/// Eye height and field of view the walkthrough starts with.
const START_HEIGHT: f32 = 1.5;
const START_FOV: f32 = 45.0;
/// 60 Hz frame step in milliseconds.
const FRAME_MS: f32 = 1000.0 / 60.0;

/// One leg of the walk: events fed before the leg, then frames simulated.
struct Leg {
    label: &'static str,
    events: Vec<InputEvent>,
    frames: u32,
}

fn script() -> Vec<Leg> {
    let motion = |dx, dy| InputEvent::MouseMotion { dx, dy };
    vec![
        Leg {
            label: "settle (first motion sample is dropped)",
            events: vec![motion(640.0, 360.0)],
            frames: 1,
        },
        Leg {
            label: "walk forward",
            events: vec![InputEvent::key("KeyW", true)],
            frames: 60,
        },
        Leg {
            label: "turn right while walking",
            events: vec![motion(450.0, 0.0)],
            frames: 30,
        },
        Leg {
            label: "strafe diagonally",
            events: vec![InputEvent::key("KeyD", true)],
            frames: 30,
        },
        Leg {
            label: "stop and look up",
            events: vec![
                InputEvent::key("KeyW", false),
                InputEvent::key("KeyD", false),
                motion(0.0, -300.0),
            ],
            frames: 1,
        },
        Leg {
            label: "zoom in",
            events: vec![
                InputEvent::Scroll { delta: 3.0 },
                InputEvent::Scroll { delta: 3.0 },
            ],
            frames: 1,
        },
    ]
}

fn load_options() -> Result<Options, lookabout::CameraError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let opts = Options::load(Path::new(&path))?;
            log::info!("Loaded options from {path}");
            Ok(opts)
        }
        None => Ok(Options {
            camera: lookabout::options::CameraOptions::first_person(
                START_HEIGHT,
            ),
            ..Options::default()
        }),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut controller =
        CameraController::with_options(START_HEIGHT, START_FOV, options.camera);
    let mut input = InputProcessor::new(options.input, options.keybindings);
    let mut clock = FixedStepClock::new(FRAME_MS);

    for leg in script() {
        for event in leg.events {
            input.handle_event(event);
        }
        for _ in 0..leg.frames {
            let frame = input.end_frame(clock.tick());
            controller.apply_frame(&frame);
        }

        let position = controller.position();
        log::info!(
            "{:<40} pos ({:6.2}, {:6.2}, {:6.2})  yaw {:7.2}  pitch {:6.2}  fov {:5.1}",
            leg.label,
            position.x,
            position.y,
            position.z,
            controller.yaw(),
            controller.pitch(),
            controller.field_of_view()
        );
    }

    let view = controller.view_transform();
    log::debug!("final view matrix: {view:?}");
    ExitCode::SUCCESS
}
