//! Planar Bridge entry point
//!
//! Native: runs the worker on its own thread and mirrors a random scene for a
//! few seconds. Web: runs the worker in-process, driven by animation frames.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Demo scene shared by both targets
mod demo {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use planar_bridge::protocol::{AddBodies, Message};
    use planar_bridge::sim::{
        BodyProps, BodyShapeType, CompoundShape, ContactMaterialOptions, MaterialDescriptor,
        ShapeArgs, ShapeType,
    };

    pub const BALLS: usize = 8;
    pub const CRATES: usize = 4;

    fn material(name: &str) -> Option<MaterialDescriptor> {
        Some(MaterialDescriptor::Name(name.to_string()))
    }

    pub fn ball_uuid(i: usize) -> String {
        format!("ball-{}", i)
    }

    /// Messages that build the scene, in send order
    pub fn scene(seed: u64) -> Vec<Message> {
        let mut rng = Pcg32::seed_from_u64(seed);
        log::info!("Building demo scene (seed {})", seed);

        let mut messages = vec![Message::AddContactMaterial {
            props: (
                MaterialDescriptor::Name("ground".into()),
                MaterialDescriptor::Name("ball".into()),
                ContactMaterialOptions {
                    friction: 0.6,
                    restitution: 0.4,
                    ..ContactMaterialOptions::default()
                },
            ),
            uuid: "ground-ball".into(),
        }];

        messages.push(Message::AddBodies(AddBodies {
            props: vec![BodyProps {
                material: material("ground"),
                ..BodyProps::default()
            }],
            shape_type: BodyShapeType::Plane,
            uuid: vec!["ground".into()],
        }));

        let balls = (0..BALLS)
            .map(|_| BodyProps {
                position: Vec2::new(rng.random_range(-5.0..5.0), rng.random_range(2.0..10.0)),
                velocity: Vec2::new(rng.random_range(-1.0..1.0), 0.0),
                mass: 1.0,
                material: material("ball"),
                args: ShapeArgs {
                    radius: Some(rng.random_range(0.2..0.6)),
                    ..ShapeArgs::default()
                },
                ..BodyProps::default()
            })
            .collect();
        messages.push(Message::AddBodies(AddBodies {
            props: balls,
            shape_type: BodyShapeType::Circle,
            uuid: (0..BALLS).map(ball_uuid).collect(),
        }));

        let crates = (0..CRATES)
            .map(|_| BodyProps {
                position: Vec2::new(rng.random_range(-5.0..5.0), rng.random_range(2.0..10.0)),
                angle: rng.random_range(0.0..std::f32::consts::PI),
                angular_velocity: rng.random_range(-2.0..2.0),
                mass: 2.0,
                args: ShapeArgs {
                    width: Some(rng.random_range(0.5..1.5)),
                    height: Some(rng.random_range(0.5..1.5)),
                    ..ShapeArgs::default()
                },
                ..BodyProps::default()
            })
            .collect();
        messages.push(Message::AddBodies(AddBodies {
            props: crates,
            shape_type: BodyShapeType::Box,
            uuid: (0..CRATES).map(|i| format!("crate-{}", i)).collect(),
        }));

        messages.push(Message::AddBodies(AddBodies {
            props: vec![BodyProps {
                position: Vec2::new(0.0, 12.0),
                mass: 3.0,
                shapes: vec![
                    CompoundShape {
                        shape_type: ShapeType::Capsule,
                        position: Vec2::ZERO,
                        angle: 0.0,
                        args: ShapeArgs {
                            length: Some(2.0),
                            radius: Some(0.3),
                            ..ShapeArgs::default()
                        },
                    },
                    CompoundShape {
                        shape_type: ShapeType::Particle,
                        position: Vec2::new(0.0, 0.5),
                        angle: 0.0,
                        args: ShapeArgs::default(),
                    },
                ],
                ..BodyProps::default()
            }],
            shape_type: BodyShapeType::Compound,
            uuid: vec!["dumbbell".into()],
        }));

        messages
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use planar_bridge::consts::SIM_DT;
    use planar_bridge::platform::native::IntervalDriver;
    use planar_bridge::protocol::Message;
    use planar_bridge::renderer::vertex::as_bytes;
    use planar_bridge::worker::spawn;
    use planar_bridge::{Debugger, DebugOptions, MemoryScene, NormalAxis, Result, Worker};

    use super::demo;

    /// Frames to run (three seconds at 60 Hz)
    const FRAMES: u64 = 180;

    pub fn run(seed: u64) -> Result<()> {
        let handle = spawn(Worker::new())?;
        for message in demo::scene(seed) {
            handle.send(message)?;
        }

        let options = DebugOptions {
            normal_index: NormalAxis::Z,
            ..DebugOptions::default()
        };
        let color = options.rgba();
        let mut debugger = Debugger::new(MemoryScene::new(), options).on_init(|body, proxy, shape| {
            log::debug!(
                "Proxy {:?} for {} ({:?})",
                proxy.mesh,
                body.uuid,
                shape.shape_type()
            )
        });

        let mut bodies = Vec::new();
        let mut failed = None;
        let frames = IntervalDriver::from_hz(60.0).run(|frame| {
            if frame == FRAMES / 2 {
                let doomed = (0..demo::BALLS / 2).map(demo::ball_uuid).collect();
                if let Err(e) = handle.send(Message::RemoveBodies { uuid: doomed }) {
                    failed = Some(e);
                    return false;
                }
            }
            if let Err(e) = handle.send(Message::Step { dt: SIM_DT }) {
                failed = Some(e);
                return false;
            }
            if let Some(latest) = handle.poll_frame() {
                bodies = latest;
            }
            if let Some(report) = debugger.frame(&bodies) {
                if frame % 60 == 0 {
                    log::info!(
                        "Frame {}: {} bodies, {} proxies ({} new, {} dropped)",
                        frame,
                        bodies.len(),
                        report.slots,
                        report.created,
                        report.removed
                    );
                }
            }
            frame + 1 < FRAMES
        });
        if let Some(e) = failed {
            return Err(e);
        }

        let vertices = debugger.scene().line_vertices(color);
        log::info!(
            "Ran {} frames; {} meshes, {} line vertices ({} bytes)",
            frames,
            debugger.scene().len(),
            vertices.len(),
            as_bytes(&vertices).len()
        );

        debugger.clear();
        handle.shutdown();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use planar_bridge::consts::SIM_DT;
    use planar_bridge::platform::web::animation_loop;
    use planar_bridge::protocol::{Message, WorkerEvent};
    use planar_bridge::{Debugger, DebugOptions, MemoryScene, Worker};

    use super::demo;

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Planar Bridge starting...");

        let mut worker = Worker::new();
        for message in demo::scene(js_sys::Date::now() as u64) {
            if let Err(e) = worker.handle(message) {
                log::warn!("Demo scene message rejected: {}", e);
            }
        }

        let mut debugger = Debugger::new(MemoryScene::new(), DebugOptions::load());
        let frame = Rc::new(RefCell::new(move |_time: f64| {
            match worker.handle(Message::Step { dt: SIM_DT }) {
                Ok(Some(WorkerEvent::Frame { bodies, .. })) => {
                    debugger.frame(&bodies);
                }
                Ok(_) => {}
                Err(e) => log::warn!("Step failed: {}", e),
            }
            true
        }));
        animation_loop(frame);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("Planar Bridge (native) starting...");

    if let Err(e) = native::run(seed) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
