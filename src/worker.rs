//! Simulation worker context
//!
//! The worker exclusively owns the simulation state and material table. The
//! render side never touches either directly: it sends `Message`s and reads
//! `WorkerEvent`s over two FIFO channels.

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};

use crate::error::{BridgeError, Result};
use crate::protocol::{
    Message, WorkerEvent, add_bodies, add_contact_material, remove_bodies, remove_contact_material,
};
use crate::sim::{BallisticIntegrator, Body, Integrator, MaterialRegistry, State};

/// Worker-side owner of the authoritative simulation
pub struct Worker<I = BallisticIntegrator> {
    state: State,
    materials: MaterialRegistry,
    integrator: I,
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}

impl Worker {
    pub fn new() -> Self {
        Self::with_integrator(BallisticIntegrator)
    }
}

impl<I: Integrator> Worker<I> {
    pub fn with_integrator(integrator: I) -> Self {
        Self {
            state: State::new(),
            materials: MaterialRegistry::new(),
            integrator,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Apply one message; `Step` answers with a frame
    pub fn handle(&mut self, message: Message) -> Result<Option<WorkerEvent>> {
        match message {
            Message::AddBodies(batch) => {
                add_bodies(&mut self.state, &mut self.materials, batch)?;
                Ok(None)
            }
            Message::RemoveBodies { uuid } => {
                remove_bodies(&mut self.state, &uuid);
                Ok(None)
            }
            Message::AddContactMaterial { props, uuid } => {
                add_contact_material(&mut self.state.world, &mut self.materials, props, uuid);
                Ok(None)
            }
            Message::RemoveContactMaterial { uuid } => {
                remove_contact_material(&mut self.state.world, &uuid);
                Ok(None)
            }
            Message::Step { dt } => {
                self.state.step(&mut self.integrator, dt);
                Ok(Some(self.frame()))
            }
        }
    }

    /// Decode and apply a JSON message
    pub fn handle_json(&mut self, json: &str) -> Result<Option<WorkerEvent>> {
        self.handle(Message::from_json(json)?)
    }

    /// Snapshot of the current state for the render side
    pub fn frame(&self) -> WorkerEvent {
        WorkerEvent::Frame {
            tick: self.state.tick,
            time: self.state.world.time,
            bodies: self.state.snapshot(),
        }
    }

    /// Serve messages until the inbox closes or the render side hangs up
    ///
    /// Rejected messages become `WorkerEvent::Error`; the loop keeps going.
    pub fn run(mut self, inbox: Receiver<Message>, outbox: Sender<WorkerEvent>) {
        log::info!("Simulation worker started");
        for message in inbox.iter() {
            let op = message.op();
            let event = match self.handle(message) {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("Rejected {}: {}", op, e);
                    Some(WorkerEvent::Error {
                        op: op.to_string(),
                        message: e.to_string(),
                    })
                }
            };
            if let Some(event) = event {
                if outbox.send(event).is_err() {
                    log::info!("Render side disconnected");
                    break;
                }
            }
        }
        log::info!("Simulation worker stopped after {} ticks", self.state.tick);
    }
}

/// Render-side end of a worker running on its own thread
pub struct WorkerHandle {
    sender: Option<Sender<Message>>,
    events: Receiver<WorkerEvent>,
    thread: Option<JoinHandle<()>>,
}

/// Start `worker` on a dedicated thread
pub fn spawn<I>(worker: Worker<I>) -> Result<WorkerHandle>
where
    I: Integrator + Send + 'static,
{
    let (sender, inbox) = unbounded();
    let (outbox, events) = unbounded();

    let thread = std::thread::Builder::new()
        .name("sim-worker".into())
        .spawn(move || worker.run(inbox, outbox))?;

    Ok(WorkerHandle {
        sender: Some(sender),
        events,
        thread: Some(thread),
    })
}

impl WorkerHandle {
    pub fn send(&self, message: Message) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(BridgeError::Disconnected)?;
        sender.send(message).map_err(|_| BridgeError::Disconnected)
    }

    pub fn send_json(&self, json: &str) -> Result<()> {
        self.send(Message::from_json(json)?)
    }

    /// Next event if one is waiting
    pub fn try_recv(&self) -> Option<WorkerEvent> {
        self.events.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event; `Ok(None)` on timeout
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerEvent>> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(BridgeError::Disconnected),
        }
    }

    /// Drain pending events, returning the bodies of the newest frame
    ///
    /// Error events are logged and dropped.
    pub fn poll_frame(&self) -> Option<Vec<Body>> {
        let mut latest = None;
        for event in self.events.try_iter() {
            match event {
                WorkerEvent::Frame { bodies, .. } => latest = Some(bodies),
                WorkerEvent::Error { op, message } => {
                    log::warn!("Worker rejected {}: {}", op, message)
                }
            }
        }
        latest
    }

    /// Close the inbox and wait for the worker to finish
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Simulation worker panicked");
            }
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::AddBodies;
    use crate::sim::{BodyProps, BodyShapeType};

    #[test]
    fn test_step_publishes_frame() {
        let mut worker = Worker::new();
        worker
            .handle(Message::AddBodies(AddBodies {
                props: vec![BodyProps::default()],
                shape_type: BodyShapeType::Circle,
                uuid: vec!["c".into()],
            }))
            .unwrap();
        let event = worker.handle(Message::Step { dt: 0.1 }).unwrap();
        match event {
            Some(WorkerEvent::Frame { tick, bodies, .. }) => {
                assert_eq!(tick, 1);
                assert_eq!(bodies.len(), 1);
                assert_eq!(bodies[0].uuid, "c");
            }
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[test]
    fn test_mutations_are_silent() {
        let mut worker = Worker::new();
        let event = worker
            .handle_json(r#"{"op": "removeContactMaterial", "uuid": "nope"}"#)
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn test_bad_json_is_error() {
        let mut worker = Worker::new();
        assert!(worker.handle_json("{").is_err());
    }
}
