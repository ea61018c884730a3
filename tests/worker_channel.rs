//! Worker running on its own thread behind channels

use std::time::Duration;

use planar_bridge::protocol::{Message, WorkerEvent};
use planar_bridge::worker::spawn;
use planar_bridge::Worker;

const TIMEOUT: Duration = Duration::from_secs(5);

fn next_event(handle: &planar_bridge::WorkerHandle) -> WorkerEvent {
    handle
        .recv_timeout(TIMEOUT)
        .unwrap()
        .expect("worker did not answer in time")
}

#[test]
fn step_round_trip_over_channels() {
    let handle = spawn(Worker::new()).unwrap();
    handle
        .send_json(
            r#"{"op": "addBodies", "type": "Circle", "uuid": ["c1", "c2"],
                "props": [{"mass": 1}, {"mass": 0}]}"#,
        )
        .unwrap();
    handle.send(Message::Step { dt: 0.5 }).unwrap();

    match next_event(&handle) {
        WorkerEvent::Frame { tick, bodies, .. } => {
            assert_eq!(tick, 1);
            let uuids: Vec<_> = bodies.iter().map(|b| b.uuid.as_str()).collect();
            assert_eq!(uuids, ["c1", "c2"]);
            assert!(bodies[0].velocity.y < 0.0);
            assert_eq!(bodies[1].velocity.y, 0.0);
        }
        other => panic!("expected frame, got {:?}", other),
    }
    handle.shutdown();
}

#[test]
fn rejected_message_reports_error_and_keeps_serving() {
    let handle = spawn(Worker::new()).unwrap();
    handle
        .send_json(r#"{"op": "addBodies", "type": "Box", "uuid": [], "props": [{}]}"#)
        .unwrap();

    match next_event(&handle) {
        WorkerEvent::Error { op, message } => {
            assert_eq!(op, "addBodies");
            assert!(!message.is_empty());
        }
        other => panic!("expected error, got {:?}", other),
    }

    handle.send(Message::Step { dt: 0.0 }).unwrap();
    assert!(matches!(next_event(&handle), WorkerEvent::Frame { .. }));
}

#[test]
fn messages_apply_in_send_order() {
    let handle = spawn(Worker::new()).unwrap();
    let add = r#"{"op": "addBodies", "type": "Particle", "uuid": ["p"], "props": [{}]}"#;
    handle.send_json(add).unwrap();
    handle
        .send(Message::RemoveBodies {
            uuid: vec!["p".to_string()],
        })
        .unwrap();
    handle.send_json(add).unwrap();
    handle.send(Message::Step { dt: 0.0 }).unwrap();

    match next_event(&handle) {
        WorkerEvent::Frame { bodies, .. } => assert_eq!(bodies.len(), 1),
        other => panic!("expected frame, got {:?}", other),
    }
}
