//! Worker message protocol
//!
//! Render → worker messages are tagged by `op`; mutation ops carry caller-issued
//! UUIDs used only for identity correlation, never for ordering. Delivery is FIFO
//! per channel.

pub mod bodies;
pub mod contact_material;

pub use bodies::{add_bodies, remove_bodies};
pub use contact_material::{add_contact_material, remove_contact_material};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{Body, BodyProps, BodyShapeType, ContactMaterialOptions, MaterialDescriptor};

/// Payload of an `addBodies` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddBodies {
    pub props: Vec<BodyProps>,
    /// Shape type shared by the whole batch
    #[serde(rename = "type")]
    pub shape_type: BodyShapeType,
    /// One UUID per props entry
    pub uuid: Vec<String>,
}

/// Materials and options of an `addContactMaterial` message
pub type ContactMaterialProps = (MaterialDescriptor, MaterialDescriptor, ContactMaterialOptions);

/// Render → worker message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Message {
    AddBodies(AddBodies),
    RemoveBodies {
        uuid: Vec<String>,
    },
    AddContactMaterial {
        props: ContactMaterialProps,
        uuid: String,
    },
    RemoveContactMaterial {
        uuid: String,
    },
    /// Advance the simulation and publish a frame
    Step {
        dt: f32,
    },
}

impl Message {
    /// Wire name of the operation (for logs and error events)
    pub fn op(&self) -> &'static str {
        match self {
            Message::AddBodies(_) => "addBodies",
            Message::RemoveBodies { .. } => "removeBodies",
            Message::AddContactMaterial { .. } => "addContactMaterial",
            Message::RemoveContactMaterial { .. } => "removeContactMaterial",
            Message::Step { .. } => "step",
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Worker → render event
///
/// Tagged by `event`; the error event carries the rejected message's `op`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum WorkerEvent {
    /// Current body/shape state after a step
    Frame {
        tick: u64,
        time: f32,
        bodies: Vec<Body>,
    },
    /// A message was rejected; state is unchanged
    Error { op: String, message: String },
}

impl WorkerEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_bodies_wire_shape() {
        let msg = Message::from_json(
            r#"{"op": "addBodies", "type": "Box", "props": [{"args": {"width": 2, "height": 3}}], "uuid": ["b1"]}"#,
        )
        .unwrap();
        match msg {
            Message::AddBodies(AddBodies {
                props,
                shape_type,
                uuid,
            }) => {
                assert_eq!(shape_type, BodyShapeType::Box);
                assert_eq!(uuid, vec!["b1".to_string()]);
                assert_eq!(props[0].args.width, Some(2.0));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_contact_material_wire_shape() {
        let msg = Message::from_json(
            r#"{"op": "addContactMaterial", "props": ["ice", {"name": "steel"}, {"friction": 0.01}], "uuid": "cm1"}"#,
        )
        .unwrap();
        assert_eq!(msg.op(), "addContactMaterial");
        let Message::AddContactMaterial { props, uuid } = msg else {
            panic!("expected addContactMaterial");
        };
        assert_eq!(uuid, "cm1");
        assert_eq!(props.0.name(), Some("ice"));
        assert_eq!(props.1.name(), Some("steel"));
        assert_eq!(props.2.friction, 0.01);
    }

    #[test]
    fn test_remove_contact_material_wire_shape() {
        let msg = Message::from_json(r#"{"op": "removeContactMaterial", "uuid": "cm1"}"#).unwrap();
        assert_eq!(
            msg,
            Message::RemoveContactMaterial {
                uuid: "cm1".into()
            }
        );
    }

    #[test]
    fn test_unknown_op_is_decode_error() {
        let err = Message::from_json(r#"{"op": "explode"}"#).unwrap_err();
        assert!(matches!(err, crate::BridgeError::Decode(_)));
    }

    #[test]
    fn test_error_event_json() {
        let event = WorkerEvent::Error {
            op: "addBodies".into(),
            message: "bad".into(),
        };
        let json = event.to_json().unwrap();
        assert!(json.contains(r#""event":"error""#));
        assert!(json.contains(r#""op":"addBodies""#));
        assert_eq!(WorkerEvent::from_json(&json).unwrap(), event);
    }

    #[test]
    fn test_frame_event_json() {
        let event = WorkerEvent::Frame {
            tick: 3,
            time: 0.5,
            bodies: vec![],
        };
        let json = event.to_json().unwrap();
        assert!(json.contains(r#""event":"frame""#));
        let decoded = WorkerEvent::from_json(
            r#"{"event": "error", "op": "removeBodies", "message": "gone"}"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            WorkerEvent::Error {
                op: "removeBodies".into(),
                message: "gone".into()
            }
        );
    }
}
