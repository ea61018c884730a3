//! Body add/remove handlers

use std::collections::HashSet;

use super::AddBodies;
use crate::error::{BridgeError, Result};
use crate::sim::{CreateMaterial, State, props_to_body};

/// Add one body per `(props[i], uuid[i])` pair
///
/// The batch is validated and fully built before anything is inserted, so a
/// rejected batch leaves the world untouched. Returns the number of bodies added.
pub fn add_bodies(
    state: &mut State,
    create_material: &mut impl CreateMaterial,
    AddBodies {
        props,
        shape_type,
        uuid,
    }: AddBodies,
) -> Result<usize> {
    if props.len() != uuid.len() {
        return Err(BridgeError::BatchLengthMismatch {
            props: props.len(),
            uuids: uuid.len(),
        });
    }

    let bodies = props
        .iter()
        .zip(uuid)
        .map(|(props, uuid)| props_to_body(create_material, props, shape_type, uuid))
        .collect::<Result<Vec<_>>>()?;

    let added = bodies.len();
    for body in bodies {
        if state.world.body(&body.uuid).is_some() {
            log::warn!("Body {} added twice; both copies are live", body.uuid);
        }
        state.world.add_body(body);
    }
    log::debug!("Added {} {:?} bodies", added, shape_type);
    Ok(added)
}

/// Remove every body whose UUID is listed; unknown UUIDs are ignored
///
/// Returns the number of bodies removed.
pub fn remove_bodies(state: &mut State, uuids: &[String]) -> usize {
    let doomed: HashSet<&str> = uuids.iter().map(String::as_str).collect();
    let before = state.world.bodies.len();
    state.world.bodies.retain(|b| !doomed.contains(b.uuid.as_str()));
    let removed = before - state.world.bodies.len();
    log::debug!("Removed {} of {} requested bodies", removed, uuids.len());
    removed
}
