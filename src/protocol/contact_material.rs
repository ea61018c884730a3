//! Contact material add/remove handlers

use super::ContactMaterialProps;
use crate::sim::{ContactMaterial, CreateMaterial, World};

/// Register a contact material for a material pair under `uuid`
///
/// Re-adding a UUID that is already registered replaces that entry in place, so
/// a duplicated message never leaves two rules under one UUID.
pub fn add_contact_material(
    world: &mut World,
    create_material: &mut impl CreateMaterial,
    (material_a, material_b, options): ContactMaterialProps,
    uuid: String,
) {
    let a = create_material.create_material(Some(&material_a));
    let b = create_material.create_material(Some(&material_b));
    let contact_material = ContactMaterial::new(uuid, a, b, options);

    match world
        .contact_materials
        .iter_mut()
        .find(|cm| cm.uuid == contact_material.uuid)
    {
        Some(existing) => {
            log::debug!("Replacing contact material {}", contact_material.uuid);
            *existing = contact_material;
        }
        None => {
            log::debug!(
                "Added contact material {} for materials {} and {}",
                contact_material.uuid,
                a,
                b
            );
            world.add_contact_material(contact_material);
        }
    }
}

/// Remove the first contact material tagged `uuid`
///
/// An unknown UUID is a no-op so duplicate or racing removals stay harmless.
/// Returns whether anything was removed.
pub fn remove_contact_material(world: &mut World, uuid: &str) -> bool {
    match world.contact_materials.iter().position(|cm| cm.uuid == uuid) {
        Some(index) => {
            world.contact_materials.remove(index);
            true
        }
        None => {
            log::debug!("No contact material {} to remove", uuid);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ContactMaterialOptions, MaterialDescriptor, MaterialRegistry};

    fn props(friction: f32) -> ContactMaterialProps {
        (
            MaterialDescriptor::Name("ice".into()),
            MaterialDescriptor::Name("steel".into()),
            ContactMaterialOptions {
                friction,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_add_then_remove_is_net_zero() {
        let mut world = World::new();
        let mut materials = MaterialRegistry::new();
        let before = world.contact_materials.len();
        add_contact_material(&mut world, &mut materials, props(0.1), "cm1".into());
        assert_eq!(world.contact_materials.len(), before + 1);
        assert!(remove_contact_material(&mut world, "cm1"));
        assert_eq!(world.contact_materials.len(), before);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut world = World::new();
        let mut materials = MaterialRegistry::new();
        add_contact_material(&mut world, &mut materials, props(0.1), "cm1".into());
        assert!(!remove_contact_material(&mut world, "missing"));
        assert_eq!(world.contact_materials.len(), 1);
    }

    #[test]
    fn test_duplicate_uuid_replaces() {
        let mut world = World::new();
        let mut materials = MaterialRegistry::new();
        add_contact_material(&mut world, &mut materials, props(0.1), "cm1".into());
        add_contact_material(&mut world, &mut materials, props(0.9), "cm1".into());
        assert_eq!(world.contact_materials.len(), 1);
        assert_eq!(world.contact_material("cm1").unwrap().options.friction, 0.9);

        remove_contact_material(&mut world, "cm1");
        assert!(world.contact_materials.iter().all(|cm| cm.uuid != "cm1"));
    }

    #[test]
    fn test_materials_resolved_by_name() {
        let mut world = World::new();
        let mut materials = MaterialRegistry::new();
        add_contact_material(&mut world, &mut materials, props(0.1), "cm1".into());
        let ice = materials.by_name("ice").unwrap().id;
        let steel = materials.by_name("steel").unwrap().id;
        assert!(world.contact_material("cm1").unwrap().involves(steel, ice));
    }
}
