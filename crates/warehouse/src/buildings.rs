//! The fixed building catalog.
//!
//! Buildings are compiled-in constants: the set never changes at runtime and
//! there is no external data source. Positions are volume centers on the
//! warehouse floor, sizes are full extents (width, height, depth).

use bevy::prelude::*;

/// Static description of one warehouse building volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingSpec {
    /// Unique identifier, also used as the selection key.
    pub id: &'static str,
    /// Label shown on the floating tag and the detail panel.
    pub name: &'static str,
    pub position: Vec3,
    pub size: Vec3,
}

/// The warehouse floor layout.
pub const BUILDINGS: [BuildingSpec; 5] = [
    BuildingSpec {
        id: "Building 1",
        name: "Building 1",
        position: Vec3::new(-2.0, 0.0, 2.0),
        size: Vec3::new(1.0, 1.0, 3.0),
    },
    BuildingSpec {
        id: "Building 2",
        name: "Building 2",
        position: Vec3::new(0.0, 0.0, 2.0),
        size: Vec3::new(1.0, 1.0, 3.0),
    },
    BuildingSpec {
        id: "Building 3",
        name: "Building 3",
        position: Vec3::new(2.0, 0.0, 0.0),
        size: Vec3::new(1.0, 1.0, 7.0),
    },
    BuildingSpec {
        id: "Building 4",
        name: "Building 4",
        position: Vec3::new(-2.0, 0.0, -2.0),
        size: Vec3::new(1.0, 1.0, 3.0),
    },
    BuildingSpec {
        id: "Building 5",
        name: "Building 5",
        position: Vec3::new(0.0, 0.0, -2.0),
        size: Vec3::new(1.0, 1.0, 3.0),
    },
];

/// Component attached to each spawned building volume entity.
/// The volume's position lives in its `Transform`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Building {
    pub id: &'static str,
    pub name: &'static str,
    pub size: Vec3,
}

/// The fixed, ordered building catalog. Identical on every access.
#[derive(Resource, Debug)]
pub struct BuildingRegistry {
    specs: Vec<BuildingSpec>,
}

impl Default for BuildingRegistry {
    fn default() -> Self {
        Self {
            specs: BUILDINGS.to_vec(),
        }
    }
}

impl BuildingRegistry {
    /// All buildings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BuildingSpec> {
        self.specs.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BuildingSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_buildings() {
        let registry = BuildingRegistry::default();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let registry = BuildingRegistry::default();
        let ids: Vec<&str> = registry.iter().map(|spec| spec.id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
        }
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let registry = BuildingRegistry::default();
        let first: Vec<&str> = registry.iter().map(|spec| spec.id).collect();
        let second: Vec<&str> = registry.iter().map(|spec| spec.id).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                "Building 1",
                "Building 2",
                "Building 3",
                "Building 4",
                "Building 5"
            ]
        );
    }

    #[test]
    fn test_get_known_id() {
        let registry = BuildingRegistry::default();
        let spec = registry.get("Building 3").unwrap();
        assert_eq!(spec.position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(spec.size, Vec3::new(1.0, 1.0, 7.0));
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = BuildingRegistry::default();
        assert!(registry.get("Building 99").is_none());
        assert!(!registry.contains("Building 99"));
    }
}
