// src/db/seed.rs

use crate::models::warehouse::{Section, Shelf, StorageUnit, WarehouseHierarchy, Zone};

fn zone(code: &str, name: &str, description: &str) -> Zone {
    Zone {
        zone_code: code.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn section(code: &str, name: &str, zone_code: &str, description: &str) -> Section {
    Section {
        section_code: code.to_string(),
        name: name.to_string(),
        zone_code: zone_code.to_string(),
        description: Some(description.to_string()),
    }
}

fn shelf(code: &str, name: &str, section_code: &str, zone_code: &str, description: &str) -> Shelf {
    Shelf {
        shelf_code: code.to_string(),
        name: name.to_string(),
        section_code: section_code.to_string(),
        zone_code: zone_code.to_string(),
        description: Some(description.to_string()),
    }
}

fn unit(
    code: &str,
    name: &str,
    shelf_code: &str,
    section_code: &str,
    zone_code: &str,
    capacity: u32,
    current_occupancy: u32,
) -> StorageUnit {
    StorageUnit {
        storage_unit_code: code.to_string(),
        name: name.to_string(),
        shelf_code: shelf_code.to_string(),
        section_code: section_code.to_string(),
        zone_code: zone_code.to_string(),
        description: None,
        capacity: Some(capacity),
        current_occupancy: Some(current_occupancy),
    }
}

/// Dataset estático usado pelo repositório em memória.
pub fn seed_hierarchy() -> WarehouseHierarchy {
    WarehouseHierarchy {
        zones: vec![
            zone("A", "Receiving Zone", "Incoming goods area"),
            zone("B", "Storage Zone", "Main storage area"),
            zone("C", "Shipping Zone", "Outgoing goods area"),
            zone("D", "Cold Storage Zone", "Temperature controlled area"),
            zone("E", "Hazardous Zone", "Special handling materials"),
        ],
        sections: vec![
            section("A01", "Dock Area 1", "A", "Loading dock 1"),
            section("A02", "Dock Area 2", "A", "Loading dock 2"),
            section("B01", "General Storage 1", "B", "General merchandise"),
            section("B02", "General Storage 2", "B", "General merchandise"),
            section("B03", "Heavy Items", "B", "Heavy equipment storage"),
            section("C01", "Shipping Area 1", "C", "Outbound processing"),
            section("C02", "Shipping Area 2", "C", "Express shipping"),
            section("D01", "Freezer Section", "D", "Frozen goods"),
            section("D02", "Cooler Section", "D", "Refrigerated goods"),
            section("E01", "Chemical Storage", "E", "Chemical materials"),
        ],
        shelves: vec![
            shelf("A01-S01", "Shelf 1", "A01", "A", "Top shelf"),
            shelf("A01-S02", "Shelf 2", "A01", "A", "Middle shelf"),
            shelf("A01-S03", "Shelf 3", "A01", "A", "Bottom shelf"),
            shelf("B01-S01", "Aisle A", "B01", "B", "Left aisle"),
            shelf("B01-S02", "Aisle B", "B01", "B", "Center aisle"),
            shelf("B01-S03", "Aisle C", "B01", "B", "Right aisle"),
            shelf("B02-S01", "Rack 1", "B02", "B", "Storage rack 1"),
            shelf("B02-S02", "Rack 2", "B02", "B", "Storage rack 2"),
            shelf("C01-S01", "Pack Station 1", "C01", "C", "Packing area 1"),
            shelf("C01-S02", "Pack Station 2", "C01", "C", "Packing area 2"),
        ],
        // Os códigos de seção e zona são repetidos em cada unidade
        storage_units: vec![
            unit("A01-S01-U01", "Unit 1A", "A01-S01", "A01", "A", 100, 75),
            unit("A01-S01-U02", "Unit 1B", "A01-S01", "A01", "A", 100, 50),
            unit("A01-S01-U03", "Unit 1C", "A01-S01", "A01", "A", 100, 25),
            unit("B01-S01-U01", "Bin 1A", "B01-S01", "B01", "B", 200, 150),
            unit("B01-S01-U02", "Bin 1B", "B01-S01", "B01", "B", 200, 175),
            unit("B01-S01-U03", "Bin 1C", "B01-S01", "B01", "B", 200, 100),
            unit("B01-S02-U01", "Box 2A", "B01-S02", "B01", "B", 150, 125),
            unit("B01-S02-U02", "Box 2B", "B01-S02", "B01", "B", 150, 90),
            unit("C01-S01-U01", "Slot 1A", "C01-S01", "C01", "C", 50, 30),
            unit("C01-S01-U02", "Slot 1B", "C01-S01", "C01", "C", 50, 45),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_carry_the_codes_of_their_shelf() {
        let data = seed_hierarchy();
        for unit in &data.storage_units {
            let shelf = data
                .shelves
                .iter()
                .find(|s| s.shelf_code == unit.shelf_code)
                .unwrap();
            assert_eq!(unit.section_code, shelf.section_code, "{}", unit.storage_unit_code);
            assert_eq!(unit.zone_code, shelf.zone_code, "{}", unit.storage_unit_code);
        }
    }
}
