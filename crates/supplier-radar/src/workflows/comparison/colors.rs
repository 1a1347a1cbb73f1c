use serde::Serialize;
use std::collections::HashMap;

const PALETTE: [(u8, u8, u8); 10] = [
    (54, 162, 235),
    (255, 99, 132),
    (75, 192, 192),
    (255, 159, 64),
    (153, 102, 255),
    (255, 205, 86),
    (46, 139, 87),
    (201, 203, 207),
    (220, 20, 60),
    (0, 128, 128),
];

/// Stroke and fill colors of one supplier's radar polygon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierColor {
    pub slot: usize,
    pub border: String,
    pub background: String,
}

impl SupplierColor {
    fn for_slot(slot: usize) -> Self {
        let (r, g, b) = PALETTE[slot % PALETTE.len()];
        Self {
            slot,
            border: format!("rgba({r}, {g}, {b}, 1)"),
            background: format!("rgba({r}, {g}, {b}, 0.2)"),
        }
    }
}

/// Keeps a supplier's color stable across repeated chart renders.
///
/// Assignments are append-only: a new supplier name takes the next slot and
/// existing names keep theirs until `reset`. Slots wrap around the palette.
/// Presentation state only; scoring never consults it.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    slots: HashMap<String, usize>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, supplier: &str) -> SupplierColor {
        let next = self.slots.len();
        let slot = *self.slots.entry(supplier.to_string()).or_insert(next);
        SupplierColor::for_slot(slot)
    }

    pub fn get(&self, supplier: &str) -> Option<SupplierColor> {
        self.slots.get(supplier).copied().map(SupplierColor::for_slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forgets every assignment, e.g. when the dashboard session ends.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
