//! Stable colour slots for class names.

use std::collections::HashMap;

/// Assigns each distinct class name a palette slot the first time it
/// is seen, and returns the same slot on every later lookup.
///
/// Once the palette is exhausted slots are reused, so two different
/// names may share one.
#[derive(Debug)]
pub struct ClassColourTable {
    slots: HashMap<String, usize>,
    next: usize,
    palette_size: usize,
}

impl ClassColourTable {
    /// Create an empty table cycling through `palette_size` slots.
    pub fn new(palette_size: usize) -> ClassColourTable {
        assert!(palette_size > 0);
        ClassColourTable {
            slots: HashMap::new(),
            next: 0,
            palette_size,
        }
    }

    /// The colour slot for `class`, allocating one on first sight.
    pub fn slot_for(&mut self, class: &str) -> usize {
        if let Some(&slot) = self.slots.get(class) {
            return slot;
        }
        let slot = self.next % self.palette_size;
        self.next += 1;
        self.slots.insert(class.into(), slot);
        log::trace!("class {:?} -> slot {}", class, slot);
        slot
    }

    /// Number of distinct class names seen.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no class has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
