//! The fixed six-slot dashboard layout.
//!
//! Three tiles across the top, one full-width panel in the middle and two
//! panels across the bottom. Both the creation workspace and the detail view
//! read this constant instead of hard-coding positions.

/// Visual role of a slot in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Top,
    Wide,
    Bottom,
}

impl SlotRole {
    /// Number of slots sharing the row.
    pub fn columns(&self) -> usize {
        match self {
            SlotRole::Top => 3,
            SlotRole::Wide => 1,
            SlotRole::Bottom => 2,
        }
    }

    /// Panel height in pixels in the detail view.
    pub fn height_px(&self) -> u32 {
        match self {
            SlotRole::Top => 250,
            SlotRole::Wide | SlotRole::Bottom => 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub position: u8,
    pub role: SlotRole,
}

/// Layout tag sent by the API for this arrangement.
pub const LAYOUT_TYPE: &str = "grid_3_1_2";

pub const SLOT_COUNT: usize = 6;

pub const DASHBOARD_LAYOUT: [Slot; SLOT_COUNT] = [
    Slot { position: 1, role: SlotRole::Top },
    Slot { position: 2, role: SlotRole::Top },
    Slot { position: 3, role: SlotRole::Top },
    Slot { position: 4, role: SlotRole::Wide },
    Slot { position: 5, role: SlotRole::Bottom },
    Slot { position: 6, role: SlotRole::Bottom },
];

pub fn is_valid_position(position: u8) -> bool {
    DASHBOARD_LAYOUT.iter().any(|s| s.position == position)
}

pub fn slot(position: u8) -> Option<Slot> {
    DASHBOARD_LAYOUT.iter().copied().find(|s| s.position == position)
}

/// Slots grouped into visual rows, top to bottom.
pub fn rows() -> Vec<(SlotRole, Vec<Slot>)> {
    let mut rows: Vec<(SlotRole, Vec<Slot>)> = Vec::new();
    for slot in DASHBOARD_LAYOUT {
        match rows.last_mut() {
            Some((role, slots)) if *role == slot.role => slots.push(slot),
            _ => rows.push((slot.role, vec![slot])),
        }
    }
    rows
}

/// Places positioned items into layout rows by their position.
///
/// Items whose position is outside the layout are dropped; a row with no
/// item is omitted. A kept row has one cell per slot, `None` where the slot
/// is empty, so every item stays in its own column.
pub fn arrange<T, F>(items: Vec<T>, position_of: F) -> Vec<(SlotRole, Vec<Option<T>>)>
where
    F: Fn(&T) -> u8,
{
    let mut slots: Vec<Option<T>> = (0..SLOT_COUNT).map(|_| None).collect();
    for item in items {
        let position = position_of(&item);
        if let Some(index) = DASHBOARD_LAYOUT.iter().position(|s| s.position == position) {
            slots[index] = Some(item);
        }
    }

    let mut arranged: Vec<(SlotRole, Vec<Option<T>>)> = Vec::new();
    for (slot, item) in DASHBOARD_LAYOUT.iter().zip(slots) {
        match arranged.last_mut() {
            Some((role, row)) if *role == slot.role => row.push(item),
            _ => arranged.push((slot.role, vec![item])),
        }
    }
    arranged.retain(|(_, row)| row.iter().any(Option::is_some));
    arranged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_three_one_two() {
        let rows = rows();
        let shape: Vec<(SlotRole, usize)> = rows.iter().map(|(r, s)| (*r, s.len())).collect();
        assert_eq!(shape, [(SlotRole::Top, 3), (SlotRole::Wide, 1), (SlotRole::Bottom, 2)]);
        for (role, slots) in rows {
            assert_eq!(role.columns(), slots.len());
        }
    }

    #[test]
    fn positions_are_one_to_six() {
        assert!((1..=6).all(is_valid_position));
        assert!(!is_valid_position(0));
        assert!(!is_valid_position(7));
        assert_eq!(slot(4).map(|s| s.role), Some(SlotRole::Wide));
    }

    #[test]
    fn arrange_places_by_position_not_by_index() {
        // Only positions 2, 5 and 6 are used, delivered out of order.
        let items = vec![(6, "f"), (2, "b"), (5, "e"), (9, "ignored")];
        let arranged = arrange(items, |(p, _)| *p);
        assert_eq!(arranged.len(), 2);
        assert_eq!(arranged[0].0, SlotRole::Top);
        assert_eq!(arranged[0].1, vec![None, Some((2, "b")), None]);
        assert_eq!(arranged[1].0, SlotRole::Bottom);
        assert_eq!(arranged[1].1, vec![Some((5, "e")), Some((6, "f"))]);
    }

    #[test]
    fn arrange_keeps_each_item_in_its_own_column() {
        let arranged = arrange(vec![3u8, 6u8], |p| *p);
        assert_eq!(arranged.len(), 2);

        let (top, cells) = &arranged[0];
        assert_eq!(*top, SlotRole::Top);
        assert_eq!(cells.len(), top.columns());
        assert_eq!(cells, &vec![None, None, Some(3)]);

        let (bottom, cells) = &arranged[1];
        assert_eq!(*bottom, SlotRole::Bottom);
        assert_eq!(cells.len(), bottom.columns());
        assert_eq!(cells, &vec![None, Some(6)]);
    }

    #[test]
    fn arrange_omits_rows_without_items() {
        assert!(arrange(Vec::<u8>::new(), |p| *p).is_empty());
        let arranged = arrange(vec![4u8], |p| *p);
        assert_eq!(arranged, vec![(SlotRole::Wide, vec![Some(4)])]);
    }
}
