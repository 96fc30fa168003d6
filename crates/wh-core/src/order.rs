//! The `Order` record.

use crate::{OrderId, ShelfId, StationId, Tick};

/// A single pick-and-deliver order.
///
/// `assignment_tick` and `completion_tick` start unset and are filled in by
/// the simulator as the order moves through its lifecycle. Once both are
/// set, `creation_tick <= assignment_tick <= completion_tick` always holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_id: OrderId,
    pub shelf_id: ShelfId,
    pub station_id: StationId,
    pub creation_tick: Tick,
    pub assignment_tick: Option<Tick>,
    pub completion_tick: Option<Tick>,
}

impl Order {
    /// Construct a freshly-created, unassigned order.
    pub fn new(order_id: OrderId, shelf_id: ShelfId, station_id: StationId, creation_tick: Tick) -> Self {
        Self {
            order_id,
            shelf_id,
            station_id,
            creation_tick,
            assignment_tick: None,
            completion_tick: None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_tick.is_some()
    }
}
