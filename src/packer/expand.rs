//! Expansion of piece requests into individual items.

use crate::model::{Item, PieceRequest};

/// Expand requests into one item per unit of quantity, in request order.
pub fn expand_items(requests: &[PieceRequest]) -> Vec<Item> {
    let capacity = requests.iter().map(|r| r.quantity as usize).sum();
    let mut items = Vec::with_capacity(capacity);

    for request in requests {
        for _ in 0..request.quantity {
            items.push(Item::new(
                request.width,
                request.height,
                request.request_index,
            ));
        }
    }

    items
}

/// Order items by descending area.
///
/// The sort is stable: items of equal area keep their expansion order so the
/// resulting plan is reproducible.
pub fn order_items(items: &mut [Item]) {
    items.sort_by(|a, b| b.area().total_cmp(&a.area()));
}
