//! Best-area-fit placement selection.

use crate::model::FreeRect;

/// Where an item goes: which free rectangle and in which orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Index into the free-rectangle pool.
    pub rect_index: usize,
    /// Whether the item is turned 90 degrees.
    pub rotated: bool,
}

/// Pick the smallest free rectangle that admits a `width` x `height` item.
///
/// Rectangles are scanned in pool order, normal orientation before rotated.
/// Only a strictly smaller area replaces the current best, so on ties the
/// lower index wins and the unrotated orientation wins.
pub fn select_fit(free_rects: &[FreeRect], width: f64, height: f64) -> Option<Fit> {
    let mut best: Option<(f64, Fit)> = None;

    for (rect_index, rect) in free_rects.iter().enumerate() {
        let score = rect.area();

        for rotated in [false, true] {
            let fits = if rotated {
                rect.admits(height, width)
            } else {
                rect.admits(width, height)
            };
            if !fits {
                continue;
            }
            if best.map_or(true, |(best_score, _)| score < best_score) {
                best = Some((
                    score,
                    Fit {
                        rect_index,
                        rotated,
                    },
                ));
            }
        }
    }

    best.map(|(_, fit)| fit)
}
