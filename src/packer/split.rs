//! Guillotine split of a free rectangle around a placed piece.

use crate::config::PackConfig;
use crate::model::FreeRect;

/// Direction of the first, full-length cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut spans the full width below the piece; the right strip is as tall as the piece.
    Horizontal,
    /// Cut spans the full height right of the piece; the bottom strip is as wide as the piece.
    Vertical,
}

/// Remaining width and height after the piece and one kerf per side.
fn remainders(rect: &FreeRect, placed_width: f64, placed_height: f64, kerf: f64) -> (f64, f64) {
    (
        rect.width - placed_width - kerf,
        rect.height - placed_height - kerf,
    )
}

/// Pick the split whose larger remainder is biggest.
///
/// Ties go to [`SplitAxis::Horizontal`].
pub fn choose_axis(rect: &FreeRect, placed_width: f64, placed_height: f64, kerf: f64) -> SplitAxis {
    let (remain_w, remain_h) = remainders(rect, placed_width, placed_height, kerf);

    let positive = |side: f64, area: f64| if side > 0.0 { area } else { 0.0 };

    let horiz_score = positive(remain_w, remain_w * placed_height)
        .max(positive(remain_h, rect.width * remain_h));
    let vert_score = positive(remain_w, remain_w * rect.height)
        .max(positive(remain_h, placed_width * remain_h));

    if horiz_score >= vert_score {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    }
}

/// Split `rect` after a `placed_width` x `placed_height` piece was placed at
/// its top-left corner.
///
/// Returns the right remainder then the bottom remainder. The right one is
/// kept only when its width exceeds the prune threshold, the bottom one only
/// when its height does; zero, one or two rectangles in total.
pub fn split(
    rect: &FreeRect,
    placed_width: f64,
    placed_height: f64,
    config: &PackConfig,
) -> Vec<FreeRect> {
    let kerf = config.kerf;
    let (remain_w, remain_h) = remainders(rect, placed_width, placed_height, kerf);
    let axis = choose_axis(rect, placed_width, placed_height, kerf);

    let (right_height, bottom_width) = match axis {
        SplitAxis::Horizontal => (placed_height, rect.width),
        SplitAxis::Vertical => (rect.height, placed_width),
    };

    let mut splits = Vec::with_capacity(2);

    if remain_w > config.min_dimension {
        splits.push(FreeRect::new(
            rect.x + placed_width + kerf,
            rect.y,
            remain_w,
            right_height,
        ));
    }

    if remain_h > config.min_dimension {
        splits.push(FreeRect::new(
            rect.x,
            rect.y + placed_height + kerf,
            bottom_width,
            remain_h,
        ));
    }

    splits
}
