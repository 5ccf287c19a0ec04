//! Multi-board allocation loop and single-board packing pass.

use super::expand::{expand_items, order_items};
use super::pool::FreeRectPool;
use super::select::select_fit;
use super::split::split;
use crate::config::PackConfig;
use crate::model::{Board, CutPlan, Item, PieceRequest, PlacedPiece, Termination};
use tracing::{debug, warn};

/// Outcome of packing one board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardPass {
    /// Pieces placed on the board, in placement order.
    pub placed: Vec<PlacedPiece>,
    /// Items that did not fit, in the order they were offered.
    pub unplaced: Vec<Item>,
}

/// Guillotine packer for one board size.
#[derive(Debug, Clone)]
pub struct Packer {
    board_width: f64,
    board_height: f64,
    config: PackConfig,
}

impl Packer {
    /// Create a packer with the default policy.
    pub fn new(board_width: f64, board_height: f64) -> Self {
        Self::with_config(board_width, board_height, PackConfig::default())
    }

    /// Create a packer with an explicit policy.
    pub fn with_config(board_width: f64, board_height: f64, config: PackConfig) -> Self {
        Self {
            board_width,
            board_height,
            config,
        }
    }

    /// Pack all requests onto as many boards as needed.
    ///
    /// Items are expanded and ordered once, then each board takes whatever
    /// it can from the remaining items. The loop stops when nothing is left,
    /// when the board cap is hit, or when a fresh board places nothing at all;
    /// in the last two cases the leftovers are returned in
    /// [`CutPlan::unplaced`].
    pub fn pack(&self, requests: &[PieceRequest]) -> CutPlan {
        let mut remaining = expand_items(requests);
        order_items(&mut remaining);

        debug!(
            "Packing {} item(s) on {} x {} boards",
            remaining.len(),
            self.board_width,
            self.board_height
        );

        let mut boards = Vec::new();

        let termination = loop {
            if remaining.is_empty() {
                break Termination::Complete;
            }

            if boards.len() >= self.config.max_boards {
                warn!(
                    "Board limit of {} reached, {} item(s) left unplaced",
                    self.config.max_boards,
                    remaining.len()
                );
                break Termination::BoardLimit;
            }

            let pass = self.pack_one_board(&remaining);

            if pass.placed.is_empty() {
                warn!(
                    "{} item(s) do not fit an empty {} x {} board",
                    pass.unplaced.len(),
                    self.board_width,
                    self.board_height
                );
                break Termination::InfeasibleItem;
            }

            debug!(
                "Board {}: placed {} piece(s), {} remaining",
                boards.len() + 1,
                pass.placed.len(),
                pass.unplaced.len()
            );

            boards.push(Board::new(self.board_width, self.board_height, pass.placed));
            remaining = pass.unplaced;
        };

        CutPlan {
            boards,
            unplaced: remaining,
            termination,
        }
    }

    /// Place as many of `items` as possible on one empty board, in order.
    ///
    /// An item that does not fit is set aside and the pass continues, since a
    /// later, smaller item may still fit.
    pub fn pack_one_board(&self, items: &[Item]) -> BoardPass {
        let mut pool = FreeRectPool::new(
            self.board_width,
            self.board_height,
            self.config.min_dimension,
        );
        let mut pass = BoardPass::default();

        for item in items {
            let Some(fit) = select_fit(pool.rects(), item.width, item.height) else {
                pass.unplaced.push(*item);
                continue;
            };

            // select_fit only returns indices into this pool
            let rect = pool.rects()[fit.rect_index];

            let piece = PlacedPiece::from_item(item, rect.x, rect.y, fit.rotated);
            let splits = split(&rect, piece.width, piece.height, &self.config);
            pool.replace(fit.rect_index, splits);
            pass.placed.push(piece);
        }

        pass
    }
}

/// Pack `requests` onto `board_width` x `board_height` boards with the
/// default policy.
pub fn pack(board_width: f64, board_height: f64, requests: &[PieceRequest]) -> CutPlan {
    Packer::new(board_width, board_height).pack(requests)
}

/// Pack `requests` with an explicit policy.
pub fn pack_with_config(
    board_width: f64,
    board_height: f64,
    requests: &[PieceRequest],
    config: PackConfig,
) -> CutPlan {
    Packer::with_config(board_width, board_height, config).pack(requests)
}
