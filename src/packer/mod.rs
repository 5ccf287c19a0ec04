//! Guillotine packing engine.
//!
//! Items are expanded from the piece requests, ordered largest first and
//! placed greedily board by board. Each board keeps a pool of free
//! rectangles; a placement takes the smallest rectangle that admits the item
//! (in either orientation) and splits the rest of it with one guillotine cut
//! per side, losing a blade kerf on every cut.

mod allocator;
mod expand;
mod pool;
mod select;
mod split;

pub use allocator::{pack, pack_with_config, BoardPass, Packer};
pub use expand::{expand_items, order_items};
pub use pool::FreeRectPool;
pub use select::{select_fit, Fit};
pub use split::{choose_axis, split, SplitAxis};
