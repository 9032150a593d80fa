// Indicator host contract
// The tab strip that owns the items and the selection state

use crate::core::geometry::ItemBox;

/// What the indicator reads from its host strip on every draw.
///
/// The indicator never stores a host; each call borrows one for its duration.
/// Coordinates in the returned boxes are host-local, with `origin()` giving
/// the buffer position of the host's top-left cell.
pub trait IndicatorHost {
    /// Items eligible for indexing, hidden items excluded, in left-to-right order
    fn visible_items(&self) -> &[ItemBox];

    /// Current selection as an index into `visible_items()`
    fn selected_index(&self) -> Option<usize>;

    /// Full height of the host view
    fn view_height(&self) -> i32;

    fn padding_top(&self) -> i32;

    /// Height between the host's top and bottom padding
    fn content_height(&self) -> i32;

    fn origin(&self) -> (i32, i32) {
        (0, 0)
    }
}
