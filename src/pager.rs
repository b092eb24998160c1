//! Paged carousel state: wraparound navigation over fixed-size pages.
//!
//! `Pager` owns an ordered sequence of opaque items and exposes the current
//! page's slice to a rendering layer. It holds no rendering state of its
//! own; the deck viewer widget and the `deck` CLI command both drive it.

use serde::{Deserialize, Serialize};

/// Navigation direction of the most recent page change.
///
/// Purely advisory for presentation (transition styling); carries no weight
/// in the pagination arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Last navigation moved toward higher page indices
    #[default]
    Forward,
    /// Last navigation moved toward lower page indices
    Backward,
}

/// One step of a viewport-width to items-per-page mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointStep {
    /// Minimum viewport width at which this step applies
    pub min_width: u16,
    /// Items shown per page at or above that width
    pub items_per_page: usize,
}

/// Viewport-width to items-per-page mapping.
///
/// The widest step whose `min_width` does not exceed the viewport wins.
/// Injected configuration rather than an inline conditional, so the pager is
/// reusable across layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    steps: Vec<BreakpointStep>,
}

impl Breakpoints {
    /// Creates a mapping from the given steps, sorted by `min_width`.
    ///
    /// Steps with `items_per_page == 0` are discarded; a page can never hold
    /// zero items.
    #[must_use]
    pub fn new(mut steps: Vec<BreakpointStep>) -> Self {
        steps.retain(|step| step.items_per_page > 0);
        steps.sort_by_key(|step| step.min_width);
        Self { steps }
    }

    /// Items per page for the given viewport width.
    ///
    /// Falls back to 1 when no step applies (including an empty table).
    #[must_use]
    pub fn items_per_page(&self, width: u16) -> usize {
        self.steps
            .iter()
            .rev()
            .find(|step| step.min_width <= width)
            .map_or(1, |step| step.items_per_page)
    }
}

impl Default for Breakpoints {
    /// The observed web layout: one card below 768px, three at or above it.
    fn default() -> Self {
        Self::new(vec![
            BreakpointStep {
                min_width: 0,
                items_per_page: 1,
            },
            BreakpointStep {
                min_width: 768,
                items_per_page: 3,
            },
        ])
    }
}

/// Carousel pagination state over an ordered item sequence.
///
/// Invariant: `current_page < page_count` whenever `page_count > 0`; an
/// empty pager pins `current_page` to 0. Every mutation below preserves
/// this, including viewport changes (the page index is clamped when the
/// page count shrinks).
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    items_per_page: usize,
    current_page: usize,
    direction: Direction,
    breakpoints: Breakpoints,
}

impl<T> Pager<T> {
    /// Creates a pager with the default breakpoint mapping and one item per
    /// page until the first viewport measurement arrives.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_breakpoints(items, Breakpoints::default())
    }

    /// Creates a pager with an injected breakpoint mapping.
    #[must_use]
    pub fn with_breakpoints(items: Vec<T>, breakpoints: Breakpoints) -> Self {
        Self {
            items,
            items_per_page: 1,
            current_page: 0,
            direction: Direction::Forward,
            breakpoints,
        }
    }

    /// All items, regardless of paging.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pager holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current items-per-page value.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Zero-based index of the current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Direction of the most recent navigation.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of pages: `ceil(len / items_per_page)`, 0 for an empty pager.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page)
    }

    /// Whether navigation chrome is worth rendering at all.
    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.page_count() > 1
    }

    /// Moves one page forward (`step > 0`) or backward (`step < 0`),
    /// wrapping past either end: advancing from the last page lands on page
    /// 0, retreating from page 0 lands on the last page.
    ///
    /// A no-op (beyond the direction flag) on an empty or single-page pager.
    pub fn paginate(&mut self, step: i32) {
        self.direction = if step >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let pages = self.page_count();
        if pages <= 1 {
            return;
        }

        let pages = i64::try_from(pages).unwrap_or(i64::MAX);
        let next = (self.current_page as i64 + i64::from(step)).rem_euclid(pages);
        self.current_page = usize::try_from(next).unwrap_or(0);
    }

    /// Jumps directly to a page.
    ///
    /// Out-of-range indices are clamped to the last page rather than
    /// rejected; this is UI-facing and must never crash rendering. The
    /// direction is inferred from the jump's relation to the current page.
    pub fn go_to_page(&mut self, index: usize) {
        let target = match self.page_count() {
            0 => 0,
            pages => index.min(pages - 1),
        };

        self.direction = if target > self.current_page {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_page = target;
    }

    /// The current page's items.
    ///
    /// The final page may hold fewer than `items_per_page` elements; an
    /// empty pager yields an empty slice.
    #[must_use]
    pub fn visible_slice(&self) -> &[T] {
        let start = self.current_page * self.items_per_page;
        let end = (start + self.items_per_page).min(self.items.len());
        self.items.get(start..end).unwrap_or(&[])
    }

    /// Recomputes `items_per_page` for a new viewport width and clamps the
    /// page index to the new page count, so `visible_slice` never silently
    /// turns empty after a resize.
    pub fn on_viewport_change(&mut self, width: u16) {
        self.items_per_page = self.breakpoints.items_per_page(width);

        let pages = self.page_count();
        if pages == 0 {
            self.current_page = 0;
        } else if self.current_page >= pages {
            self.current_page = pages - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(count: usize, width: u16) -> Pager<usize> {
        let mut pager = Pager::new((0..count).collect());
        pager.on_viewport_change(width);
        pager
    }

    #[test]
    fn test_page_count_ceiling() {
        let pager = pager_with(7, 800);
        assert_eq!(pager.items_per_page(), 3);
        assert_eq!(pager.page_count(), 3);

        let pager = pager_with(6, 800);
        assert_eq!(pager.page_count(), 2);

        let pager = pager_with(7, 400);
        assert_eq!(pager.page_count(), 7);
    }

    #[test]
    fn test_empty_pager_is_degenerate_not_error() {
        let mut pager = pager_with(0, 800);
        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.visible_slice().is_empty());
        assert!(!pager.has_multiple_pages());

        pager.paginate(1);
        pager.paginate(-1);
        pager.go_to_page(5);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.visible_slice().is_empty());
    }

    #[test]
    fn test_forward_wraparound_closure() {
        let mut pager = pager_with(7, 800);
        for _ in 0..pager.page_count() {
            pager.paginate(1);
        }
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_backward_wrap_from_first_page() {
        let mut pager = pager_with(7, 800);
        pager.paginate(-1);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.direction(), Direction::Backward);
    }

    #[test]
    fn test_final_page_short_slice() {
        let mut pager = pager_with(7, 800);
        assert_eq!(pager.visible_slice(), &[0, 1, 2]);

        pager.go_to_page(2);
        assert_eq!(pager.visible_slice(), &[6]);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut pager = pager_with(7, 800);
        pager.go_to_page(99);
        assert_eq!(pager.current_page(), 2);

        pager.go_to_page(1);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.direction(), Direction::Backward);

        pager.go_to_page(2);
        assert_eq!(pager.direction(), Direction::Forward);
    }

    #[test]
    fn test_go_to_current_page_infers_backward() {
        let mut pager = pager_with(7, 800);
        pager.go_to_page(1);
        pager.go_to_page(1);
        assert_eq!(pager.direction(), Direction::Backward);
    }

    #[test]
    fn test_direction_follows_step_sign() {
        let mut pager = pager_with(7, 800);
        pager.paginate(1);
        assert_eq!(pager.direction(), Direction::Forward);
        pager.paginate(-1);
        assert_eq!(pager.direction(), Direction::Backward);
    }

    #[test]
    fn test_invariant_over_navigation_sequences() {
        let mut pager = pager_with(10, 800);
        let steps = [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, 1, -1];
        for step in steps {
            pager.paginate(step);
            assert!(pager.current_page() < pager.page_count());
        }
        for target in [0, 3, 17, 1, 2] {
            pager.go_to_page(target);
            assert!(pager.current_page() < pager.page_count());
        }
    }

    #[test]
    fn test_viewport_change_clamps_page_index() {
        // 7 items, 1 per page, parked on the last page
        let mut pager = pager_with(7, 400);
        pager.go_to_page(6);
        assert_eq!(pager.current_page(), 6);

        // Widening to 3 per page shrinks the count to 3 pages; the index
        // follows instead of leaving an empty slice on screen
        pager.on_viewport_change(800);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.visible_slice(), &[6]);
    }

    #[test]
    fn test_breakpoints_lookup() {
        let bp = Breakpoints::default();
        assert_eq!(bp.items_per_page(0), 1);
        assert_eq!(bp.items_per_page(767), 1);
        assert_eq!(bp.items_per_page(768), 3);
        assert_eq!(bp.items_per_page(2000), 3);
    }

    #[test]
    fn test_breakpoints_empty_table_falls_back_to_one() {
        let bp = Breakpoints::new(vec![]);
        assert_eq!(bp.items_per_page(500), 1);
    }

    #[test]
    fn test_breakpoints_discard_zero_items_steps() {
        let bp = Breakpoints::new(vec![
            BreakpointStep {
                min_width: 0,
                items_per_page: 0,
            },
            BreakpointStep {
                min_width: 100,
                items_per_page: 2,
            },
        ]);
        assert_eq!(bp.items_per_page(50), 1);
        assert_eq!(bp.items_per_page(150), 2);
    }

    #[test]
    fn test_custom_breakpoints_sorted_on_construction() {
        let bp = Breakpoints::new(vec![
            BreakpointStep {
                min_width: 100,
                items_per_page: 3,
            },
            BreakpointStep {
                min_width: 0,
                items_per_page: 1,
            },
            BreakpointStep {
                min_width: 60,
                items_per_page: 2,
            },
        ]);
        assert_eq!(bp.items_per_page(59), 1);
        assert_eq!(bp.items_per_page(60), 2);
        assert_eq!(bp.items_per_page(100), 3);
    }
}
