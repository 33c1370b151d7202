//! "Show more" pagination.

/// Records shown before the first "show more".
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Factor the limit grows by on each "show more".
pub const DEFAULT_GROWTH_FACTOR: usize = 5;

/// A growing prefix of the ranked result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    growth_factor: usize,
    limit: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_GROWTH_FACTOR)
    }
}

impl Pager {
    /// Creates a pager. A page size of zero is raised to one and a growth
    /// factor below two is raised to two, so "show more" always grows.
    pub fn new(page_size: usize, growth_factor: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            growth_factor: growth_factor.max(2),
            limit: page_size,
        }
    }

    /// Current number of records shown.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Grow the limit geometrically.
    pub fn show_more(&mut self) {
        self.limit = self.limit.saturating_mul(self.growth_factor);
    }

    /// Back to the first page, e.g. after the filters changed.
    pub fn reset(&mut self) {
        self.limit = self.page_size;
    }

    /// The visible prefix of `items`.
    pub fn page<'r, T>(&self, items: &'r [T]) -> &'r [T] {
        &items[..items.len().min(self.limit)]
    }

    /// Whether `total` records exceed what is shown.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.limit
    }
}
