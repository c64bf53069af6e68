use std::ops::Range;

/// Bars shown per chart page.
pub const CHART_PAGE_SIZE: usize = 7;

/// Paging controls appear only for series longer than this.
pub const CONTROLS_MIN_LEN: usize = 5;

/// Fixed-size window over a chart series.
///
/// `page * page_size < len` holds whenever the series is not empty; `reset` must be
/// called when the series is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPager {
    page: usize,
    page_size: usize,
    len: usize,
}

impl ChartPager {
    pub fn new(len: usize) -> Self {
        Self::with_page_size(len, CHART_PAGE_SIZE)
    }

    pub fn with_page_size(len: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            len,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        (self.page + 1) * self.page_size < self.len
    }

    pub fn shows_controls(&self) -> bool {
        self.len > CONTROLS_MIN_LEN
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// New series: back to the first page.
    pub fn reset(&mut self, len: usize) {
        self.page = 0;
        self.len = len;
    }

    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(ChartPager::new(0).page_count(), 0);
        assert_eq!(ChartPager::new(1).page_count(), 1);
        assert_eq!(ChartPager::new(7).page_count(), 1);
        assert_eq!(ChartPager::new(8).page_count(), 2);
        assert_eq!(ChartPager::new(21).page_count(), 3);
    }

    #[test]
    fn test_controls_visibility_while_walking_all_pages() {
        for len in 1..=30 {
            let mut pager = ChartPager::new(len);
            let pages = pager.page_count();
            for page in 0..pages {
                assert_eq!(pager.page(), page);
                assert!(pager.page() * CHART_PAGE_SIZE < len);
                assert_eq!(pager.has_previous(), page > 0, "len {} page {}", len, page);
                assert_eq!(pager.has_next(), page + 1 < pages, "len {} page {}", len, page);
                pager.next();
            }
            assert_eq!(pager.page(), pages - 1);
        }
    }

    #[test]
    fn test_window_slices_current_page() {
        let values: Vec<u32> = (1..=16).collect();
        let mut pager = ChartPager::new(values.len());
        assert_eq!(pager.window(&values), &[1, 2, 3, 4, 5, 6, 7]);
        pager.next();
        pager.next();
        assert_eq!(pager.window(&values), &[15, 16]);
        pager.next();
        assert_eq!(pager.page(), 2);
        pager.previous();
        assert_eq!(pager.window(&values), &[8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = ChartPager::new(20);
        pager.next();
        pager.reset(3);
        assert_eq!(pager.page(), 0);
        assert!(!pager.has_next());
        assert!(!pager.shows_controls());
    }

    #[test]
    fn test_empty_series() {
        let pager = ChartPager::new(0);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
        assert!(pager.window(&Vec::<f64>::new()).is_empty());
    }
}
