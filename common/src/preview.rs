/// Rows shown per page in the data preview.
pub const ROWS_PER_PAGE: usize = 10;

/// Client-side pagination over already fetched preview rows. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total_rows: usize,
    page: usize,
}

impl Pager {
    pub fn new(total_rows: usize) -> Self {
        Self { total_rows, page: 1 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_rows.div_ceil(ROWS_PER_PAGE)
    }

    /// Index range of the rows on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * ROWS_PER_PAGE).min(self.total_rows);
        let end = (start + ROWS_PER_PAGE).min(self.total_rows);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages().max(1));
    }

    /// Whether the page controls are worth showing.
    pub fn is_paged(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_rows_make_three_pages() {
        let mut pager = Pager::new(30);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.range(), 0..10);
        assert!(!pager.has_previous());

        pager.next();
        pager.next();
        assert_eq!(pager.range(), 20..30);
        assert!(!pager.has_next());

        pager.next();
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.label(), "Página 3 de 3");
    }

    #[test]
    fn previous_is_clamped_at_one() {
        let mut pager = Pager::new(25);
        pager.previous();
        assert_eq!(pager.page(), 1);
        pager.next();
        pager.next();
        assert_eq!(pager.range(), 20..25);
    }

    #[test]
    fn empty_preview_has_a_single_empty_page() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.total_pages(), 0);
        pager.next();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.range(), 0..0);
        assert!(!pager.is_paged());
    }
}
