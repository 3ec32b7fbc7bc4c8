use std::fmt;

/// TMDB refuses `page` values above this.
pub const MAX_API_PAGE: u32 = 500;

pub const WINDOW_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// Sliding window of page numbers centred on `current`, with the first and last page
/// pinned behind an ellipsis when they fall outside it.
pub fn page_window(current: u32, total: u32, max_pages: u32) -> Vec<PageItem> {
    let half = max_pages / 2;
    let lo = current.saturating_sub(half).max(1);
    let hi = current.saturating_add(half).min(total);

    let mut items = Vec::new();
    if lo > 1 {
        items.push(PageItem::Page(1));
        if lo > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((lo..=hi).map(PageItem::Page));

    if hi < total {
        if hi + 1 < total {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn middle_page_pins_both_ends() {
        assert_eq!(
            page_window(7, 20, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn first_pages_have_no_leading_ellipsis() {
        assert_eq!(
            page_window(1, 20, 5),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(3, 20, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn adjacent_end_page_skips_ellipsis() {
        assert_eq!(
            page_window(4, 7, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn last_page() {
        assert_eq!(
            page_window(20, 20, 5),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn nothing_before_the_first_response() {
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(page_window(1, 1, 5), vec![Page(1)]);
    }
}
