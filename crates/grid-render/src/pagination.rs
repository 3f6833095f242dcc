//! Pagination controls and the page-info line.

use grid_core::PageSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number { page: usize, current: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub items: Vec<PageItem>,
}

/// Build the bounded page-number window: up to 5 consecutive numbers
/// centered on the current page, with first/last shortcuts and ellipses
/// when the window does not already reach the edges. Returns `None` when
/// pagination is hidden (page size `All`).
pub fn pagination_view(
    page: usize,
    total_pages: usize,
    page_size: PageSize,
    show_pagination: bool,
) -> Option<PaginationView> {
    if !show_pagination || page_size == PageSize::All {
        return None;
    }
    let mut items = Vec::new();
    if total_pages <= 1 {
        if total_pages == 1 {
            items.push(PageItem::Number {
                page: 1,
                current: true,
            });
        }
        return Some(PaginationView {
            prev_enabled: false,
            next_enabled: false,
            items,
        });
    }

    let mut start = page.saturating_sub(2).max(1);
    let mut end = (start + 4).min(total_pages);
    if end == total_pages {
        start = end.saturating_sub(4).max(1);
    }
    if start == 1 {
        end = total_pages.min(5);
    }

    if start > 1 {
        items.push(PageItem::Number {
            page: 1,
            current: false,
        });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for number in start..=end {
        items.push(PageItem::Number {
            page: number,
            current: number == page,
        });
    }
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Number {
            page: total_pages,
            current: false,
        });
    }

    Some(PaginationView {
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
        items,
    })
}

/// "Showing X to Y of Z entries" for the current window.
pub fn page_info(page: usize, page_size: PageSize, total: usize) -> String {
    if total == 0 {
        return "Showing 0 to 0 of 0 entries".to_string();
    }
    let (start, end) = match page_size.numeric() {
        None => (1, total),
        Some(size) => {
            let mut start = (page - 1) * size + 1;
            let mut end = (page * size).min(total);
            if start > total {
                start = (total.div_ceil(size).saturating_sub(1)) * size + 1;
                end = total;
            }
            (start.min(end), end)
        }
    };
    format!("Showing {start} to {end} of {total} entries")
}

#[cfg(test)]
mod tests {
    use super::{PageItem, page_info, pagination_view};
    use grid_core::PageSize;

    fn render(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageItem::Number { page, current: true } => format!("[{page}]"),
                PageItem::Number { page, current: false } => page.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn window_centers_on_current_page() {
        let view = pagination_view(6, 12, PageSize::Limited(10), true).unwrap();
        assert_eq!(render(&view.items), "1 ... 4 5 [6] 7 8 ... 12");
        assert!(view.prev_enabled);
        assert!(view.next_enabled);
    }

    #[test]
    fn window_clamps_at_the_edges() {
        let first = pagination_view(1, 12, PageSize::Limited(10), true).unwrap();
        assert_eq!(render(&first.items), "[1] 2 3 4 5 ... 12");
        assert!(!first.prev_enabled);

        let last = pagination_view(12, 12, PageSize::Limited(10), true).unwrap();
        assert_eq!(render(&last.items), "1 ... 8 9 10 11 [12]");
        assert!(!last.next_enabled);
    }

    #[test]
    fn no_trailing_ellipsis_when_window_touches_the_end() {
        let view = pagination_view(4, 6, PageSize::Limited(10), true).unwrap();
        assert_eq!(render(&view.items), "1 2 3 [4] 5 6");
    }

    #[test]
    fn single_page_disables_everything() {
        let view = pagination_view(1, 1, PageSize::Limited(10), true).unwrap();
        assert_eq!(render(&view.items), "[1]");
        assert!(!view.prev_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn all_page_size_hides_pagination() {
        assert!(pagination_view(1, 1, PageSize::All, true).is_none());
        assert!(pagination_view(1, 5, PageSize::Limited(10), false).is_none());
    }

    #[test]
    fn page_info_clamps_to_totals() {
        assert_eq!(
            page_info(1, PageSize::Limited(10), 0),
            "Showing 0 to 0 of 0 entries"
        );
        assert_eq!(
            page_info(2, PageSize::Limited(10), 25),
            "Showing 11 to 20 of 25 entries"
        );
        assert_eq!(
            page_info(3, PageSize::Limited(10), 25),
            "Showing 21 to 25 of 25 entries"
        );
        assert_eq!(page_info(1, PageSize::All, 7), "Showing 1 to 7 of 7 entries");
    }
}
