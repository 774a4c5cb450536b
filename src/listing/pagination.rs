//! Page arithmetic and the compact page-number strip.

/// Strips longer than this collapse into first/last plus a window around the
/// current page
const FULL_STRIP_MAX: usize = 7;

/// One entry in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// `ceil(count / page_size)`; zero items means zero pages
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Items `[(page-1)*page_size, page*page_size)` of `items`, for 1-based `page`
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers to show for navigation
///
/// Up to seven pages are listed in full. Beyond that the strip always holds the
/// first and last page and the current page with its neighbours; an ellipsis
/// goes before the window when `current > 4` and after it when
/// `current < total - 3`.
pub fn page_strip(current: usize, total: usize) -> Vec<PageItem> {
    if total <= FULL_STRIP_MAX {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 4 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        items.push(PageItem::Page(page));
    }

    if current + 3 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}
