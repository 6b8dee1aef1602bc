// src/inventory/paginate.rs

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One page of results.
#[derive(Debug, PartialEq)]
pub struct Page<'a, R> {
    pub records: &'a [R],
    pub total_pages: usize,
}

/// At least one page, even for an empty result.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices out `page` (1-based). The page is not clamped: a page past the end,
/// or page 0, comes back empty.
pub fn paginate<R>(sorted: &[R], page: usize, page_size: usize) -> Page<'_, R> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(sorted.len());
    let end = page.saturating_mul(page_size).min(sorted.len()).max(start);

    Page {
        records: &sorted[start..end],
        total_pages: total_pages(sorted.len(), page_size),
    }
}

/// Gap markers in the pagination bar. The two are distinct so a bar with
/// both gaps has two distinct items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ellipsis {
    #[serde(rename = "ellipsis-after-first")]
    AfterFirst,
    #[serde(rename = "ellipsis-before-last")]
    BeforeLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageToken {
    Page(usize),
    Gap(Ellipsis),
}

/// Page numbers to show around `current`, with gaps elided.
///
/// First and last page are always shown, plus the neighbours of the current
/// page. On the first page the run extends to page 3, on the last page it
/// starts at `total - 2`.
pub fn compute_pagination_window(current: usize, total: usize) -> Vec<PageToken> {
    let mut window = Vec::new();
    if total == 0 {
        return window;
    }

    window.push(PageToken::Page(1));

    if current > 3 {
        window.push(PageToken::Gap(Ellipsis::AfterFirst));
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current == 1 {
        end = (total - 1).min(3);
    }
    if current == total {
        start = total.saturating_sub(2).max(2);
    }
    for page in start..=end {
        if !window.contains(&PageToken::Page(page)) {
            window.push(PageToken::Page(page));
        }
    }

    if current + 2 < total {
        window.push(PageToken::Gap(Ellipsis::BeforeLast));
    }

    if total > 1 && !window.contains(&PageToken::Page(total)) {
        window.push(PageToken::Page(total));
    }

    window
}
