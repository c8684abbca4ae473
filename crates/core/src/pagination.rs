//! Page objects for list screens.
//!
//! Every index screen receives `{data, links, meta}`: one page of records,
//! the paginator links (previous, page numbers, next) and the position meta.
//! Link URLs carry the active filter query so following a link keeps the
//! current filters.

use serde::Serialize;

/// Default page size for list screens.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Upper bound for a requested page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Page counts above this are abbreviated with "..." gaps in `links`.
const FULL_LINKS_MAX_PAGES: i64 = 10;

/// Pages shown on each side of the current page when abbreviating.
const LINK_WINDOW: i64 = 2;

pub const PREVIOUS_LABEL: &str = "&laquo; Previous";
pub const NEXT_LABEL: &str = "Next &raquo;";
pub const GAP_LABEL: &str = "...";

/// A clamped page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Clamp raw query values: `page` floors at 1, `per_page` falls back to
    /// `default` and is clamped to `[1, max]`.
    pub fn new(page: Option<i64>, per_page: Option<i64>, default: i64, max: i64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(default).clamp(1, max.max(1)),
        }
    }

    /// Row offset of the first record on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, DEFAULT_PER_PAGE, MAX_PER_PAGE)
    }
}

/// Position metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub last_page: i64,
    /// 1-based position of the first record, `None` for an empty page.
    pub from: Option<i64>,
    /// 1-based position of the last record, `None` for an empty page.
    pub to: Option<i64>,
    pub total: i64,
    pub per_page: i64,
    pub path: String,
}

/// One paginator link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// One page of records plus links and meta.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub links: Vec<PageLink>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Assemble a page. `query` holds the filter parameters (without `page`)
    /// to carry on every link URL.
    pub fn new(
        data: Vec<T>,
        request: PageRequest,
        total: i64,
        path: &str,
        query: &[(&str, i64)],
    ) -> Self {
        let meta = page_meta(request, data.len() as i64, total, path);
        let links = page_links(meta.current_page, meta.last_page, path, query);
        Self { data, links, meta }
    }
}

/// Compute the meta block for a page holding `count` records.
pub fn page_meta(request: PageRequest, count: i64, total: i64, path: &str) -> PageMeta {
    let total = total.max(0);
    let last_page = last_page(total, request.per_page);
    let (from, to) = if count > 0 {
        let from = request.offset().saturating_add(1);
        (Some(from), Some(from.saturating_add(count - 1)))
    } else {
        (None, None)
    };

    PageMeta {
        current_page: request.page,
        last_page,
        from,
        to,
        total,
        per_page: request.per_page,
        path: path.to_string(),
    }
}

/// Number of pages for `total` records; at least 1.
pub fn last_page(total: i64, per_page: i64) -> i64 {
    let per_page = per_page.max(1);
    ((total.max(0) + per_page - 1) / per_page).max(1)
}

/// Build a URL for `path` with `query` and an optional `page` parameter.
pub fn page_url(path: &str, query: &[(&str, i64)], page: Option<i64>) -> String {
    let mut pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    if let Some(page) = page {
        pairs.push(format!("page={page}"));
    }
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}

/// Build the paginator links: previous, page numbers (with gaps for long
/// ranges), next.
pub fn page_links(current: i64, last: i64, path: &str, query: &[(&str, i64)]) -> Vec<PageLink> {
    let link = |page: i64| PageLink {
        url: Some(page_url(path, query, Some(page))),
        label: page.to_string(),
        active: page == current,
    };
    let gap = || PageLink {
        url: None,
        label: GAP_LABEL.to_string(),
        active: false,
    };

    let mut links = Vec::new();
    links.push(PageLink {
        url: (current > 1).then(|| page_url(path, query, Some(current.saturating_sub(1)))),
        label: PREVIOUS_LABEL.to_string(),
        active: false,
    });

    if last <= FULL_LINKS_MAX_PAGES {
        links.extend((1..=last).map(link));
    } else {
        let window_start = current.saturating_sub(LINK_WINDOW).max(1);
        let window_end = current.saturating_add(LINK_WINDOW).min(last);

        let mut previous: Option<i64> = None;
        for page in (1..=2).chain(window_start..=window_end).chain(last - 1..=last) {
            if previous.is_some_and(|p| page <= p) {
                continue;
            }
            if previous.is_some_and(|p| page > p + 1) {
                links.push(gap());
            }
            links.push(link(page));
            previous = Some(page);
        }
    }

    links.push(PageLink {
        url: (current < last).then(|| page_url(path, query, Some(current.saturating_add(1)))),
        label: NEXT_LABEL.to_string(),
        active: false,
    });
    links
}
