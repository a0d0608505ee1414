// src/shared/pagination.rs
use serde::{Deserialize, Serialize, Serializer};

pub const ITEMS_PER_PAGE: u64 = 10;

//
// ──────────────────────────────────────────────────────────
// Page Request
// ──────────────────────────────────────────────────────────
//

/// Page number as asked for by the client, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: ITEMS_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Reads the `?page=` value.
    ///
    /// Missing or non-numeric values select the first page, numbers below one
    /// select the first page, and digit strings too large to parse select the
    /// last page once clamped.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = match raw.map(str::trim) {
            None | Some("") => 1,
            Some(value) => match value.parse::<i64>() {
                Ok(n) if n < 1 => 1,
                Ok(n) => n as u64,
                Err(_) if value.chars().all(|c| c.is_ascii_digit()) => u64::MAX,
                Err(_) => 1,
            },
        };

        Self {
            page,
            per_page: ITEMS_PER_PAGE,
        }
    }
}

/// Query string of the paginated list routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn request(&self) -> PageRequest {
        PageRequest::from_param(self.page.as_deref())
    }
}

//
// ──────────────────────────────────────────────────────────
// Paginator
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(total: u64, per_page: u64) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
        }
    }

    /// An empty collection still has one (empty) page.
    pub fn num_pages(&self) -> u64 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    pub fn clamp(&self, requested: u64) -> u64 {
        requested.clamp(1, self.num_pages())
    }

    pub fn offset(&self, number: u64) -> u64 {
        (number.saturating_sub(1)).saturating_mul(self.per_page)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

//
// ──────────────────────────────────────────────────────────
// Page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: u64, paginator: &Paginator) -> Self {
        Self {
            items,
            number,
            num_pages: paginator.num_pages(),
            per_page: paginator.per_page(),
            total: paginator.total(),
        }
    }

    pub fn empty(per_page: u64) -> Self {
        Self::new(Vec::new(), 1, &Paginator::new(0, per_page))
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page, 0 when empty.
    pub fn start_index(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            (self.number - 1) * self.per_page + 1
        }
    }

    pub fn end_index(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.start_index() + self.items.len() as u64 - 1
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[derive(Serialize)]
struct PageObject<'a, T: Serialize> {
    items: &'a [T],
    number: u64,
    num_pages: u64,
    per_page: u64,
    total: u64,
    has_next: bool,
    has_previous: bool,
    next_page_number: Option<u64>,
    previous_page_number: Option<u64>,
    start_index: u64,
    end_index: u64,
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PageObject {
            items: &self.items,
            number: self.number,
            num_pages: self.num_pages,
            per_page: self.per_page,
            total: self.total,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            next_page_number: self.next_page_number(),
            previous_page_number: self.previous_page_number(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
        .serialize(serializer)
    }
}
