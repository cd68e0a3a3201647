//! Fake paginators over collection snapshots.

use crate::types::Record;
use log::trace;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::num::NonZeroUsize;
use std::slice::Chunks;

/// Items per page when none is configured.
pub const DEFAULT_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// A paginator over a fixed list of records.
///
/// The records are copied when the paginator is created, so resources created
/// afterwards never show up in its pages.
#[derive(Debug, Clone)]
pub struct Paginator {
    summary_title: &'static str,
    items: Vec<Record>,
    per_page: NonZeroUsize,
}

impl Paginator {
    /// * `summary_title` - key each page stores its items under
    /// * `items` - records to paginate, in order
    pub fn new(summary_title: &'static str, items: Vec<Record>) -> Self {
        Self {
            summary_title,
            items,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: NonZeroUsize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn summary_title(&self) -> &'static str {
        self.summary_title
    }

    pub fn per_page(&self) -> NonZeroUsize {
        self.per_page
    }

    /// Iterate over the pages. Each call starts again from the first page.
    /// An empty paginator yields no pages at all.
    pub fn paginate(&self) -> Pages<'_> {
        Pages {
            summary_title: self.summary_title,
            chunks: self.items.chunks(self.per_page.get()),
            index: 0,
        }
    }

    /// Every item in a single page, like boto3's `build_full_result`.
    pub fn build_full_result(&self) -> Page {
        Page {
            summary_title: self.summary_title,
            items: self.paginate().flat_map(Page::into_items).collect(),
        }
    }
}

/// Lazy page iterator returned by [`Paginator::paginate`].
#[derive(Debug)]
pub struct Pages<'a> {
    summary_title: &'static str,
    chunks: Chunks<'a, Record>,
    index: usize,
}

impl Iterator for Pages<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let chunk = self.chunks.next()?;
        trace!(
            "Producing {} page {} with {} items",
            self.summary_title,
            self.index,
            chunk.len()
        );
        self.index += 1;
        Some(Page {
            summary_title: self.summary_title,
            items: chunk.to_vec(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// One page of results. Serializes as `{"<summary title>": [items...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    summary_title: &'static str,
    items: Vec<Record>,
}

impl Page {
    pub fn summary_title(&self) -> &'static str {
        self.summary_title
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Record> {
        self.items
    }

    pub fn to_value(&self) -> Value {
        let items = self.items.iter().cloned().map(Value::from).collect();
        let mut map = serde_json::Map::new();
        map.insert(self.summary_title.to_string(), Value::Array(items));
        Value::Object(map)
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.summary_title, &self.items)?;
        map.end()
    }
}
