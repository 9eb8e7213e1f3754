// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of card and set images.
//!
//! Images are fetched on demand the first time a screen shows them and kept
//! in a least-recently-used cache keyed by URL. A URL is requested at most
//! once while it stays cached, including after a failure, so a broken image
//! does not refetch on every redraw.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ImageCache {
    slots: LruCache<String, ImageSlot>,
}

impl ImageCache {
    /// Capacity is clamped to at least one entry.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
        }
    }

    /// Slot for `url` without touching recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.peek(url)
    }

    /// Marks every unknown URL as loading and returns those to fetch.
    ///
    /// Known URLs are promoted so the images on screen are the last to be
    /// evicted.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing = Vec::new();
        for url in urls {
            if self.slots.get(url).is_some() {
                continue;
            }
            self.slots.put(url.to_string(), ImageSlot::Loading);
            missing.push(url.to_string());
        }
        missing
    }

    /// Stores the outcome of a fetch started by [`Self::request`].
    pub fn finish(&mut self, url: String, bytes: Option<Vec<u8>>) {
        let slot = match bytes {
            Some(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
            None => ImageSlot::Failed,
        };
        self.slots.put(url, slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
