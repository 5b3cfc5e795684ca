//! Cache module for storing API responses in memory
//!
//! This module provides an in-memory cache store that keeps API responses for
//! the lifetime of the process, with configurable TTL (time-to-live) values
//! in milliseconds. Entries are keyed by an ordered sequence of string
//! segments, and expired entries are reported with an `is_expired` flag so
//! callers can decide whether to refetch.

mod store;

pub use store::{CacheKey, CacheStore, CachedData};
