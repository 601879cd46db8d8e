//! Relaunch Core Library
//!
//! Core library of the Relaunch launcher. The host keeps a local history of
//! previously downloaded app updates; this crate turns that raw history into
//! a presentable view: one record per update, most recent first.

pub mod updates;

pub use updates::{
    reconcile, FeedConfig, MockUpdateSource, RefreshStatus, RetrievalError, UpdateFeed,
    UpdateRecord, UpdateSource,
};
