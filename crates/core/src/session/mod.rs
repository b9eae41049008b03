//! Session lifecycle: credential storage, claims decoding, forced invalidation
//!
//! The credential pair and the cached identity claims live in client-side
//! key/value storage. Storage and navigation sit behind small traits so the
//! browser bindings and the test fakes plug into the same code paths.

pub mod claims;
pub mod invalidation;
pub mod storage;
pub mod store;
