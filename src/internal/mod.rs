/// Module with the per-scanner cache of compiled class sequences.
mod class_cache;
pub(crate) use class_cache::ClassCache;

/// Module that provides the literal search used by the scan-upto operations.
pub(crate) mod literal_search;
