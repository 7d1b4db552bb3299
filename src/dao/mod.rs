/// Process-local match storage.
pub mod memory;
/// Storage abstraction for the ordered in-progress matches.
pub mod match_store;
