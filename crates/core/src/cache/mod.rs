mod names;

pub use names::{CacheState, NameCache, DEFAULT_TTL};
