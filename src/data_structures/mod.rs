pub mod map;
pub mod priority_queue;

pub use map::{HashTableMap, KeyValueMap};
pub use priority_queue::FrontierQueue;
