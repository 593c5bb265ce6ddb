// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod faults;
pub mod store;
pub mod time;

pub use faults::{ConflictingPostWrites, FailingCategories, InsertFault};
pub use store::MemoryStore;
pub use time::{SteppingClock, fixed_now};
