pub mod database;
pub mod repositories;
pub mod sanitizer;
pub mod time;
pub mod util;
