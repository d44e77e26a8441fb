//! Feed assembly module
//!
//! Consumes harvested episode records and produces the RSS 2.0 podcast
//! feed: date normalization, newest-first ordering, and XML serialization.

mod assembler;
mod dates;

pub use assembler::assemble;
pub use dates::{format_pub_date, parse_publish_date};
