//! Reads dotted-quad IPv4 addresses line by line, sorts them from the
//! highest address to the lowest and prints the full list followed by
//! three filtered views of it.

pub mod error;
pub mod ipv4;
pub mod pool;

pub use error::{Error, FormatError};
pub use ipv4::{descending, Ipv4Address};
pub use pool::{address_field, run, Filter, IpPool, REPORT_FILTERS};
