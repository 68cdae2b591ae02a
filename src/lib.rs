pub mod args;
pub mod driver;
pub mod frontend;
pub mod reducer;
pub mod session;
pub mod utils;

pub use reducer::{compute, compute_host, Convention};
