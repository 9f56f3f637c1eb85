pub mod check;
pub mod serve;

pub use check::check_dist;
pub use serve::serve;
