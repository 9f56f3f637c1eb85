//! Small presentational building blocks shared by the landing page and the
//! dashboard tabs.

pub mod badge;
pub mod card;
pub mod chart;
pub mod gauge;
pub mod progress;

pub use badge::Badge;
pub use card::Card;
pub use chart::{Figure, PlotlyChart};
pub use gauge::ScoreGauge;
pub use progress::ProgressBar;
