mod interval;
mod pace;

pub use interval::IntervalTimer;
pub use pace::{PaceAdvisory, PaceMonitor};
