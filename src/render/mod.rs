pub mod progress;
pub mod renderer;

pub use progress::SummaryProgress;
pub use renderer::*;
