pub mod cancellation;
pub mod paint_step;
