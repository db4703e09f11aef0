pub mod paint_step;
pub mod ports;
