pub mod pending_frame;

pub use pending_frame::PendingFrame;
