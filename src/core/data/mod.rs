pub mod colour;
pub mod frame_view;
pub mod input_event;
pub mod logical_coordinate;
pub mod step_sequence;
pub mod surface_geometry;
