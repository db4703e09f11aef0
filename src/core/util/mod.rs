pub mod client_to_logical_coords;
