/// Raw input as delivered by the host, before any mapping to renderer space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Click { client_x: f64, client_y: f64 },
    KeyPress { code: u32 },
}
