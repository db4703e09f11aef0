use winit::keyboard::KeyCode;

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Code forwarded for keys without a numeric mapping.
pub const UNMAPPED_KEY_CODE: u32 = 0;

/// Numeric code for a key press. Every key yields one, so every press restarts rendering.
#[must_use]
pub fn key_press_code(key_code: KeyCode) -> u32 {
    key_code_to_numeric(key_code).unwrap_or(UNMAPPED_KEY_CODE)
}

/// Maps a physical key to the numeric code renderers expect (DOM `keyCode`).
#[must_use]
pub fn key_code_to_numeric(key_code: KeyCode) -> Option<u32> {
    if let Some(index) = LETTERS.iter().position(|&key| key == key_code) {
        return Some(65 + index as u32);
    }

    if let Some(index) = DIGITS.iter().position(|&key| key == key_code) {
        return Some(48 + index as u32);
    }

    let code = match key_code {
        KeyCode::Backspace => 8,
        KeyCode::Tab => 9,
        KeyCode::Enter => 13,
        KeyCode::Escape => 27,
        KeyCode::Space => 32,
        KeyCode::ArrowLeft => 37,
        KeyCode::ArrowUp => 38,
        KeyCode::ArrowRight => 39,
        KeyCode::ArrowDown => 40,
        _ => return None,
    };

    Some(code)
}
