use winit::keyboard::Key;

use crate::light::LightDirection;

/// Maps a logical keyboard key to a light step direction.
///
/// `a`/`d` slide the light along x, `f`/`r` along y, `w`/`s` along z, upper
/// or lower case. With the reference cameras looking down -z, `w` pushes the
/// light away from the viewer. Everything else is left for the host to
/// handle and maps to `None`.
pub fn light_direction_for_key(key: &Key) -> Option<LightDirection> {
    match key {
        Key::Character(text) => match text.as_str() {
            "d" | "D" => Some(LightDirection::PosX),
            "a" | "A" => Some(LightDirection::NegX),
            "r" | "R" => Some(LightDirection::PosY),
            "f" | "F" => Some(LightDirection::NegY),
            "s" | "S" => Some(LightDirection::PosZ),
            "w" | "W" => Some(LightDirection::NegZ),
            _ => None,
        },
        _ => None,
    }
}
