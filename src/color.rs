/// Display colour carried by core data for the renderer. The simulation never
/// inspects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const GRAY: Rgba = Rgba::new(130, 130, 130, 255);
    pub const DARKGRAY: Rgba = Rgba::new(80, 80, 80, 255);
    pub const GREEN: Rgba = Rgba::new(0, 228, 48, 255);
    pub const DARKGREEN: Rgba = Rgba::new(0, 117, 44, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const DARKBLUE: Rgba = Rgba::new(0, 82, 172, 255);
    pub const SKYBLUE: Rgba = Rgba::new(102, 191, 255, 255);
    pub const PURPLE: Rgba = Rgba::new(200, 122, 255, 255);
    pub const ORANGE: Rgba = Rgba::new(255, 161, 0, 255);
    pub const YELLOW: Rgba = Rgba::new(253, 249, 0, 255);
    pub const GOLD: Rgba = Rgba::new(255, 203, 0, 255);
    pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
    pub const MAROON: Rgba = Rgba::new(190, 33, 55, 255);

    /// Moves each channel towards white (positive factor) or black
    /// (negative factor). Alpha is kept.
    pub fn brightness(self, factor: f32) -> Rgba {
        let factor = factor.clamp(-1.0, 1.0);
        let shift = |channel: u8| -> u8 {
            let c = channel as f32;
            let shifted = if factor < 0.0 {
                c * (1.0 + factor)
            } else {
                c + (255.0 - c) * factor
            };
            shifted.round().clamp(0.0, 255.0) as u8
        };
        Rgba::new(shift(self.r), shift(self.g), shift(self.b), self.a)
    }
}
