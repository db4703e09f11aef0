#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn from_rgb_slice(rgb: &[u8]) -> Option<Self> {
        match rgb {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Multiplies each channel by `factor`, saturating at 0 and 255.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |channel: u8| (f64::from(channel) * factor).round().clamp(0.0, 255.0) as u8;

        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl From<[u8; 3]> for Colour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_slice_reads_first_three_bytes() {
        assert_eq!(
            Colour::from_rgb_slice(&[1, 2, 3, 4]),
            Some(Colour::new(1, 2, 3))
        );
        assert_eq!(Colour::from_rgb_slice(&[1, 2]), None);
    }

    #[test]
    fn test_scaled_saturates() {
        let colour = Colour::new(200, 100, 0);

        assert_eq!(colour.scaled(2.0), Colour::new(255, 200, 0));
        assert_eq!(colour.scaled(0.5), Colour::new(100, 50, 0));
        assert_eq!(colour.scaled(-1.0), Colour::BLACK);
    }
}
