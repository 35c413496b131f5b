use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

/// Named colors a cross can be painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// `#ff0000`
    Red,
    /// `#0000ff`
    Blue,
    /// `#008000`
    Green,
    /// `#800080`
    Purple,
    /// `#000000`
    Black,
}

/// The fixed, ordered palette random colors are drawn from.
pub const PALETTE: [Color; 5] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Purple,
    Color::Black,
];

impl Color {
    /// Straight-alpha RGBA8 value (CSS named color).
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Color::Red => [255, 0, 0, 255],
            Color::Blue => [0, 0, 255, 255],
            Color::Green => [0, 128, 0, 255],
            Color::Purple => [128, 0, 128, 255],
            Color::Black => [0, 0, 0, 255],
        }
    }

    /// CSS name of the color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform random color source over [`PALETTE`].
#[derive(Clone, Debug)]
pub struct Palette {
    rng: StdRng,
}

impl Palette {
    /// Deterministic palette: the same seed yields the same color sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Palette seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Palette seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Pick the next color, each palette entry equally likely.
    pub fn pick(&mut self) -> Color {
        PALETTE[self.rng.gen_range(0..PALETTE.len())]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/palette.rs"]
mod tests;
