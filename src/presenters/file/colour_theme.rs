/// Gnuplot `rgbformulae` palettes, numbered 1 to 7 on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourTheme {
    Candy,
    #[default]
    Cosmic,
    Fire,
    Ocean,
    Rainbow,
    Violet,
    Volcano,
}

impl ColourTheme {
    pub const ALL: &'static [Self] = &[
        Self::Candy,
        Self::Cosmic,
        Self::Fire,
        Self::Ocean,
        Self::Rainbow,
        Self::Violet,
        Self::Volcano,
    ];

    /// Unknown numbers fall back to Volcano.
    #[must_use]
    pub fn from_number(number: u32) -> Self {
        match number {
            1 => Self::Candy,
            2 => Self::Cosmic,
            3 => Self::Fire,
            4 => Self::Ocean,
            5 => Self::Rainbow,
            6 => Self::Violet,
            7 => Self::Volcano,
            _ => {
                log::warn!("unknown colour theme {}, using Volcano", number);
                Self::Volcano
            }
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Candy => "Candy",
            Self::Cosmic => "Cosmic",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Rainbow => "Rainbow",
            Self::Violet => "Violet",
            Self::Volcano => "Volcano",
        }
    }

    #[must_use]
    pub const fn rgb_formulae(self) -> &'static str {
        match self {
            Self::Candy => "3,11,16",
            Self::Cosmic => "30,31,32",
            Self::Fire => "21,22,23",
            Self::Ocean => "23,28,3",
            Self::Rainbow => "22,13,-31",
            Self::Violet => "33,13,10",
            Self::Volcano => "7,5,15",
        }
    }
}
