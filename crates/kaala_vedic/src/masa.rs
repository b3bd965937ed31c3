//! Lunar month (masa) and season (ritu) tables.
//!
//! The masa itself is a calendrical input here — amanta/purnimanta month
//! resolution needs new-moon searches that live above this crate. What
//! this module fixes is the naming and the masa → ritu pairing used in
//! sankalpa assembly: two lunar months per season, Chaitra opening
//! Vasanta.

/// The 12 lunar months starting from Chaitra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra, 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Sanskrit name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The six seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

impl Ritu {
    /// Sanskrit name of the ritu.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }

    /// IAST locative phrase for sankalpa assembly.
    pub const fn iast_phrase(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta ṛtau",
            Self::Grishma => "Grīṣma ṛtau",
            Self::Varsha => "Varṣā ṛtau",
            Self::Sharad => "Śarad ṛtau",
            Self::Hemanta => "Hemanta ṛtau",
            Self::Shishira => "Śiśira ṛtau",
        }
    }
}

/// Season of a lunar month: two masas per ritu, Chaitra opens Vasanta.
pub const fn ritu_for_masa(masa: Masa) -> Ritu {
    match masa {
        Masa::Chaitra | Masa::Vaishakha => Ritu::Vasanta,
        Masa::Jyeshtha | Masa::Ashadha => Ritu::Grishma,
        Masa::Shravana | Masa::Bhadrapada => Ritu::Varsha,
        Masa::Ashwin | Masa::Kartika => Ritu::Sharad,
        Masa::Margashirsha | Masa::Pausha => Ritu::Hemanta,
        Masa::Magha | Masa::Phalguna => Ritu::Shishira,
    }
}
