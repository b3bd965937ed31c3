//! Vaar (weekday) computation.
//!
//! Weekdays follow from pure Julian Day arithmetic: JD 0 fell on a
//! Monday at noon, so the day number shifted by 1.5 gives the weekday
//! modulo 7 with Sunday at 0.

/// The seven vaars, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 vaars in order (0 = Ravivara/Sunday, 6 = Shanivara/Saturday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// Sanskrit name of the vaar.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// English weekday name.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// IAST locative phrase for sankalpa assembly.
    pub const fn iast_phrase(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravi vāsare",
            Self::Somavara => "Soma vāsare",
            Self::Mangalavara => "Maṅgala vāsare",
            Self::Budhavara => "Budha vāsare",
            Self::Guruvara => "Guru vāsare",
            Self::Shukravara => "Śukra vāsare",
            Self::Shanivara => "Śani vāsare",
        }
    }

    /// 0-based index (0 = Ravivara/Sunday).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Vaar of the civil day containing `jd`.
///
/// `jd` must already be in the frame whose weekday is wanted: pass a
/// local-frame Julian Day (civil date at midnight, or any instant within
/// the local day) for the civil weekday.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = ((jd + 1.5).floor() as i64).rem_euclid(7);
    ALL_VAARS[day as usize]
}
