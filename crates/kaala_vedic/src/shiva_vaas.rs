//! Shiva Vaas: Shiva's abode for a tithi.
//!
//! Seven abodes cycle with the tithi, offset by one between the
//! fortnights: the bright fortnight starts the cycle at Pratipada, the
//! dark fortnight enters it one step later. Each abode carries a
//! conventional fruit (phala) for vows taken that day.

use crate::tithi::Paksha;

/// The seven abodes in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShivaVaas {
    /// Cremation ground.
    Shmashana,
    /// In Gauri's presence.
    GauriSannidhya,
    /// In assembly.
    Sabha,
    /// At play.
    Krida,
    /// On Kailasha.
    Kailasha,
    /// Mounted on Nandi.
    Vrisharudha,
    /// At meal.
    Bhojana,
}

/// All 7 abodes in cycle order.
pub const ALL_SHIVA_VAAS: [ShivaVaas; 7] = [
    ShivaVaas::Shmashana,
    ShivaVaas::GauriSannidhya,
    ShivaVaas::Sabha,
    ShivaVaas::Krida,
    ShivaVaas::Kailasha,
    ShivaVaas::Vrisharudha,
    ShivaVaas::Bhojana,
];

impl ShivaVaas {
    /// Transliterated name of the abode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shmashana => "Shmashana",
            Self::GauriSannidhya => "Gauri Sannidhya",
            Self::Sabha => "Sabha",
            Self::Krida => "Krida",
            Self::Kailasha => "Kailasha",
            Self::Vrisharudha => "Vrisharudha",
            Self::Bhojana => "Bhojana",
        }
    }

    /// Devanagari name of the abode.
    pub const fn devanagari(self) -> &'static str {
        match self {
            Self::Shmashana => "शमशान",
            Self::GauriSannidhya => "गौरी सानिध्य",
            Self::Sabha => "सभायां",
            Self::Krida => "क्रीडायां",
            Self::Kailasha => "कैलाश पर",
            Self::Vrisharudha => "वृषारूढ",
            Self::Bhojana => "भोजन",
        }
    }

    /// Transliterated fruit of the abode.
    pub const fn phala(self) -> &'static str {
        match self {
            Self::Shmashana => "Mrityutulya",
            Self::GauriSannidhya => "Sukhaprada",
            Self::Sabha => "Santapa",
            Self::Krida => "Kashta",
            Self::Kailasha => "Sukhaprada",
            Self::Vrisharudha => "Abhishta Siddhi",
            Self::Bhojana => "Pida",
        }
    }

    /// Devanagari fruit of the abode.
    pub const fn phala_devanagari(self) -> &'static str {
        match self {
            Self::Shmashana => "मृत्युतुल्य",
            Self::GauriSannidhya => "सुखप्रद",
            Self::Sabha => "संताप",
            Self::Krida => "कष्ट एवं दुःख",
            Self::Kailasha => "सुखप्रद",
            Self::Vrisharudha => "अभीष्टसिद्धि",
            Self::Bhojana => "पीड़ा",
        }
    }
}

/// Shiva's abode for a 1-based tithi (1-15) in a fortnight.
///
/// Returns `None` when `tithi_in_paksha` is outside 1-15.
pub fn shiva_vaas(paksha: Paksha, tithi_in_paksha: u8) -> Option<ShivaVaas> {
    if tithi_in_paksha < 1 || tithi_in_paksha > 15 {
        return None;
    }
    let slot = match paksha {
        Paksha::Shukla => (tithi_in_paksha - 1) % 7,
        Paksha::Krishna => tithi_in_paksha % 7,
    };
    Some(ALL_SHIVA_VAAS[slot as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shukla_starts_at_shmashana() {
        assert_eq!(shiva_vaas(Paksha::Shukla, 1), Some(ShivaVaas::Shmashana));
        assert_eq!(
            shiva_vaas(Paksha::Shukla, 2),
            Some(ShivaVaas::GauriSannidhya)
        );
        assert_eq!(shiva_vaas(Paksha::Shukla, 7), Some(ShivaVaas::Bhojana));
    }

    #[test]
    fn shukla_cycle_repeats_at_eight() {
        assert_eq!(shiva_vaas(Paksha::Shukla, 8), Some(ShivaVaas::Shmashana));
        assert_eq!(shiva_vaas(Paksha::Shukla, 15), Some(ShivaVaas::Shmashana));
    }

    #[test]
    fn krishna_enters_one_step_later() {
        assert_eq!(
            shiva_vaas(Paksha::Krishna, 1),
            Some(ShivaVaas::GauriSannidhya)
        );
        assert_eq!(shiva_vaas(Paksha::Krishna, 7), Some(ShivaVaas::Shmashana));
        assert_eq!(shiva_vaas(Paksha::Krishna, 14), Some(ShivaVaas::Shmashana));
        // Amavasya.
        assert_eq!(
            shiva_vaas(Paksha::Krishna, 15),
            Some(ShivaVaas::GauriSannidhya)
        );
    }

    #[test]
    fn out_of_range_tithi_rejected() {
        assert_eq!(shiva_vaas(Paksha::Shukla, 0), None);
        assert_eq!(shiva_vaas(Paksha::Shukla, 16), None);
        assert_eq!(shiva_vaas(Paksha::Krishna, 255), None);
    }

    #[test]
    fn phala_pairs() {
        assert_eq!(ShivaVaas::Shmashana.phala(), "Mrityutulya");
        assert_eq!(ShivaVaas::Vrisharudha.phala(), "Abhishta Siddhi");
        assert_eq!(ShivaVaas::Kailasha.phala_devanagari(), "सुखप्रद");
    }

    #[test]
    fn devanagari_names() {
        assert_eq!(ShivaVaas::Shmashana.devanagari(), "शमशान");
        assert_eq!(ShivaVaas::Bhojana.devanagari(), "भोजन");
    }
}
