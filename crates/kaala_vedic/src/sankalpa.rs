//! Sankalpa (ritual declaration) assembly.
//!
//! Assembles the Drik-style sankalpa text from already-computed calendar
//! elements. Everything here is string work over the fixed template: the
//! cosmological preamble, the place lines, the calendar-element locatives,
//! the rashi lines, and the declarant. Purpose and offering phrases are
//! taken verbatim — mapping free text to Sanskrit stays outside this
//! crate.

use crate::karana::Karana;
use crate::masa::{Masa, ritu_for_masa};
use crate::nakshatra::Nakshatra;
use crate::rashi::{ayana_for_rashi, rashi_from_longitude};
use crate::tithi::{Paksha, Tithi};
use crate::vaar::Vaar;
use crate::yoga::Yoga;

/// Grammatical gender of the declarant, for the gotra phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Gendered "born of the gotra" phrase.
    pub const fn gotra_phrase(self) -> &'static str {
        match self {
            Self::Male => "Gotrotpannasya",
            Self::Female => "Gotrotpannāyāḥ",
        }
    }
}

/// Everything the sankalpa template interpolates.
#[derive(Debug, Clone, PartialEq)]
pub struct SankalpaInput {
    /// Country, for the Kṣetre line.
    pub country: String,
    /// State or region, for the Maṇḍalāntaragate line.
    pub state: String,
    /// City or town, for the nagare line.
    pub city: String,
    /// Lunar month.
    pub masa: Masa,
    /// Fortnight.
    pub paksha: Paksha,
    /// Tithi.
    pub tithi: Tithi,
    /// Weekday.
    pub vaar: Vaar,
    /// Nakshatra.
    pub nakshatra: Nakshatra,
    /// Yoga.
    pub yoga: Yoga,
    /// Karana.
    pub karana: Karana,
    /// Sun's sidereal longitude, degrees.
    pub sun_lon_sidereal: f64,
    /// Moon's sidereal longitude, degrees.
    pub moon_lon_sidereal: f64,
    /// Jupiter's sidereal longitude, degrees; the Deva-gurau line is
    /// omitted when absent.
    pub jupiter_lon_sidereal: Option<f64>,
    /// Declarant's name (IAST).
    pub name: String,
    /// Declarant's gotra (IAST).
    pub gotra: String,
    /// Declarant's gender, for the gotra phrase.
    pub gender: Gender,
    /// Purpose phrase, already in Sanskrit ("śānty-artham", ...).
    pub purpose: String,
    /// Offering phrase, already in Sanskrit ("japaṃ kariṣye", ...).
    pub offering: String,
}

/// Convert Western digits in a string to Devanagari digits.
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '०',
            '1' => '१',
            '2' => '२',
            '3' => '३',
            '4' => '४',
            '5' => '५',
            '6' => '६',
            '7' => '७',
            '8' => '८',
            '9' => '९',
            other => other,
        })
        .collect()
}

/// Assemble the full sankalpa text.
pub fn generate_sankalpa(input: &SankalpaInput) -> String {
    let sun_rashi = rashi_from_longitude(input.sun_lon_sidereal);
    let moon_rashi = rashi_from_longitude(input.moon_lon_sidereal);
    let ayana = ayana_for_rashi(sun_rashi);
    let ritu = ritu_for_masa(input.masa);

    let guru_line = match input.jupiter_lon_sidereal {
        Some(lon) => format!("{} rāśisthite Deva-gurau,\n", rashi_from_longitude(lon).name()),
        None => String::new(),
    };

    format!(
        "ॐ विष्णुर्विष्णुर्विष्णुः
Shrimadbhagavato Mahapurushasya Vishnorājñayā pravartamānasya
Adyaitasya Brahmaṇo’ahni, Dvitīye Parārdhe,
Śrī Śvetavarāha Kalpe, Vaivasvata Manvantare,
Kaliyuge,
Kali Prathamacharane vartamāne,

Bhūrloke,
{country}, Kṣetre,
{state} Maṇḍalāntaragate,
{city} nāmnī nagare,

{ayana}, {ritu},
{masa} māse,
{paksha} pakṣe,
{tithi} tithau,
{vara},
{nakshatra} nakṣatre,
{yoga} yoge,
{karana} karaṇe,
{moon_rashi} rāśisthite Chandre,
{sun_rashi} rāśisthite Śrī Sūrye,
{guru_line}
Śeṣeshu graheshu yathā-yathā rāśi-sthānastheshu satsu,
Evam graha-guṇa-viśeṣaṇa-viśiṣṭāyām śubha-puṇya-tithau,

Aham {gotra} {gotra_phrase} {name} nāma,
{purpose},
{offering}।

Iti Sankalpah.",
        country = input.country,
        state = input.state,
        city = input.city,
        ayana = ayana.iast_phrase(),
        ritu = ritu.iast_phrase(),
        masa = input.masa.name(),
        paksha = input.paksha.name(),
        tithi = input.tithi.name(),
        vara = input.vaar.iast_phrase(),
        nakshatra = input.nakshatra.name(),
        yoga = input.yoga.name(),
        karana = input.karana.name(),
        moon_rashi = moon_rashi.name(),
        sun_rashi = sun_rashi.name(),
        guru_line = guru_line,
        gotra = input.gotra,
        gotra_phrase = input.gender.gotra_phrase(),
        name = input.name,
        purpose = input.purpose,
        offering = input.offering,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring_input() -> SankalpaInput {
        SankalpaInput {
            country: "Bhārata".into(),
            state: "Dillī".into(),
            city: "New Delhi".into(),
            masa: Masa::Chaitra,
            paksha: Paksha::Shukla,
            tithi: Tithi::ShuklaPratipada,
            vaar: Vaar::Budhavara,
            nakshatra: Nakshatra::Ashwini,
            yoga: Yoga::Vishkambha,
            karana: Karana::Kimstughna,
            sun_lon_sidereal: 355.0,
            moon_lon_sidereal: 10.0,
            jupiter_lon_sidereal: Some(45.0),
            name: "Rāhula".into(),
            gotra: "Kāśyapa".into(),
            gender: Gender::Male,
            purpose: "śānty-artham".into(),
            offering: "japaṃ kariṣye".into(),
        }
    }

    #[test]
    fn opens_with_the_invocation() {
        let text = generate_sankalpa(&spring_input());
        assert!(text.starts_with("ॐ विष्णुर्विष्णुर्विष्णुः\n"));
        assert!(text.ends_with("Iti Sankalpah."));
    }

    #[test]
    fn calendar_lines_present() {
        let text = generate_sankalpa(&spring_input());
        assert!(text.contains("Uttarāyane, Vasanta ṛtau,"));
        assert!(text.contains("Chaitra māse,"));
        assert!(text.contains("Shukla pakṣe,"));
        assert!(text.contains("Shukla Pratipada tithau,"));
        assert!(text.contains("Budha vāsare,"));
        assert!(text.contains("Ashwini nakṣatre,"));
        assert!(text.contains("Vishkambha yoge,"));
        assert!(text.contains("Kimstughna karaṇe,"));
    }

    #[test]
    fn rashi_lines_follow_longitudes() {
        let text = generate_sankalpa(&spring_input());
        // Sun 355° = Meena, Moon 10° = Mesha, Jupiter 45° = Vrishabha.
        assert!(text.contains("Mesha rāśisthite Chandre,"));
        assert!(text.contains("Meena rāśisthite Śrī Sūrye,"));
        assert!(text.contains("Vrishabha rāśisthite Deva-gurau,"));
    }

    #[test]
    fn jupiter_line_omitted_without_longitude() {
        let mut input = spring_input();
        input.jupiter_lon_sidereal = None;
        let text = generate_sankalpa(&input);
        assert!(!text.contains("Deva-gurau"));
        // The rest of the template is intact.
        assert!(text.contains("rāśisthite Śrī Sūrye,"));
        assert!(text.contains("Śeṣeshu graheshu"));
    }

    #[test]
    fn declarant_line_is_gendered() {
        let text = generate_sankalpa(&spring_input());
        assert!(text.contains("Aham Kāśyapa Gotrotpannasya Rāhula nāma,"));

        let mut input = spring_input();
        input.gender = Gender::Female;
        input.name = "Sītā".into();
        let text = generate_sankalpa(&input);
        assert!(text.contains("Aham Kāśyapa Gotrotpannāyāḥ Sītā nāma,"));
    }

    #[test]
    fn southern_course_in_monsoon() {
        let mut input = spring_input();
        input.masa = Masa::Shravana;
        input.sun_lon_sidereal = 100.0; // Karka
        let text = generate_sankalpa(&input);
        assert!(text.contains("Dakṣiṇāyane, Varṣā ṛtau,"));
    }

    #[test]
    fn offering_closes_with_danda() {
        let text = generate_sankalpa(&spring_input());
        assert!(text.contains("japaṃ kariṣye।"));
    }

    #[test]
    fn devanagari_digit_translation() {
        assert_eq!(to_devanagari_digits("2024"), "२०२४");
        assert_eq!(to_devanagari_digits("12:30 PM"), "१२:३० PM");
        assert_eq!(to_devanagari_digits("no digits"), "no digits");
    }
}
