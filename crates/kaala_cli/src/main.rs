use clap::{Parser, Subcommand};
use kaala_time::{UtcTime, calendar_to_jd};
use kaala_vedic::{
    ALL_MASAS, ALL_NAKSHATRAS, ALL_TITHIS, ALL_VAARS, ALL_YOGAS, Gender, Masa, Nakshatra, Paksha,
    RASHI_SPAN_DEG, SankalpaInput, Tithi, Vaar, Yoga, nakshatra_from_longitude,
    rashi_from_longitude,
};

#[derive(Parser)]
#[command(name = "kaala", about = "Kaala panchang CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Ayana from the Sun's sidereal longitude
    AyanaFromLon {
        /// Sidereal longitude in degrees
        #[arg(long)]
        lon: f64,
    },

    // -------------------------------------------------------------------
    // Panchang Element Primitives (pure math)
    // -------------------------------------------------------------------
    /// Determine Tithi from Moon-Sun elongation (degrees)
    TithiFromElongation {
        /// Elongation (Moon_lon - Sun_lon) mod 360 in degrees
        #[arg(long)]
        elongation: f64,
    },
    /// Determine Karana from Moon-Sun elongation (degrees)
    KaranaFromElongation {
        #[arg(long)]
        elongation: f64,
    },
    /// Determine the Karana occupying a half-tithi slot
    KaranaForHalf {
        /// Half-tithi index (0-59)
        #[arg(long)]
        half: u8,
    },
    /// Determine Yoga from sidereal sum (Sun + Moon) degrees
    YogaFromSum {
        /// Sidereal sum (Sun_sid + Moon_sid) mod 360
        #[arg(long)]
        sum: f64,
    },
    /// Elongation and sidereal sum from a pair of longitudes
    Elongation {
        /// Sun's sidereal longitude in degrees
        #[arg(long)]
        sun_lon: f64,
        /// Moon's sidereal longitude in degrees
        #[arg(long)]
        moon_lon: f64,
    },
    /// Determine Vaar (weekday) from Julian Date
    VaarFromJd {
        /// Julian Date
        #[arg(long)]
        jd: f64,
    },
    /// Determine Vaar (weekday) for a calendar date
    Vaar {
        /// Civil date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Determine the Ritu (season) for a masa
    Ritu {
        /// Masa index (0=Chaitra .. 11=Phalguna)
        #[arg(long)]
        masa: u8,
    },
    /// Normalize angle to [0, 360)
    Normalize360 {
        /// Angle in degrees
        #[arg(long)]
        deg: f64,
    },

    // -------------------------------------------------------------------
    // Muhurta and Observances
    // -------------------------------------------------------------------
    /// Rahu Kaal window from sunrise and sunset times
    RahuKaal {
        /// Civil date (YYYY-MM-DD), fixes the weekday
        #[arg(long)]
        date: String,
        /// Sunrise time of day (hh:mm or hh:mm:ss)
        #[arg(long)]
        sunrise: String,
        /// Sunset time of day (hh:mm or hh:mm:ss)
        #[arg(long)]
        sunset: String,
    },
    /// Shiva Vaas (abode of Shiva) for a tithi
    ShivaVaas {
        /// Paksha: shukla or krishna
        #[arg(long)]
        paksha: String,
        /// Tithi number within the paksha (1-15)
        #[arg(long)]
        tithi: u8,
    },

    // -------------------------------------------------------------------
    // Sankalpa
    // -------------------------------------------------------------------
    /// Assemble the IAST sankalpa declaration from calendar elements
    Sankalpa {
        /// Country, for the Kshetre line
        #[arg(long)]
        country: String,
        /// State or region
        #[arg(long)]
        state: String,
        /// City or town
        #[arg(long)]
        city: String,
        /// Masa index (0=Chaitra .. 11=Phalguna)
        #[arg(long)]
        masa: u8,
        /// Paksha: shukla or krishna
        #[arg(long)]
        paksha: String,
        /// Tithi number within the paksha (1-15)
        #[arg(long)]
        tithi: u8,
        /// Vaar index (0=Ravivara .. 6=Shanivara)
        #[arg(long)]
        vaar: u8,
        /// Nakshatra index (0=Ashwini .. 26=Revati)
        #[arg(long)]
        nakshatra: u8,
        /// Yoga index (0=Vishkambha .. 26=Vaidhriti)
        #[arg(long)]
        yoga: u8,
        /// Karana half-tithi index (0-59)
        #[arg(long)]
        karana: u8,
        /// Sun's sidereal longitude in degrees
        #[arg(long)]
        sun_lon: f64,
        /// Moon's sidereal longitude in degrees
        #[arg(long)]
        moon_lon: f64,
        /// Jupiter's sidereal longitude in degrees (omits the Deva-gurau
        /// line when absent)
        #[arg(long)]
        jupiter_lon: Option<f64>,
        /// Declarant's name (IAST)
        #[arg(long)]
        name: String,
        /// Declarant's gotra (IAST)
        #[arg(long)]
        gotra: String,
        /// Declarant's gender: male or female
        #[arg(long)]
        gender: String,
        /// Purpose phrase, already in Sanskrit
        #[arg(long)]
        purpose: String,
        /// Offering phrase, already in Sanskrit
        #[arg(long)]
        offering: String,
    },

    // -------------------------------------------------------------------
    // Time Conversions
    // -------------------------------------------------------------------
    /// Julian Day (UT) from a UTC datetime
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// UTC datetime from a Julian Day (UT)
    Utc {
        /// Julian Date
        jd: f64,
    },
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(UtcTime::new(year, month, day, hour, minute, second))
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    // Parse "YYYY-MM-DD"
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time_of_day(s: &str) -> Result<f64, String> {
    // Parse "hh:mm" or "hh:mm:ss" into decimal hours
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(format!("expected hh:mm or hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = if parts.len() == 3 {
        parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0.0
    };
    Ok(f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0)
}

fn format_hms(hours: f64) -> String {
    let total = (hours * 3600.0).round() as i64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn require_date(s: &str) -> (i32, u32, u32) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_time_of_day(s: &str) -> f64 {
    parse_time_of_day(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_masa(index: u8) -> Masa {
    ALL_MASAS.get(index as usize).copied().unwrap_or_else(|| {
        eprintln!("Invalid masa index: {index} (0-11)");
        std::process::exit(1);
    })
}

fn require_vaar(index: u8) -> Vaar {
    ALL_VAARS.get(index as usize).copied().unwrap_or_else(|| {
        eprintln!("Invalid vaar index: {index} (0-6)");
        std::process::exit(1);
    })
}

fn require_nakshatra(index: u8) -> Nakshatra {
    ALL_NAKSHATRAS.get(index as usize).copied().unwrap_or_else(|| {
        eprintln!("Invalid nakshatra index: {index} (0-26)");
        std::process::exit(1);
    })
}

fn require_yoga(index: u8) -> Yoga {
    ALL_YOGAS.get(index as usize).copied().unwrap_or_else(|| {
        eprintln!("Invalid yoga index: {index} (0-26)");
        std::process::exit(1);
    })
}

fn require_karana_half(half_index: u8) -> kaala_vedic::Karana {
    if half_index > 59 {
        eprintln!("Invalid half-tithi index: {half_index} (0-59)");
        std::process::exit(1);
    }
    kaala_vedic::karana_for_half_index(half_index)
}

fn require_tithi(paksha: Paksha, number: u8) -> Tithi {
    if number < 1 || number > 15 {
        eprintln!("Invalid tithi number: {number} (1-15)");
        std::process::exit(1);
    }
    let offset = match paksha {
        Paksha::Shukla => number - 1,
        Paksha::Krishna => 14 + number,
    };
    ALL_TITHIS[offset as usize]
}

fn require_paksha(s: &str) -> Paksha {
    match s.to_ascii_lowercase().as_str() {
        "shukla" => Paksha::Shukla,
        "krishna" => Paksha::Krishna,
        _ => {
            eprintln!("Invalid paksha: {s} (shukla or krishna)");
            std::process::exit(1);
        }
    }
}

fn require_gender(s: &str) -> Gender {
    match s.to_ascii_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let rashi = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {:.4}° into rashi",
                rashi.name(),
                rashi.western_name(),
                kaala_vedic::normalize_360(lon) % RASHI_SPAN_DEG
            );
        }

        Commands::Nakshatra { lon } => {
            let pos = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4}° into nakshatra)",
                pos.nakshatra.name(),
                pos.nakshatra_index,
                pos.pada,
                pos.degrees_in_nakshatra
            );
        }

        Commands::AyanaFromLon { lon } => {
            let ayana = kaala_vedic::ayana_for_rashi(rashi_from_longitude(lon));
            println!("{:?} ({})", ayana, ayana.iast_phrase());
        }

        // -----------------------------------------------------------
        // Panchang Element Primitives (pure math)
        // -----------------------------------------------------------
        Commands::TithiFromElongation { elongation } => {
            let pos = kaala_vedic::tithi_from_elongation(elongation);
            println!(
                "{} ({} {}) - {:.4}° into tithi",
                pos.tithi.name(),
                pos.paksha.name(),
                pos.tithi_in_paksha,
                pos.degrees_in_tithi
            );
        }

        Commands::KaranaFromElongation { elongation } => {
            let pos = kaala_vedic::karana_from_elongation(elongation);
            println!(
                "{} (half-index {}) - {:.4}° into karana",
                pos.karana.name(),
                pos.half_index,
                pos.degrees_in_karana
            );
        }

        Commands::KaranaForHalf { half } => {
            let karana = require_karana_half(half);
            let kind = if karana.is_movable() { "movable" } else { "fixed" };
            println!("{} ({kind})", karana.name());
        }

        Commands::YogaFromSum { sum } => {
            let pos = kaala_vedic::yoga_from_sum(sum);
            println!(
                "{} (index {}) - {:.4}° into yoga",
                pos.yoga.name(),
                pos.yoga_index,
                pos.degrees_in_yoga
            );
        }

        Commands::Elongation { sun_lon, moon_lon } => {
            println!(
                "Elongation: {:.4}°",
                kaala_vedic::elongation_deg(sun_lon, moon_lon)
            );
            println!("Sum:        {:.4}°", kaala_vedic::normalize_360(sun_lon + moon_lon));
        }

        Commands::VaarFromJd { jd } => {
            let vaar = kaala_vedic::vaar_from_jd(jd);
            println!("{} ({})", vaar.name(), vaar.english());
        }

        Commands::Vaar { date } => {
            let date = date.unwrap_or_else(today_string);
            let (year, month, day) = require_date(&date);
            let vaar = kaala_vedic::vaar_from_jd(calendar_to_jd(year, month, f64::from(day)));
            println!("{} ({})", vaar.name(), vaar.english());
        }

        Commands::Ritu { masa } => {
            let ritu = kaala_vedic::ritu_for_masa(require_masa(masa));
            println!("{} ({})", ritu.name(), ritu.iast_phrase());
        }

        Commands::Normalize360 { deg } => {
            println!("{:.4}°", kaala_vedic::normalize_360(deg));
        }

        // -----------------------------------------------------------
        // Muhurta and Observances
        // -----------------------------------------------------------
        Commands::RahuKaal {
            date,
            sunrise,
            sunset,
        } => {
            let (year, month, day) = require_date(&date);
            let rise_hours = require_time_of_day(&sunrise);
            let set_hours = require_time_of_day(&sunset);
            let day_start = calendar_to_jd(year, month, f64::from(day));
            let vaar = kaala_vedic::vaar_from_jd(day_start);
            match kaala_vedic::rahu_kaal(
                day_start + rise_hours / 24.0,
                day_start + set_hours / 24.0,
                vaar,
            ) {
                Some(window) => {
                    println!(
                        "{} (segment {})",
                        vaar.name(),
                        kaala_vedic::rahu_segment_for_vaar(vaar)
                    );
                    println!(
                        "Rahu Kaal: {} - {}",
                        format_hms((window.start_jd - day_start) * 24.0),
                        format_hms((window.end_jd - day_start) * 24.0)
                    );
                }
                None => {
                    eprintln!("sunset must be after sunrise");
                    std::process::exit(1);
                }
            }
        }

        Commands::ShivaVaas { paksha, tithi } => {
            let paksha = require_paksha(&paksha);
            match kaala_vedic::shiva_vaas(paksha, tithi) {
                Some(vaas) => {
                    println!("{} ({})", vaas.name(), vaas.devanagari());
                    println!("Phala: {} ({})", vaas.phala(), vaas.phala_devanagari());
                }
                None => {
                    eprintln!("Invalid tithi number: {tithi} (1-15)");
                    std::process::exit(1);
                }
            }
        }

        // -----------------------------------------------------------
        // Sankalpa
        // -----------------------------------------------------------
        Commands::Sankalpa {
            country,
            state,
            city,
            masa,
            paksha,
            tithi,
            vaar,
            nakshatra,
            yoga,
            karana,
            sun_lon,
            moon_lon,
            jupiter_lon,
            name,
            gotra,
            gender,
            purpose,
            offering,
        } => {
            let paksha = require_paksha(&paksha);
            let input = SankalpaInput {
                country,
                state,
                city,
                masa: require_masa(masa),
                paksha,
                tithi: require_tithi(paksha, tithi),
                vaar: require_vaar(vaar),
                nakshatra: require_nakshatra(nakshatra),
                yoga: require_yoga(yoga),
                karana: require_karana_half(karana),
                sun_lon_sidereal: sun_lon,
                moon_lon_sidereal: moon_lon,
                jupiter_lon_sidereal: jupiter_lon,
                name,
                gotra,
                gender: require_gender(&gender),
                purpose,
                offering,
            };
            println!("{}", kaala_vedic::generate_sankalpa(&input));
        }

        // -----------------------------------------------------------
        // Time Conversions
        // -----------------------------------------------------------
        Commands::Jd { date } => {
            let utc = parse_utc(&date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("{:.6}", utc.to_jd_ut());
        }

        Commands::Utc { jd } => {
            println!("{}", UtcTime::from_jd_ut(jd));
        }
    }
}
