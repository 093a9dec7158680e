//! Airport code lookups: IATA code to IANA timezone and street address.
//!
//! The table is immutable once built. Processes construct one at
//! startup, optionally merging overrides from a JSON file, and share it
//! from their state; nothing mutates it afterwards.

use std::collections::HashMap;

use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use serde::Deserialize;

/// Built-in (timezone, address) entries for major airports. Extend at
/// runtime through [`AirportTable::with_overrides`], not by editing
/// this list.
const BUILTIN: &[(&str, &str, &str)] = &[
    // US
    ("JFK", "America/New_York", "John F. Kennedy International Airport, New York, NY"),
    ("LGA", "America/New_York", "LaGuardia Airport, New York, NY"),
    ("EWR", "America/New_York", "Newark Liberty International Airport, Newark, NJ"),
    ("BOS", "America/New_York", "Boston Logan International Airport, Boston, MA"),
    ("ATL", "America/New_York", "Hartsfield-Jackson Atlanta International Airport, Atlanta, GA"),
    ("MIA", "America/New_York", "Miami International Airport, Miami, FL"),
    ("MCO", "America/New_York", "Orlando International Airport, Orlando, FL"),
    ("ORD", "America/Chicago", "O'Hare International Airport, Chicago, IL"),
    ("MDW", "America/Chicago", "Midway International Airport, Chicago, IL"),
    ("DFW", "America/Chicago", "Dallas/Fort Worth International Airport, TX"),
    ("IAH", "America/Chicago", "George Bush Intercontinental Airport, Houston, TX"),
    ("DEN", "America/Denver", "Denver International Airport, Denver, CO"),
    ("PHX", "America/Phoenix", "Phoenix Sky Harbor International Airport, Phoenix, AZ"),
    ("LAX", "America/Los_Angeles", "Los Angeles International Airport, CA"),
    ("SFO", "America/Los_Angeles", "San Francisco International Airport, CA"),
    ("SEA", "America/Los_Angeles", "Seattle-Tacoma International Airport, Seattle, WA"),
    ("LAS", "America/Los_Angeles", "Harry Reid International Airport, Las Vegas, NV"),
    // Europe
    ("LHR", "Europe/London", "Heathrow Airport, London, United Kingdom"),
    ("LGW", "Europe/London", "Gatwick Airport, London, United Kingdom"),
    ("CDG", "Europe/Paris", "Charles de Gaulle Airport, Paris, France"),
    ("AMS", "Europe/Amsterdam", "Amsterdam Airport Schiphol, Netherlands"),
    ("FRA", "Europe/Berlin", "Frankfurt Airport, Frankfurt, Germany"),
    ("MAD", "Europe/Madrid", "Adolfo Suarez Madrid-Barajas Airport, Madrid, Spain"),
    ("FCO", "Europe/Rome", "Leonardo da Vinci-Fiumicino Airport, Rome, Italy"),
    ("DUB", "Europe/Dublin", "Dublin Airport, Dublin, Ireland"),
    // Asia / Middle East
    ("HND", "Asia/Tokyo", "Haneda Airport, Tokyo, Japan"),
    ("NRT", "Asia/Tokyo", "Narita International Airport, Narita, Japan"),
    ("PEK", "Asia/Shanghai", "Beijing Capital International Airport, Beijing, China"),
    ("PVG", "Asia/Shanghai", "Shanghai Pudong International Airport, Shanghai, China"),
    ("HKG", "Asia/Hong_Kong", "Hong Kong International Airport, Hong Kong"),
    ("SIN", "Asia/Singapore", "Singapore Changi Airport, Singapore"),
    ("ICN", "Asia/Seoul", "Incheon International Airport, Incheon, South Korea"),
    ("BKK", "Asia/Bangkok", "Suvarnabhumi Airport, Bangkok, Thailand"),
    ("DEL", "Asia/Kolkata", "Indira Gandhi International Airport, New Delhi, India"),
    ("DXB", "Asia/Dubai", "Dubai International Airport, Dubai, United Arab Emirates"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct AirportEntry {
    pub timezone: String,
    pub address: String,
}

/// Immutable IATA-code lookup table.
#[derive(Debug, Clone)]
pub struct AirportTable {
    entries: HashMap<String, (Tz, String)>,
}

impl AirportTable {
    /// Table containing only the built-in entries.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(code, tz, address)| {
                let tz: Tz = tz.parse().expect("built-in timezone is valid");
                ((*code).to_string(), (tz, (*address).to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Merges override entries (for example from a JSON config file) on
    /// top of the built-ins. Overrides win on conflicting codes.
    pub fn with_overrides(mut self, overrides: HashMap<String, AirportEntry>) -> Result<Self> {
        for (code, entry) in overrides {
            let tz: Tz = entry
                .timezone
                .parse()
                .map_err(|e| eyre::eyre!("invalid timezone for airport {code}: {e}"))?;
            self.entries
                .insert(code.to_uppercase(), (tz, entry.address));
        }
        Ok(self)
    }

    /// Merges overrides from a JSON file of `{code: {timezone, address}}`.
    pub fn with_overrides_file(self, path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading airport table from {path}"))?;
        let overrides: HashMap<String, AirportEntry> =
            serde_json::from_str(&raw).wrap_err("parsing airport table JSON")?;
        self.with_overrides(overrides)
    }

    /// IANA timezone for an airport code, `None` for unknown codes.
    /// Callers pick their own fallback and should log the miss.
    pub fn timezone(&self, code: &str) -> Option<Tz> {
        self.entries.get(&code.to_uppercase()).map(|(tz, _)| *tz)
    }

    /// Street address for an airport code. Total: unknown codes fall
    /// back to `"<CODE> Airport"`, which routing providers geocode well
    /// enough in practice. Callers should log the miss.
    pub fn address(&self, code: &str) -> String {
        let code = code.to_uppercase();
        match self.entries.get(&code) {
            Some((_, address)) => address.clone(),
            None => format!("{code} Airport"),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn builtin_codes_resolve_case_insensitively() {
        let table = AirportTable::builtin();
        assert_eq!(table.timezone("ord"), Some(chrono_tz::America::Chicago));
        assert_eq!(
            table.address("jfk"),
            "John F. Kennedy International Airport, New York, NY"
        );
    }

    #[test]
    fn unknown_code_gets_generic_address_and_no_timezone() {
        let table = AirportTable::builtin();
        assert_eq!(table.timezone("XXX"), None);
        assert_eq!(table.address("xxx"), "XXX Airport");
    }

    #[test]
    fn overrides_extend_and_replace_builtins() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "YYZ".to_string(),
            AirportEntry {
                timezone: "America/Toronto".to_string(),
                address: "Toronto Pearson International Airport, Mississauga, ON".to_string(),
            },
        );
        overrides.insert(
            "ORD".to_string(),
            AirportEntry {
                timezone: "America/Chicago".to_string(),
                address: "10000 W Balmoral Ave, Chicago, IL".to_string(),
            },
        );

        let table = AirportTable::builtin().with_overrides(overrides).unwrap();
        assert_eq!(table.timezone("YYZ"), Some(chrono_tz::America::Toronto));
        assert_eq!(table.address("ORD"), "10000 W Balmoral Ave, Chicago, IL");
    }

    #[test]
    fn invalid_override_timezone_is_rejected() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "ZZZ".to_string(),
            AirportEntry {
                timezone: "Not/A_Zone".to_string(),
                address: "Nowhere".to_string(),
            },
        );
        assert!(AirportTable::builtin().with_overrides(overrides).is_err());
    }
}
