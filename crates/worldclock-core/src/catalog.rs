//! Static catalog of well-known cities and their timezones.
//!
//! The table is what the timezone search ranks against. It intentionally
//! covers every inhabited UTC offset, including the fractional ones, so any
//! colleague can be placed by typing a nearby city, a country or a zone
//! abbreviation.

use serde::Serialize;

/// A city with its IANA timezone and search metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityRecord {
    pub city: &'static str,
    pub country: &'static str,
    /// IANA timezone identifier.
    pub timezone: &'static str,
    /// Common abbreviations, most relevant first.
    pub abbreviations: &'static [&'static str],
    /// 1 = major city, 5 = rarely searched.
    pub popularity: u8,
}

const fn city(
    city: &'static str,
    country: &'static str,
    timezone: &'static str,
    abbreviations: &'static [&'static str],
    popularity: u8,
) -> CityRecord {
    CityRecord {
        city,
        country,
        timezone,
        abbreviations,
        popularity,
    }
}

/// Every known city, in display order.
pub static CITIES: &[CityRecord] = &[
    // North America
    city("New York", "United States", "America/New_York", &["EST", "EDT", "ET"], 1),
    city("Los Angeles", "United States", "America/Los_Angeles", &["PST", "PDT", "PT"], 1),
    city("Chicago", "United States", "America/Chicago", &["CST", "CDT", "CT"], 1),
    city("San Francisco", "United States", "America/Los_Angeles", &["PST", "PDT"], 1),
    city("Denver", "United States", "America/Denver", &["MST", "MDT", "MT"], 2),
    city("Seattle", "United States", "America/Los_Angeles", &["PST", "PDT"], 2),
    city("Boston", "United States", "America/New_York", &["EST", "EDT"], 2),
    city("Washington DC", "United States", "America/New_York", &["EST", "EDT"], 2),
    city("Miami", "United States", "America/New_York", &["EST", "EDT"], 2),
    city("Austin", "United States", "America/Chicago", &["CST", "CDT"], 2),
    city("Atlanta", "United States", "America/New_York", &["EST", "EDT"], 3),
    city("Detroit", "United States", "America/Detroit", &["EST", "EDT"], 3),
    city("Dallas", "United States", "America/Chicago", &["CST", "CDT"], 3),
    city("Houston", "United States", "America/Chicago", &["CST", "CDT"], 3),
    city("Phoenix", "United States", "America/Phoenix", &["MST"], 3),
    city("Honolulu", "United States", "Pacific/Honolulu", &["HST"], 3),
    city("Salt Lake City", "United States", "America/Denver", &["MST", "MDT"], 4),
    city("Anchorage", "United States", "America/Anchorage", &["AKST", "AKDT"], 4),
    city("Lincoln", "United States", "America/Chicago", &["CST", "CDT"], 5),
    city("Toronto", "Canada", "America/Toronto", &["EST", "EDT"], 1),
    city("Montreal", "Canada", "America/Toronto", &["EST", "EDT"], 2),
    city("Vancouver", "Canada", "America/Vancouver", &["PST", "PDT"], 2),
    city("Calgary", "Canada", "America/Edmonton", &["MST", "MDT"], 3),
    city("Winnipeg", "Canada", "America/Winnipeg", &["CST", "CDT"], 4),
    city("Halifax", "Canada", "America/Halifax", &["AST", "ADT"], 4),
    city("St. John's", "Canada", "America/St_Johns", &["NST", "NDT"], 5),
    city("Mexico City", "Mexico", "America/Mexico_City", &["CST"], 2),
    city("Havana", "Cuba", "America/Havana", &["CST", "CDT"], 4),
    city("Guatemala City", "Guatemala", "America/Guatemala", &["CST"], 5),
    city("Panama City", "Panama", "America/Panama", &["EST"], 5),
    city("San Juan", "Puerto Rico", "America/Puerto_Rico", &["AST"], 4),
    // South America
    city("Sao Paulo", "Brazil", "America/Sao_Paulo", &["BRT"], 1),
    city("Rio de Janeiro", "Brazil", "America/Sao_Paulo", &["BRT"], 2),
    city("Buenos Aires", "Argentina", "America/Argentina/Buenos_Aires", &["ART"], 2),
    city("Bogota", "Colombia", "America/Bogota", &["COT"], 3),
    city("Lima", "Peru", "America/Lima", &["PET"], 3),
    city("Santiago", "Chile", "America/Santiago", &["CLT", "CLST"], 3),
    city("Caracas", "Venezuela", "America/Caracas", &["VET"], 4),
    city("Montevideo", "Uruguay", "America/Montevideo", &["UYT"], 4),
    // Europe
    city("London", "United Kingdom", "Europe/London", &["GMT", "BST"], 1),
    city("Paris", "France", "Europe/Paris", &["CET", "CEST"], 1),
    city("Berlin", "Germany", "Europe/Berlin", &["CET", "CEST"], 1),
    city("Amsterdam", "Netherlands", "Europe/Amsterdam", &["CET", "CEST"], 2),
    city("Dublin", "Ireland", "Europe/Dublin", &["GMT", "IST"], 2),
    city("Lisbon", "Portugal", "Europe/Lisbon", &["WET", "WEST"], 2),
    city("Madrid", "Spain", "Europe/Madrid", &["CET", "CEST"], 2),
    city("Barcelona", "Spain", "Europe/Madrid", &["CET", "CEST"], 2),
    city("Rome", "Italy", "Europe/Rome", &["CET", "CEST"], 2),
    city("Zurich", "Switzerland", "Europe/Zurich", &["CET", "CEST"], 2),
    city("Istanbul", "Turkey", "Europe/Istanbul", &["TRT"], 2),
    city("Moscow", "Russia", "Europe/Moscow", &["MSK"], 2),
    city("Manchester", "United Kingdom", "Europe/London", &["GMT", "BST"], 3),
    city("Edinburgh", "United Kingdom", "Europe/London", &["GMT", "BST"], 3),
    city("Munich", "Germany", "Europe/Berlin", &["CET", "CEST"], 3),
    city("Brussels", "Belgium", "Europe/Brussels", &["CET", "CEST"], 3),
    city("Milan", "Italy", "Europe/Rome", &["CET", "CEST"], 3),
    city("Vienna", "Austria", "Europe/Vienna", &["CET", "CEST"], 3),
    city("Prague", "Czech Republic", "Europe/Prague", &["CET", "CEST"], 3),
    city("Warsaw", "Poland", "Europe/Warsaw", &["CET", "CEST"], 3),
    city("Budapest", "Hungary", "Europe/Budapest", &["CET", "CEST"], 3),
    city("Copenhagen", "Denmark", "Europe/Copenhagen", &["CET", "CEST"], 3),
    city("Stockholm", "Sweden", "Europe/Stockholm", &["CET", "CEST"], 3),
    city("Oslo", "Norway", "Europe/Oslo", &["CET", "CEST"], 3),
    city("Helsinki", "Finland", "Europe/Helsinki", &["EET", "EEST"], 3),
    city("Athens", "Greece", "Europe/Athens", &["EET", "EEST"], 3),
    city("Bucharest", "Romania", "Europe/Bucharest", &["EET", "EEST"], 3),
    city("Kyiv", "Ukraine", "Europe/Kyiv", &["EET", "EEST"], 3),
    city("Tallinn", "Estonia", "Europe/Tallinn", &["EET", "EEST"], 4),
    city("Riga", "Latvia", "Europe/Riga", &["EET", "EEST"], 4),
    city("Vilnius", "Lithuania", "Europe/Vilnius", &["EET", "EEST"], 4),
    city("Sofia", "Bulgaria", "Europe/Sofia", &["EET", "EEST"], 4),
    city("Reykjavik", "Iceland", "Atlantic/Reykjavik", &["GMT"], 4),
    city("York", "United Kingdom", "Europe/London", &["GMT", "BST"], 5),
    // Africa
    city("Cairo", "Egypt", "Africa/Cairo", &["EET", "EEST"], 2),
    city("Lagos", "Nigeria", "Africa/Lagos", &["WAT"], 2),
    city("Johannesburg", "South Africa", "Africa/Johannesburg", &["SAST"], 2),
    city("Nairobi", "Kenya", "Africa/Nairobi", &["EAT"], 3),
    city("Cape Town", "South Africa", "Africa/Johannesburg", &["SAST"], 3),
    city("Casablanca", "Morocco", "Africa/Casablanca", &["WET"], 4),
    city("Accra", "Ghana", "Africa/Accra", &["GMT"], 4),
    city("Addis Ababa", "Ethiopia", "Africa/Addis_Ababa", &["EAT"], 4),
    city("Kinshasa", "DR Congo", "Africa/Kinshasa", &["WAT"], 5),
    city("Tunis", "Tunisia", "Africa/Tunis", &["CET"], 5),
    // Middle East and Central Asia
    city("Dubai", "United Arab Emirates", "Asia/Dubai", &["GST"], 1),
    city("Tel Aviv", "Israel", "Asia/Jerusalem", &["IST", "IDT"], 2),
    city("Abu Dhabi", "United Arab Emirates", "Asia/Dubai", &["GST"], 3),
    city("Riyadh", "Saudi Arabia", "Asia/Riyadh", &["AST"], 3),
    city("Tehran", "Iran", "Asia/Tehran", &["IRST"], 3),
    city("Karachi", "Pakistan", "Asia/Karachi", &["PKT"], 3),
    city("Doha", "Qatar", "Asia/Qatar", &["AST"], 4),
    city("Kabul", "Afghanistan", "Asia/Kabul", &["AFT"], 5),
    city("Tashkent", "Uzbekistan", "Asia/Tashkent", &["UZT"], 5),
    // South Asia
    city("Mumbai", "India", "Asia/Kolkata", &["IST"], 1),
    city("New Delhi", "India", "Asia/Kolkata", &["IST"], 1),
    city("Bangalore", "India", "Asia/Kolkata", &["IST"], 1),
    city("Kolkata", "India", "Asia/Kolkata", &["IST"], 2),
    city("Chennai", "India", "Asia/Kolkata", &["IST"], 2),
    city("Hyderabad", "India", "Asia/Kolkata", &["IST"], 2),
    city("Dhaka", "Bangladesh", "Asia/Dhaka", &["BST"], 3),
    city("Colombo", "Sri Lanka", "Asia/Colombo", &["SLST"], 4),
    city("Kathmandu", "Nepal", "Asia/Kathmandu", &["NPT"], 4),
    // East and Southeast Asia
    city("Tokyo", "Japan", "Asia/Tokyo", &["JST"], 1),
    city("Singapore", "Singapore", "Asia/Singapore", &["SGT"], 1),
    city("Hong Kong", "Hong Kong", "Asia/Hong_Kong", &["HKT"], 1),
    city("Shanghai", "China", "Asia/Shanghai", &["CST"], 1),
    city("Beijing", "China", "Asia/Shanghai", &["CST"], 1),
    city("Seoul", "South Korea", "Asia/Seoul", &["KST"], 1),
    city("Shenzhen", "China", "Asia/Shanghai", &["CST"], 2),
    city("Taipei", "Taiwan", "Asia/Taipei", &["CST"], 2),
    city("Bangkok", "Thailand", "Asia/Bangkok", &["ICT"], 2),
    city("Jakarta", "Indonesia", "Asia/Jakarta", &["WIB"], 2),
    city("Kuala Lumpur", "Malaysia", "Asia/Kuala_Lumpur", &["MYT"], 2),
    city("Manila", "Philippines", "Asia/Manila", &["PHT", "PST"], 2),
    city("Osaka", "Japan", "Asia/Tokyo", &["JST"], 3),
    city("Ho Chi Minh City", "Vietnam", "Asia/Ho_Chi_Minh", &["ICT"], 3),
    city("Hanoi", "Vietnam", "Asia/Ho_Chi_Minh", &["ICT"], 3),
    city("Yangon", "Myanmar", "Asia/Yangon", &["MMT"], 5),
    city("Ulaanbaatar", "Mongolia", "Asia/Ulaanbaatar", &["ULAT"], 5),
    city("Novosibirsk", "Russia", "Asia/Novosibirsk", &["NOVT"], 5),
    city("Vladivostok", "Russia", "Asia/Vladivostok", &["VLAT"], 5),
    // Oceania
    city("Sydney", "Australia", "Australia/Sydney", &["AEST", "AEDT"], 1),
    city("Melbourne", "Australia", "Australia/Melbourne", &["AEST", "AEDT"], 2),
    city("Auckland", "New Zealand", "Pacific/Auckland", &["NZST", "NZDT"], 2),
    city("Brisbane", "Australia", "Australia/Brisbane", &["AEST"], 3),
    city("Perth", "Australia", "Australia/Perth", &["AWST"], 3),
    city("Wellington", "New Zealand", "Pacific/Auckland", &["NZST", "NZDT"], 3),
    city("Adelaide", "Australia", "Australia/Adelaide", &["ACST", "ACDT"], 4),
    city("Darwin", "Australia", "Australia/Darwin", &["ACST"], 5),
    city("Hobart", "Australia", "Australia/Hobart", &["AEST", "AEDT"], 5),
    city("Chatham Islands", "New Zealand", "Pacific/Chatham", &["CHAST", "CHADT"], 5),
    city("Suva", "Fiji", "Pacific/Fiji", &["FJT"], 5),
    city("Port Moresby", "Papua New Guinea", "Pacific/Port_Moresby", &["PGT"], 5),
    city("Apia", "Samoa", "Pacific/Apia", &["WST"], 5),
    city("Pago Pago", "American Samoa", "Pacific/Pago_Pago", &["SST"], 5),
    city("Kiritimati", "Kiribati", "Pacific/Kiritimati", &["LINT"], 5),
    // Reference
    city("UTC", "Coordinated Universal Time", "UTC", &["UTC", "GMT", "Z"], 3),
];

/// The full catalog.
pub fn all() -> &'static [CityRecord] {
    CITIES
}

/// Case-insensitive lookup by exact city name.
pub fn find_by_city(name: &str) -> Option<&'static CityRecord> {
    CITIES
        .iter()
        .find(|record| record.city.eq_ignore_ascii_case(name.trim()))
}
