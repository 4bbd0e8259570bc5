/*
 * Copyright (c) 2023-2026. Trevor Campbell and others.
 *
 * This file is part of Coord Info.
 *
 * Coord Info is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Coord Info is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Coord Info; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

//! Display strings for the two supported viewer locales. The whole
//! table is immutable; callers pick a locale explicitly at each use.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnCa,
    FrCa,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnCa => "en-CA",
            Locale::FrCa => "fr-CA",
        }
    }

    /// Maps a viewer language code onto a supported locale, falling
    /// back to English for anything unrecognised.
    pub fn from_code(code: &str) -> Locale {
        match code {
            "fr-CA" => Locale::FrCa,
            _ => Locale::EnCa,
        }
    }
}

pub struct Translations {
    pub coord_button_label: &'static str,
    pub title: &'static str,
    pub coord_section: &'static str,
    pub coord_lat: &'static str,
    pub coord_long: &'static str,
    pub coord_decimal: &'static str,
    pub coord_dms: &'static str,
    pub utm_section: &'static str,
    pub utm_zone: &'static str,
    pub utm_east: &'static str,
    pub utm_north: &'static str,
    pub nts_section: &'static str,
    pub alti_section: &'static str,
    pub mag_section: &'static str,
    pub mag_date: &'static str,
    pub mag_decli: &'static str,
    pub mag_change: &'static str,
    pub mag_decli_out: &'static str,
    pub mag_compass_out: &'static str,
}

pub struct TranslationSet {
    en_ca: Translations,
    fr_ca: Translations,
}

impl TranslationSet {
    pub fn get(&self, locale: Locale) -> &Translations {
        match locale {
            Locale::EnCa => &self.en_ca,
            Locale::FrCa => &self.fr_ca,
        }
    }
}

pub static TRANSLATIONS: TranslationSet = TranslationSet {
    en_ca: Translations {
        coord_button_label: "Coords Info",
        title: "Map location information",
        coord_section: "Geographic Coordinates",
        coord_lat: "Latitude: ",
        coord_long: "Longitude: ",
        coord_decimal: "Degrees Decimal: ",
        coord_dms: "Degrees Minutes Seconds (DMS): ",
        utm_section: "UTM Coordinates",
        utm_zone: "Zone: ",
        utm_east: "Easting: ",
        utm_north: "Northing: ",
        nts_section: "NTS Mapsheet",
        alti_section: "Elevation",
        mag_section: "Magnetic declination",
        mag_date: "Date: ",
        mag_decli: "Magnetic declination (DD): ",
        mag_change: "Annual change (minutes/year): ",
        mag_decli_out: "-WARNING- Out of scope.",
        mag_compass_out: "-WARNING- Compass erratic for this coordinate.",
    },
    fr_ca: Translations {
        coord_button_label: "Info coords",
        title: "Information de localisation sur la carte",
        coord_section: "Coordonnées géographiques",
        coord_lat: "Latitude : ",
        coord_long: "Longitude : ",
        coord_decimal: "Degrés décimaux : ",
        coord_dms: "Degrés minutes secondes (DMS) : ",
        utm_section: "Coordonnées UTM",
        utm_zone: "Zone : ",
        utm_east: "Abscisse : ",
        utm_north: "Ordonnée : ",
        nts_section: "Carte du SNRC",
        alti_section: "Élévation",
        mag_section: "Déclinaison magnétique",
        mag_date: "Date : ",
        mag_decli: "Déclinaison magnétique (DD) : ",
        mag_change: "Changement annuel (minutes/année) : ",
        mag_decli_out: "-ATTENTION- Hors de portée.",
        mag_compass_out: "-ATTENTION- Boussole peu fiable pour cette coordonnée.",
    },
};

#[cfg(test)]
mod tests {
    use super::{Locale, TRANSLATIONS};

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::EnCa.code(), "en-CA");
        assert_eq!(Locale::FrCa.code(), "fr-CA");
        assert_eq!(Locale::from_code("fr-CA"), Locale::FrCa);
        assert_eq!(Locale::from_code("en-CA"), Locale::EnCa);
        assert_eq!(Locale::from_code("de-DE"), Locale::EnCa);
    }

    #[test]
    fn test_lookup_by_locale() {
        assert_eq!(TRANSLATIONS.get(Locale::EnCa).coord_button_label, "Coords Info");
        assert_eq!(TRANSLATIONS.get(Locale::FrCa).coord_button_label, "Info coords");
    }

    #[test]
    fn test_tables_fully_populated() {
        for locale in [Locale::EnCa, Locale::FrCa] {
            let text = TRANSLATIONS.get(locale);
            for value in [
                text.coord_button_label,
                text.title,
                text.coord_section,
                text.coord_lat,
                text.coord_long,
                text.coord_decimal,
                text.coord_dms,
                text.utm_section,
                text.utm_zone,
                text.utm_east,
                text.utm_north,
                text.nts_section,
                text.alti_section,
                text.mag_section,
                text.mag_date,
                text.mag_decli,
                text.mag_change,
                text.mag_decli_out,
                text.mag_compass_out,
            ] {
                assert!(!value.is_empty());
            }
        }
    }
}
