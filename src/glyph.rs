//! Line icons drawn as inline SVG on a 24x24 grid, stroked with
//! `currentColor` so they follow the surrounding text color.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Mail,
    Linkedin,
    Phone,
    MapPin,
    Send,
    Copy,
    Check,
    ChevronDown,
    Menu,
    Close,
    Database,
    Cloud,
}

impl Glyph {
    pub const ALL: [Glyph; 12] = [
        Glyph::Mail,
        Glyph::Linkedin,
        Glyph::Phone,
        Glyph::MapPin,
        Glyph::Send,
        Glyph::Copy,
        Glyph::Check,
        Glyph::ChevronDown,
        Glyph::Menu,
        Glyph::Close,
        Glyph::Database,
        Glyph::Cloud,
    ];

    /// Path data for each stroke of the icon.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Glyph::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Glyph::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Glyph::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Glyph::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Glyph::Copy => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            Glyph::Check => &["M20 6 9 17l-5-5"],
            Glyph::ChevronDown => &["m6 9 6 6 6-6"],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            Glyph::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_draws_something() {
        for glyph in Glyph::ALL {
            assert!(!glyph.paths().is_empty(), "{glyph:?} has no strokes");
            for d in glyph.paths() {
                assert!(
                    d.starts_with('M') || d.starts_with('m'),
                    "{glyph:?} path must start with a move: {d}"
                );
            }
        }
    }

    #[test]
    fn test_glyph_names_in_content() {
        let glyph: Glyph = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(glyph, Glyph::MapPin);
        assert!(serde_json::from_str::<Glyph>("\"extra-database\"").is_err());
    }
}
