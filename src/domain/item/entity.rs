use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A piece of streamable content in the catalog.
/// Items are immutable once built; stores hand out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog identifier (e.g. "stream-1")
    pub id: String,

    pub title: String,

    pub genre: Genre,

    /// Running time in minutes
    pub duration_min: u32,

    /// Playback location
    pub url: String,
}

/// Fixed set of catalog genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Musical,
    Documentary,
    Animation,
}

/// What the playback service needs to know about something it plays.
pub trait Playable {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn url(&self) -> &str;
    fn duration_min(&self) -> u32;
    fn genre(&self) -> Genre;
}

impl Item {
    /// Create a new Item
    /// Field contents are checked by `validate_item` (and again by the store)
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: Genre,
        url: impl Into<String>,
        duration_min: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre,
            duration_min,
            url: url.into(),
        }
    }
}

impl Playable for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn duration_min(&self) -> u32 {
        self.duration_min
    }

    fn genre(&self) -> Genre {
        self.genre
    }
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Musical,
        Genre::Documentary,
        Genre::Animation,
    ];
}

impl FromStr for Genre {
    type Err = DomainError;

    /// Accepts the English names and the catalog's legacy labels
    /// ("Accion", "Terror", ...), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "action" | "accion" | "acción" => Ok(Genre::Action),
            "comedy" | "comedia" => Ok(Genre::Comedy),
            "drama" => Ok(Genre::Drama),
            "horror" | "terror" => Ok(Genre::Horror),
            "musical" => Ok(Genre::Musical),
            "documentary" | "documental" => Ok(Genre::Documentary),
            "animation" | "animacion" | "animación" => Ok(Genre::Animation),
            _ => Err(DomainError::UnknownGenre(s.to_string())),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Action => write!(f, "Action"),
            Genre::Comedy => write!(f, "Comedy"),
            Genre::Drama => write!(f, "Drama"),
            Genre::Horror => write!(f, "Horror"),
            Genre::Musical => write!(f, "Musical"),
            Genre::Documentary => write!(f, "Documentary"),
            Genre::Animation => write!(f, "Animation"),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} ({}, {} min)",
            self.id, self.title, self.genre, self.duration_min
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_accepts_english_and_legacy_labels() {
        assert_eq!("Action".parse::<Genre>().unwrap(), Genre::Action);
        assert_eq!("Accion".parse::<Genre>().unwrap(), Genre::Action);
        assert_eq!("terror".parse::<Genre>().unwrap(), Genre::Horror);
        assert_eq!(" Documental ".parse::<Genre>().unwrap(), Genre::Documentary);
    }

    #[test]
    fn test_genre_outside_fixed_set_fails() {
        let result = "Fantasy".parse::<Genre>();
        assert_eq!(result, Err(DomainError::UnknownGenre("Fantasy".to_string())));
    }

    #[test]
    fn test_accepted_genre_labels_are_exactly_these() {
        let accepted = [
            ("action", Genre::Action),
            ("accion", Genre::Action),
            ("acción", Genre::Action),
            ("comedy", Genre::Comedy),
            ("comedia", Genre::Comedy),
            ("drama", Genre::Drama),
            ("horror", Genre::Horror),
            ("terror", Genre::Horror),
            ("musical", Genre::Musical),
            ("documentary", Genre::Documentary),
            ("documental", Genre::Documentary),
            ("animation", Genre::Animation),
            ("animacion", Genre::Animation),
            ("animación", Genre::Animation),
        ];
        for (label, genre) in accepted {
            assert_eq!(label.parse::<Genre>(), Ok(genre), "{label}");
            assert_eq!(label.to_uppercase().parse::<Genre>(), Ok(genre), "{label}");
        }

        for label in ["Fantasy", "Sci-Fi", "Thriller", "Romance", "Act", "Dramas", "", "  "] {
            assert!(label.parse::<Genre>().is_err(), "{label:?} should be rejected");
        }
    }

    #[test]
    fn test_every_genre_parses_from_its_display_name() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_item_is_playable() {
        let item = Item::new(
            "stream-1",
            "Inception",
            Genre::Action,
            "http://stream.com/inception",
            148,
        );
        let playable: &dyn Playable = &item;
        assert_eq!(playable.id(), "stream-1");
        assert_eq!(playable.genre(), Genre::Action);
        assert_eq!(playable.duration_min(), 148);
    }
}
