/// Shared domain types used across the application
///
/// This module contains the catalog data model shared between
/// the library (catalog, commands, tui) and the binary (main.rs).

/// A movie genre. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

impl Genre {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// The synthetic "no genre filter" entry. Its empty identifier is what
    /// the derived view checks to decide whether filtering applies.
    pub fn all_genres() -> Self {
        Self {
            id: String::new(),
            name: "All Genres".to_string(),
        }
    }

    /// True for the synthetic "All Genres" entry (empty identifier).
    pub fn is_all(&self) -> bool {
        self.id.is_empty()
    }
}

/// A movie in the catalog. The genre is embedded by value; matching
/// against a genre filter compares identifiers, not names.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    pub rating: f64,
    pub liked: bool,
    pub daily_rental_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Title,
    Genre,
    Rating,
    Rate,
}

impl SortField {
    pub fn name(&self) -> &str {
        match self {
            Self::Title => "Title",
            Self::Genre => "Genre",
            Self::Rating => "Rating",
            Self::Rate => "Rate",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Title, Self::Genre, Self::Rating, Self::Rate]
    }

    /// Get the next field in the cycle (Title → Genre → Rating → Rate → Title)
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Rating,
            Self::Rating => Self::Rate,
            Self::Rate => Self::Title,
        }
    }

    /// Get the previous field in the cycle (Title → Rate → Rating → Genre → Title)
    pub fn prev(&self) -> Self {
        match self {
            Self::Title => Self::Rate,
            Self::Genre => Self::Title,
            Self::Rating => Self::Genre,
            Self::Rate => Self::Rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn name(&self) -> &str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The (field, direction) pair governing ordering. Exactly one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Sort spec after selecting `field`: re-selecting the active field
    /// flips the direction, selecting a different field starts ascending.
    /// This is the header-click rule of the original table.
    pub fn selected(&self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                order: self.order.toggled(),
            }
        } else {
            Self {
                field,
                order: SortOrder::Asc,
            }
        }
    }

    /// Sort spec after moving to the next field in the cycle, ascending.
    pub fn cycled(&self) -> Self {
        Self {
            field: self.field.next(),
            order: SortOrder::Asc,
        }
    }

    /// Sort spec with the direction flipped, same field.
    pub fn toggled(&self) -> Self {
        Self {
            field: self.field,
            order: self.order.toggled(),
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Title,
            order: SortOrder::Asc,
        }
    }
}
