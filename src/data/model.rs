use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Name";
pub const COL_POSITION: &str = "Position";
pub const COL_AGE: &str = "Age";
pub const COL_LEAGUE: &str = "League";
pub const COL_NATIONALITY: &str = "Nationality";
pub const COL_CLUB: &str = "Club";
pub const COL_GOALS: &str = "Goals";
pub const COL_ASSISTS: &str = "Assists";

/// Every column the loader insists on, in the order cells are handed to
/// [`PlayerRecord::from_cells`].
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_NAME,
    COL_POSITION,
    COL_AGE,
    COL_LEAGUE,
    COL_NATIONALITY,
    COL_CLUB,
    COL_GOALS,
    COL_ASSISTS,
];

/// Columns holding non-negative integer counts; the rest are text.
pub const COUNT_COLUMNS: [&str; 3] = [COL_AGE, COL_GOALS, COL_ASSISTS];

pub fn is_count_column(column: &str) -> bool {
    COUNT_COLUMNS.contains(&column)
}

// ---------------------------------------------------------------------------
// CellValue – a single raw cell before typing
// ---------------------------------------------------------------------------

/// A raw cell as it comes out of CSV, JSON or Parquet, before it is coerced
/// into a typed [`PlayerRecord`] field.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "'{s}'"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Coerce into a text field. Nulls become the empty string, which the
    /// rest of the crate treats as a missing value.
    pub fn into_text(self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Null => String::new(),
        }
    }

    /// Coerce into a non-negative integer. Integral floats such as `25.0`
    /// (what pandas writes for an int column with NaNs) are accepted.
    pub fn to_count(&self) -> Option<u32> {
        match self {
            CellValue::Integer(i) => u32::try_from(*i).ok(),
            CellValue::Float(v) => float_to_count(*v),
            CellValue::Text(s) => {
                let s = s.trim();
                if let Ok(i) = s.parse::<i64>() {
                    return u32::try_from(i).ok();
                }
                s.parse::<f64>().ok().and_then(float_to_count)
            }
            CellValue::Null => None,
        }
    }
}

fn float_to_count(v: f64) -> Option<u32> {
    if v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Categorical dimensions
// ---------------------------------------------------------------------------

/// The filterable columns with discrete values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Position,
    League,
    Nationality,
    Club,
}

impl Dimension {
    /// Sidebar order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Position,
        Dimension::League,
        Dimension::Nationality,
        Dimension::Club,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Dimension::Position => COL_POSITION,
            Dimension::League => COL_LEAGUE,
            Dimension::Nationality => COL_NATIONALITY,
            Dimension::Club => COL_CLUB,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single player (one row of the source table). Empty categorical strings
/// mean the value was missing in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub position: String,
    pub age: u32,
    pub league: String,
    pub nationality: String,
    pub club: String,
    pub goals: u32,
    pub assists: u32,
}

impl PlayerRecord {
    /// Build a record from cells ordered as [`REQUIRED_COLUMNS`].
    ///
    /// Returns the offending column and cell when a numeric field cannot be
    /// coerced.
    pub fn from_cells(cells: [CellValue; 8]) -> Result<Self, (&'static str, CellValue)> {
        let [name, position, age, league, nationality, club, goals, assists] = cells;

        let count = |col: &'static str, cell: CellValue| match cell.to_count() {
            Some(v) => Ok(v),
            None => Err((col, cell)),
        };

        Ok(PlayerRecord {
            age: count(COL_AGE, age)?,
            goals: count(COL_GOALS, goals)?,
            assists: count(COL_ASSISTS, assists)?,
            name: name.into_text(),
            position: position.into_text(),
            league: league.into_text(),
            nationality: nationality.into_text(),
            club: club.into_text(),
        })
    }

    /// Value of a categorical column, `None` when missing.
    pub fn category(&self, dim: Dimension) -> Option<&str> {
        let value = match dim {
            Dimension::Position => &self.position,
            Dimension::League => &self.league,
            Dimension::Nationality => &self.nationality,
            Dimension::Club => &self.club,
        };
        (!value.is_empty()).then_some(value.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, immutable table of players. Rows are identified by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    players: Vec<PlayerRecord>,
}

impl Dataset {
    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        Dataset { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn get(&self, row: usize) -> Option<&PlayerRecord> {
        self.players.get(row)
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
