use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const FIRST_NAMES: [&str; 16] = [
    "Luca", "Mateo", "Kai", "Jonas", "Rafael", "Theo", "Youssef", "Bruno", "Emil", "Nico",
    "Sami", "Diego", "Oscar", "Ivan", "Malik", "Hugo",
];
const LAST_NAMES: [&str; 16] = [
    "Silva", "Müller", "Rossi", "García", "Dubois", "Novak", "Okafor", "Jensen", "Costa",
    "Kowalski", "Ibrahim", "Moreau", "Santos", "Berg", "Romano", "Walker",
];
const POSITIONS: [&str; 4] = ["Goalkeeper", "Defender", "Midfielder", "Forward"];
const LEAGUES: [(&str, &str, [&str; 3]); 4] = [
    ("Premier League", "England", ["Arsenal", "Liverpool", "Brighton"]),
    ("La Liga", "Spain", ["Real Betis", "Valencia", "Sevilla"]),
    ("Serie A", "Italy", ["Roma", "Atalanta", "Torino"]),
    ("Bundesliga", "Germany", ["Freiburg", "Mainz", "Leverkusen"]),
];
const NATIONALITIES: [&str; 8] = [
    "England", "Spain", "Italy", "Germany", "France", "Brazil", "Nigeria", "Denmark",
];

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Position")]
    position: &'static str,
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "League")]
    league: &'static str,
    #[serde(rename = "Nationality")]
    nationality: &'static str,
    #[serde(rename = "Club")]
    club: &'static str,
    #[serde(rename = "Goals")]
    goals: i64,
    #[serde(rename = "Assists")]
    assists: i64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64() as usize % items.len()]
    }
}

fn generate_players(rng: &mut SimpleRng, count: usize) -> Vec<Row> {
    (0..count)
        .map(|_| {
            let position = *rng.pick(&POSITIONS);
            let (league, home, clubs) = *rng.pick(&LEAGUES);
            let nationality = if rng.range(0, 1) == 0 {
                home
            } else {
                *rng.pick(&NATIONALITIES)
            };
            let (goal_max, assist_max) = match position {
                "Forward" => (30, 12),
                "Midfielder" => (14, 15),
                "Defender" => (5, 6),
                _ => (0, 1),
            };
            Row {
                name: format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES)),
                position,
                age: rng.range(17, 36),
                league,
                nationality,
                club: *rng.pick(&clubs),
                goals: rng.range(0, goal_max),
                assists: rng.range(0, assist_max),
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let text = |f: fn(&Row) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };
    let int = |f: fn(&Row) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("Name", DataType::Utf8, false),
        Field::new("Position", DataType::Utf8, false),
        Field::new("Age", DataType::Int64, false),
        Field::new("League", DataType::Utf8, false),
        Field::new("Nationality", DataType::Utf8, false),
        Field::new("Club", DataType::Utf8, false),
        Field::new("Goals", DataType::Int64, false),
        Field::new("Assists", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            text(|r| r.name.as_str()),
            text(|r| r.position),
            int(|r| r.age),
            text(|r| r.league),
            text(|r| r.nationality),
            text(|r| r.club),
            int(|r| r.goals),
            int(|r| r.assists),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_players(&mut rng, 240);

    write_csv(&rows, "scout_dataset1.csv")?;
    write_parquet(&rows, "scout_dataset1.parquet")?;

    println!(
        "Wrote {} players to scout_dataset1.csv and scout_dataset1.parquet",
        rows.len()
    );
    Ok(())
}
