use std::sync::LazyLock;

use super::{LifeError, Result};

/// A named rectangular 0/1 template used to seed the grid.
/// Cells are stored row-major; every row has the same width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    name: String,
    description: String,
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Stamp {
    /// Build a stamp from fixed-size rows. Row widths are equal by construction.
    fn fixed<const W: usize, const H: usize>(
        name: &str,
        description: &str,
        rows: &[[u8; W]; H],
    ) -> Self {
        const { assert!(W > 0 && H > 0, "stamps need at least one cell") };
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            width: W,
            height: H,
            cells: rows.iter().flatten().map(|&v| v == 1).collect(),
        }
    }

    /// Build a stamp from caller-supplied rows of 0/1 values.
    pub fn from_rows(name: impl Into<String>, rows: &[Vec<u8>]) -> Result<Self> {
        let name = name.into();
        let malformed = |reason: String| LifeError::MalformedStamp {
            name: name.clone(),
            reason,
        };

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(malformed("needs at least one row and one column".into()));
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(malformed(format!(
                "row {idx} has width {} but row 0 has width {width}",
                row.len()
            )));
        }
        if let Some(value) = rows.iter().flatten().find(|&&v| v > 1) {
            return Err(malformed(format!("cell value {value} is not 0 or 1")));
        }

        Ok(Self {
            description: String::new(),
            width,
            height: rows.len(),
            cells: rows.iter().flatten().map(|&v| v == 1).collect(),
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// True if the template cell at `(row, col)` is set
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of set cells in the template
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// `(row, col)` offsets of every set cell
    pub fn alive_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }
}

/// Registry of named stamps, in display order.
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    stamps: Vec<Stamp>,
}

impl PatternLibrary {
    /// The built-in stamp set
    pub fn standard() -> Self {
        Self {
            stamps: presets::all_patterns(),
        }
    }

    /// Find a stamp by its exact name
    pub fn lookup(&self, name: &str) -> Result<&Stamp> {
        self.stamps
            .iter()
            .find(|stamp| stamp.name == name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(Stamp::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stamp> + '_ {
        self.stamps.iter()
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

static LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::standard);

/// Process-wide read-only registry, built on first use
pub fn library() -> &'static PatternLibrary {
    &LIBRARY
}

/// Look up a built-in stamp by name
pub fn lookup(name: &str) -> Result<&'static Stamp> {
    library().lookup(name)
}

/// Classic Game of Life stamps
pub mod presets {
    use super::Stamp;

    pub const GLIDER: &str = "glider";
    pub const BLINKER: &str = "blinker";
    pub const TOAD: &str = "toad";
    pub const BEACON: &str = "beacon";
    pub const PULSAR: &str = "pulsar";
    pub const SPACESHIP: &str = "spaceship";
    pub const GLIDER_GUN: &str = "glider_gun";
    pub const BLOCK: &str = "block";
    pub const R_PENTOMINO: &str = "r_pentomino";
    pub const ACORN: &str = "acorn";

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Stamp {
        Stamp::fixed(
            GLIDER,
            "Moves diagonally (period 4)",
            &[
                [0, 1, 0],
                [0, 0, 1],
                [1, 1, 1],
            ],
        )
    }

    /// Blinker - period 2 oscillator, stored vertical
    pub fn blinker() -> Stamp {
        Stamp::fixed(BLINKER, "Oscillator (period 2)", &[[1], [1], [1]])
    }

    pub fn toad() -> Stamp {
        Stamp::fixed(
            TOAD,
            "Oscillator (period 2)",
            &[
                [0, 1, 1, 1],
                [1, 1, 1, 0],
            ],
        )
    }

    pub fn beacon() -> Stamp {
        Stamp::fixed(
            BEACON,
            "Oscillator (period 2)",
            &[
                [1, 1, 0, 0],
                [1, 1, 0, 0],
                [0, 0, 1, 1],
                [0, 0, 1, 1],
            ],
        )
    }

    pub fn pulsar() -> Stamp {
        Stamp::fixed(
            PULSAR,
            "Oscillator (period 3)",
            &[
                [0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            ],
        )
    }

    /// Lightweight spaceship, heading east
    pub fn spaceship() -> Stamp {
        Stamp::fixed(
            SPACESHIP,
            "Lightweight spaceship (period 4)",
            &[
                [1, 0, 0, 1, 0],
                [0, 0, 0, 0, 1],
                [1, 0, 0, 0, 1],
                [0, 1, 1, 1, 1],
            ],
        )
    }

    /// Gosper glider gun - emits a glider every 30 generations
    #[rustfmt::skip]
    pub fn glider_gun() -> Stamp {
        Stamp::fixed(
            GLIDER_GUN,
            "Produces gliders (period 30)",
            &[
                [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1],
                [0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1],
                [1,1,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
                [1,1,0,0,0,0,0,0,0,0,1,0,0,0,1,0,1,1,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Stamp {
        Stamp::fixed(BLOCK, "Still life", &[[1, 1], [1, 1]])
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Stamp {
        Stamp::fixed(
            R_PENTOMINO,
            "Methuselah - stabilizes at gen 1103",
            &[
                [0, 1, 1],
                [1, 1, 0],
                [0, 1, 0],
            ],
        )
    }

    /// Acorn - methuselah, stabilizes after 5206 generations
    pub fn acorn() -> Stamp {
        Stamp::fixed(
            ACORN,
            "Methuselah - stabilizes at gen 5206",
            &[
                [0, 1, 0, 0, 0, 0, 0],
                [0, 0, 0, 1, 0, 0, 0],
                [1, 1, 0, 0, 1, 1, 1],
            ],
        )
    }

    /// All built-in stamps in display order
    pub fn all_patterns() -> Vec<Stamp> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            spaceship(),
            glider_gun(),
            block(),
            r_pentomino(),
            acorn(),
        ]
    }
}
