use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::score::GameResult;

const SEPARATOR: &str = " | ";

/// One line of training output: `<fen> | <cp> | <result>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub fen: String,
    pub cp: i32,
    pub result: GameResult,
}

impl Sample {
    pub fn from_cp(fen: impl Into<String>, cp: i32) -> Self {
        Self {
            fen: fen.into(),
            cp,
            result: GameResult::from_cp(cp),
        }
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self)
    }

    /// Reads every well-formed sample line, skipping the rest.
    pub fn read_all<R: BufRead>(reader: R) -> io::Result<Vec<Self>> {
        let mut samples = Vec::new();

        for line in reader.lines() {
            let line = line?;
            match line.trim_end().parse::<Sample>() {
                Ok(sample) => samples.push(sample),
                Err(e) => log::debug!("Skipping sample line: {}", e),
            }
        }

        Ok(samples)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.fen, self.cp, self.result
        )
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // FENs never contain '|', so split from the right
        let mut parts = line.rsplitn(3, SEPARATOR);
        let result = parts.next().ok_or("Missing result")?;
        let cp = parts.next().ok_or("Missing score")?;
        let fen = parts.next().ok_or("Missing FEN")?;

        let cp = cp
            .parse::<i32>()
            .map_err(|e| format!("Invalid score {:?}: {}", cp, e))?;
        let result = result.parse::<GameResult>()?;

        Ok(Self {
            fen: fen.to_string(),
            cp,
            result,
        })
    }
}
