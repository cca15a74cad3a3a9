//! Input records of the evaluation dump, one JSON object per line.
//!
//! ```json
//! {"fen": "...", "evals": [{"pvs": [{"cp": 31, "line": "e2e4 e7e5"}], "knodes": 1234, "depth": 40}]}
//! ```
//!
//! Only the fields the extractor reads are modelled; anything else is ignored.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::ops::Deref;

use crate::error::RecordError;

/// A `T` that was read from a JSON object. Arrays are rejected, even though
/// the derived struct deserializers would accept them in field order.
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<T>(pub T);

impl<'de, T: DeserializeOwned> Deserialize<'de> for JsonObject<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        T::deserialize(Value::Object(map))
            .map(JsonObject)
            .map_err(de::Error::custom)
    }
}

impl<T> Deref for JsonObject<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvalRecord {
    pub fen: String,
    #[serde(default)]
    pub evals: Option<Vec<JsonObject<EvalEntry>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvalEntry {
    #[serde(default)]
    pub pvs: Option<Vec<JsonObject<PvLine>>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PvLine {
    pub cp: Option<i32>,
    pub mate: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Anything other than `w` counts as black.
    pub fn from_token(token: &str) -> Self {
        if token == "w" {
            Side::White
        } else {
            Side::Black
        }
    }
}

impl EvalRecord {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let JsonObject(record) = serde_json::from_str::<JsonObject<Self>>(line)?;
        Ok(record)
    }

    /// Side to move, taken from the second field of the FEN.
    pub fn side_to_move(&self) -> Result<Side, RecordError> {
        self.fen
            .split_whitespace()
            .nth(1)
            .map(Side::from_token)
            .ok_or_else(|| RecordError::MissingSideToMove(self.fen.clone()))
    }

    /// First principal variation of the first evaluation.
    pub fn top_pv(&self) -> Result<&PvLine, RecordError> {
        let entry = self
            .evals
            .as_deref()
            .and_then(|evals| evals.first())
            .ok_or(RecordError::NoEvaluations)?;

        entry
            .pvs
            .as_deref()
            .and_then(|pvs| pvs.first())
            .map(|pv| &pv.0)
            .ok_or(RecordError::NoPrincipalVariation)
    }
}
