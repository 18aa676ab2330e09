use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::config::meta::{
    BACKGROUND, CHART_ID, CREATOR, INTEGER_KEYS, NAME, PREVIEW, SET_ID, SONG, SONG_ARTIST,
    SONG_ARTIST_UNICODE, SONG_TITLE, SONG_TITLE_UNICODE, TEXT_KEYS, TIME, VERSION,
};
use crate::error::{Error, FieldType, FieldTypeFault, Result};

/// Artist and title, with their original-script variants.
///
/// A field that is absent, `null` or not a string on the wire is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongMetadata {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub artist_unicode: Option<String>,
    pub title_unicode: Option<String>,
}

/// Header of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMeta {
    /// Format version (`$ver` on the wire)
    pub version: i64,
    pub creator: String,
    /// Background image file
    pub background: String,
    /// Difficulty display name (`version` on the wire)
    pub name: String,
    /// Preview start in milliseconds
    pub preview: i64,
    pub set_id: i64,
    pub chart_id: i64,
    pub created_at: DateTime<Utc>,
    pub song: SongMetadata,
}

impl ChartMeta {
    /// Validate the normalized metadata bag and build the header.
    ///
    /// Every missing key is reported before any type is looked at.
    pub fn from_args(args: &Map<String, Value>) -> Result<Self> {
        validate(args)?;

        let int = |key: &str| args.get(key).and_then(Value::as_i64).unwrap_or_default();
        let text = |key: &str| {
            args.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let time = int(TIME);
        let created_at = DateTime::from_timestamp(time, 0).ok_or(Error::InvalidTimestamp(time))?;

        let song = args.get(SONG).and_then(Value::as_object);
        let song_text = |key: &str| {
            song.and_then(|s| s.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            version: int(VERSION),
            creator: text(CREATOR),
            background: text(BACKGROUND),
            name: text(NAME),
            preview: int(PREVIEW),
            set_id: int(SET_ID),
            chart_id: int(CHART_ID),
            created_at,
            song: SongMetadata {
                artist: song_text(SONG_ARTIST),
                title: song_text(SONG_TITLE),
                artist_unicode: song_text(SONG_ARTIST_UNICODE),
                title_unicode: song_text(SONG_TITLE_UNICODE),
            },
        })
    }

    /// The normalized metadata bag this header was built from.
    pub fn to_args(&self) -> Map<String, Value> {
        let mut args = Map::new();
        args.insert(VERSION.into(), self.version.into());
        args.insert(CREATOR.into(), self.creator.clone().into());
        args.insert(BACKGROUND.into(), self.background.clone().into());
        args.insert(NAME.into(), self.name.clone().into());
        args.insert(PREVIEW.into(), self.preview.into());
        args.insert(SET_ID.into(), self.set_id.into());
        args.insert(CHART_ID.into(), self.chart_id.into());
        args.insert(TIME.into(), self.created_at.timestamp().into());

        let mut song = Map::new();
        let fields = [
            (SONG_ARTIST, &self.song.artist),
            (SONG_TITLE, &self.song.title),
            (SONG_ARTIST_UNICODE, &self.song.artist_unicode),
            (SONG_TITLE_UNICODE, &self.song.title_unicode),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                song.insert(key.into(), value.clone().into());
            }
        }
        if !song.is_empty() {
            args.insert(SONG.into(), Value::Object(song));
        }
        args
    }
}

fn validate(args: &Map<String, Value>) -> Result<()> {
    let mut missing = Vec::new();
    let mut faults = Vec::new();

    let required = INTEGER_KEYS
        .iter()
        .map(|key| (*key, FieldType::Integer))
        .chain(TEXT_KEYS.iter().map(|key| (*key, FieldType::Text)));

    for (key, expected) in required {
        match args.get(key) {
            None => missing.push(key.to_string()),
            Some(value) if !matches_type(value, expected) => faults.push(FieldTypeFault {
                key: key.to_string(),
                expected,
                actual: json_type_name(value),
            }),
            Some(_) => {}
        }
    }

    if let Some(song) = args.get(SONG).filter(|v| !v.is_object()) {
        faults.push(FieldTypeFault {
            key: SONG.to_string(),
            expected: FieldType::Group,
            actual: json_type_name(song),
        });
    }

    if !missing.is_empty() {
        return Err(Error::MissingField(missing));
    }
    if !faults.is_empty() {
        return Err(Error::FieldTypeMismatch(faults));
    }
    Ok(())
}

fn matches_type(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::Integer => value.as_i64().is_some(),
        FieldType::Text => value.is_string(),
        FieldType::Group => value.is_object(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "out-of-range integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
