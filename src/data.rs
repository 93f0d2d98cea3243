// src/data.rs
use serde::{Serialize, Serializer, ser::SerializeMap};

/// One listing, every field filled (sentinels instead of gaps).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub title: String,
    pub rating: String,
    pub release_date: String,
    pub format_language: Vec<String>,
    pub cast: Vec<CastMember>,
    pub poster: String,
    pub background: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CastMember {
    pub name: String,
    pub role: Option<String>,
    pub image: String,
}

/// What the caller gets, always exactly one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultEnvelope {
    Success(MovieRecord),
    Failure(String),
}

impl ResultEnvelope {
    pub fn failure(msg: impl Into<String>) -> Self {
        ResultEnvelope::Failure(msg.into())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// {"success": true, "movie": {...}} | {"success": false, "error": "..."}
impl Serialize for ResultEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            ResultEnvelope::Success(movie) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("movie", movie)?;
            }
            ResultEnvelope::Failure(error) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
