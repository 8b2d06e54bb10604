//! User profile — the four traits the extractor asks the LLM for.

use serde::{Deserialize, Serialize};

use crate::llm_client::strip_json_fences;

/// Structured traits parsed from the trait-extraction response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfile {
    pub interests: String,
    pub skills: String,
    pub personality_traits: String,
    pub career_goals: String,
}

/// A trait arrives either as prose or as a list of short phrases.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraitValue {
    Text(String),
    List(Vec<String>),
}

impl TraitValue {
    fn into_text(self) -> String {
        match self {
            TraitValue::Text(text) => text,
            TraitValue::List(items) => items.join(", "),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    interests: Option<TraitValue>,
    #[serde(default)]
    skills: Option<TraitValue>,
    #[serde(default)]
    personality_traits: Option<TraitValue>,
    #[serde(default)]
    career_goals: Option<TraitValue>,
}

fn text_or_empty(value: Option<TraitValue>) -> String {
    value.map(TraitValue::into_text).unwrap_or_default()
}

impl UserProfile {
    /// Parses the raw extraction response. Missing or null keys become empty strings;
    /// a Markdown code fence around the object is tolerated.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        // Go through a map first: a derived struct would also accept a JSON array.
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(strip_json_fences(raw))?;
        let parsed: RawProfile = serde_json::from_value(serde_json::Value::Object(object))?;
        Ok(Self {
            interests: text_or_empty(parsed.interests),
            skills: text_or_empty(parsed.skills),
            personality_traits: text_or_empty(parsed.personality_traits),
            career_goals: text_or_empty(parsed.career_goals),
        })
    }

    /// The text that gets embedded: all four traits, space-separated, in fixed order.
    pub fn to_text(&self) -> String {
        [
            self.interests.as_str(),
            self.skills.as_str(),
            self.personality_traits.as_str(),
            self.career_goals.as_str(),
        ]
        .join(" ")
    }
}
