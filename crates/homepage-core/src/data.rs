//! Shapes of the static JSON documents under `src/jsons/`.
//!
//! Every struct defaults missing fields so that a partially filled document
//! still renders. Display fields also accept numbers, booleans and `null`
//! in place of strings; any other type mismatch or invalid JSON is a decode
//! error.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text shown on the page: a string, or a scalar rendered as text.
fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected text or a number, found {}",
            other
        ))),
    }
}

fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(None),
        value => text(value).map(Some).map_err(D::Error::custom),
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "text")]
    pub color: String,
    #[serde(deserialize_with = "text")]
    pub text: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub university: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub birthday: String,
    #[serde(deserialize_with = "text")]
    pub introduction: String,
    pub images: ProfileImages,
    pub contact: Contact,
    pub education: Education,
    pub research_areas: Vec<ResearchArea>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileImages {
    #[serde(deserialize_with = "text")]
    pub university_logo: String,
    #[serde(deserialize_with = "text")]
    pub profile_zjz: String,
    #[serde(deserialize_with = "text")]
    pub profile: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "text")]
    pub degree: String,
    #[serde(deserialize_with = "text")]
    pub university: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResearchArea {
    #[serde(deserialize_with = "text")]
    pub tag: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "text")]
    pub title: String,
    pub introduction: TeamIntroduction,
    pub carousel: TeamCarousel,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamIntroduction {
    #[serde(deserialize_with = "text")]
    pub subtitle: String,
    #[serde(deserialize_with = "text")]
    pub content: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamCarousel {
    pub photos: Vec<Photo>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "text")]
    pub src: String,
    #[serde(deserialize_with = "text")]
    pub alt: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub position: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "opt_text")]
    pub avatar: Option<String>,
    pub social: Social,
}

impl Member {
    /// Avatar URL if one is set and non-empty.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|s| !s.is_empty())
    }

    /// Uppercased first character of the name, used as a fallback avatar.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

#[inline]
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Social {
    #[serde(deserialize_with = "text")]
    pub linkedin: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Paper {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub authors: String,
    #[serde(deserialize_with = "text")]
    pub journal: String,
    /// Authored HTML fragment.
    #[serde(rename = "abstract")]
    #[serde(deserialize_with = "text")]
    pub abstract_html: String,
    #[serde(deserialize_with = "text")]
    pub link: String,
    #[serde(deserialize_with = "text")]
    pub image: String,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "opt_text")]
    pub subtitle: Option<String>,
    #[serde(rename = "grantNumber")]
    #[serde(deserialize_with = "opt_text")]
    pub grant_number: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "text")]
    pub funding: String,
    #[serde(deserialize_with = "text")]
    pub role: String,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct IprRecord {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub authors: String,
    #[serde(deserialize_with = "text")]
    pub date: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    pub tags: Vec<Tag>,
}
