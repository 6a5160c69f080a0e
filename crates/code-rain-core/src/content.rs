//! Portfolio content served by the backend, with the fallbacks shown when it
//! cannot be reached.
//!
//! The backend speaks Spanish field names (`nombre`, `fotoPerfil`, ...); the
//! serde attributes map them onto these types. Each section degrades on its
//! own: a failed projects request does not hide the profile.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://portafolio-73wj.onrender.com";

// Shown when a section is present but a field is blank.
pub const DEFAULT_NAME: &str = "Miguel Sierra";
pub const DEFAULT_TITLE: &str = "Desarrollador Junior Python";
pub const DEFAULT_SKILLS_LINE: &str = "Python, Flask, FastAPI, Django, React";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    Profile,
    Contact,
}

impl Section {
    pub fn path(self) -> &'static str {
        match self {
            Section::Projects => "proyectos",
            Section::Profile => "sobre-mi",
            Section::Contact => "contacto",
        }
    }

    pub fn url(self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path())
    }
}

/// One project card. Every field tolerates `null` or a wrong scalar type; the
/// card then shows an empty value instead of failing the whole list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Backend key rendered as text: numeric ids become their decimal form.
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(rename = "nombre", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "descripcion", deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "nombre", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "fotoPerfil", deserialize_with = "lenient_text")]
    pub photo_url: String,
    #[serde(rename = "profesion", deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        non_blank(&self.name).unwrap_or(DEFAULT_NAME)
    }

    pub fn display_title(&self) -> &str {
        non_blank(&self.title).unwrap_or(DEFAULT_TITLE)
    }

    pub fn skills_line(&self) -> String {
        if self.skills.is_empty() {
            DEFAULT_SKILLS_LINE.to_string()
        } else {
            self.skills.join(", ")
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(rename = "telefono", deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_text")]
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            profile: fallback_profile(),
            projects: fallback_projects(),
            contact: fallback_contact(),
        }
    }
}

pub fn fallback_projects() -> Vec<Project> {
    vec![Project {
        id: "1".into(),
        name: "Proyecto Demo".into(),
        description: "Ejemplo de proyecto en GitHub".into(),
        url: "https://github.com/miguel/demo".into(),
    }]
}

pub fn fallback_profile() -> Profile {
    Profile {
        name: DEFAULT_NAME.into(),
        photo_url: "/vite.svg".into(),
        title: DEFAULT_TITLE.into(),
        skills: ["Python", "Flask", "FastAPI", "React"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

pub fn fallback_contact() -> Contact {
    Contact {
        email: "msworkpy@gmail.com".into(),
        phone: "+34 658973241".into(),
        linkedin: "https://www.linkedin.com/in/miguel-sierra-sacie-830324261".into(),
    }
}

/// Parse a projects payload. A well-formed JSON value that is not an array
/// yields an empty list rather than an error; elements that are not project
/// objects are skipped.
pub fn decode_projects(body: &str) -> Result<Vec<Project>, ContentError> {
    let Value::Array(items) = serde_json::from_str::<Value>(body)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if !item.is_object() {
                log::warn!("[content] skipping project {}: not an object", i);
                return None;
            }
            serde_json::from_value(item)
                .map_err(|e| log::warn!("[content] skipping project {}: {}", i, e))
                .ok()
        })
        .collect())
}

/// Parse a profile payload; non-object JSON yields an empty profile.
pub fn decode_profile(body: &str) -> Result<Profile, ContentError> {
    decode_object(body)
}

/// Parse a contact payload; non-object JSON yields an empty contact.
pub fn decode_contact(body: &str) -> Result<Contact, ContentError> {
    decode_object(body)
}

fn decode_object<T>(body: &str) -> Result<T, ContentError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match serde_json::from_str::<Value>(body)? {
        v @ Value::Object(_) => Ok(serde_json::from_value(v)?),
        _ => Ok(T::default()),
    }
}

/// Use the loaded value or fall back, logging why.
pub fn or_fallback<T>(section: Section, loaded: Result<T, ContentError>, fallback: fn() -> T) -> T {
    match loaded {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[content] {} unavailable ({}); using fallback", section.path(), e);
            fallback()
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// `null`, arrays and objects read as an empty string.
fn lenient_text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(de)?).unwrap_or_default())
}

// Non-array values read as empty; non-scalar entries are dropped.
fn lenient_list<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

#[inline]
fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}
