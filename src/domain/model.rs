use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub status: String,
    pub github_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// Which path of the counter produced a [`VisitorCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterSource {
    #[serde(rename = "dynamodb")]
    Remote,
    #[serde(rename = "local-mock")]
    LocalMock,
    #[serde(rename = "fallback")]
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorCount {
    pub count: u64,
    pub source: CounterSource,
}

impl VisitorCount {
    pub fn remote(count: u64) -> Self {
        Self {
            count,
            source: CounterSource::Remote,
        }
    }

    pub fn local_mock(count: u64) -> Self {
        Self {
            count,
            source: CounterSource::LocalMock,
        }
    }

    pub fn fallback() -> Self {
        Self {
            count: 1,
            source: CounterSource::Fallback,
        }
    }
}

/// The single persisted counter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub id: String,
    pub count: u64,
    pub last_updated: String,
}

impl CounterRecord {
    pub fn new(id: impl Into<String>, count: u64, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            count,
            last_updated: iso_timestamp(at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
    pub source_ip: Option<String>,
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
