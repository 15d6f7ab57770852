//! Core domain types: questions, tests, and lectures
//!
//! These are the entities exposed to consumers through
//! [`ContentStore`](crate::store::ContentStore). Snapshots of them are
//! immutable once resolved: readers receive clones or shared views, and no
//! entity is ever patched field-by-field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tag assigned to every question
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Straightforward recall or single-step problems
    Easy,
    /// Multi-step problems at typical exam level
    Medium,
    /// Problems requiring deeper insight or longer derivations
    Hard,
}

/// A single multiple-choice question
///
/// Invariants: `options` has exactly 4 entries and `correct_answer` is an
/// index into it ([0,4)). The normalizer and synthesizer both uphold these;
/// malformed remote data is repaired per-question, never emitted as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the parent test (e.g., "jee-test-1-q3")
    pub id: String,
    /// Question prompt text
    pub question: String,
    /// Exactly four answer options, in display order
    pub options: Vec<String>,
    /// Index of the correct option, in [0,4)
    pub correct_answer: usize,
    /// Worked explanation, if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Subject label (e.g., "Physics")
    pub subject: String,
    /// Difficulty tag
    pub difficulty: Difficulty,
    /// Point value of the question
    pub marks: u32,
    /// Optional illustration reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A practice test: an ordered set of questions plus presentation metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Test {
    /// Identifier, unique across the whole dataset (e.g., "jee-test-2")
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description shown in listings
    pub description: String,
    /// Subject label; either a single discipline or the combined "PCM" tag
    pub subject: String,
    /// Questions in display order, never empty
    pub questions: Vec<Question>,
    /// Allotted duration in minutes
    pub duration: u32,
    /// Total marks for the test
    pub total_marks: u32,
    /// Optional cover image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When this test entry was created
    pub created_at: DateTime<Utc>,
    /// Whether the test is highlighted on the dashboard
    #[serde(default)]
    pub featured: bool,
}

/// A downloadable resource attached to a lecture
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LectureResource {
    /// Resource kind (e.g., "PDF")
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource locator
    pub url: String,
    /// Human-readable size (e.g., "4MB")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// A recorded lecture with its metadata and attached resources
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    /// Identifier, unique across the dataset (e.g., "physics-lecture-2")
    pub id: String,
    /// Display title
    pub title: String,
    /// Instructor name
    pub instructor: String,
    /// Duration as "mm:ss"
    pub duration: String,
    /// Subject label
    pub subject: String,
    /// Topic strings covered by the lecture
    pub topics: Vec<String>,
    /// Short description
    pub description: String,
    /// Optional thumbnail reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Optional video locator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Optional view count string (e.g., "42K")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    /// Optional rating, nominally in 4.0–5.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Optional publication date as "YYYY-MM-DD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Attached resources, empty when none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<LectureResource>,
}
