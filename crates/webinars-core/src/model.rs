//! Domain Models
//!
//! A webinar listing entry and the fixed catalog the listing page shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::parse_date;

/// One listing entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    /// Short unique code (e.g., "WEB001")
    pub id: String,

    /// Display title
    pub title: String,

    /// Speaker display name, including any honorific
    pub speaker: String,

    /// Start time as an RFC 3339 timestamp
    pub date: String,
}

impl Webinar {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        speaker: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            speaker: speaker.into(),
            date: date.into(),
        }
    }

    /// Parse the start time. Offset-less timestamps are read as UTC.
    pub fn starts_at(&self) -> Result<DateTime<Utc>> {
        parse_date(&self.date, &Utc)
    }
}

// (id, title, speaker, date)
const CATALOG: [(&str, &str, &str, &str); 6] = [
    (
        "WEB001",
        "Newborn Sleep Patterns: Creating Healthy Routines from Day One",
        "Dr. Sumitra Meena",
        "2025-06-15T10:00:00Z",
    ),
    (
        "WEB002",
        "Breastfeeding Success: Common Challenges and Solutions",
        "Dr. Priya Sharma",
        "2025-06-18T14:30:00Z",
    ),
    (
        "WEB003",
        "Baby's First Foods: Introduction to Solid Foods and Nutrition",
        "Nutritionist Rajesh Kumar",
        "2025-06-22T11:00:00Z",
    ),
    (
        "WEB004",
        "Managing Postpartum Depression: Support for New Mothers",
        "Dr. Anjali Gupta",
        "2025-06-25T16:00:00Z",
    ),
    (
        "WEB005",
        "Child Development Milestones: What to Expect in the First Year",
        "Dr. Vikram Singh",
        "2025-06-28T10:30:00Z",
    ),
    (
        "WEB006",
        "Creating a Safe Home Environment for Your Baby",
        "Safety Expert Maya Patel",
        "2025-07-02T15:00:00Z",
    ),
];

/// Materialize the fixed catalog
pub fn catalog() -> Vec<Webinar> {
    CATALOG
        .iter()
        .map(|&(id, title, speaker, date)| Webinar::new(id, title, speaker, date))
        .collect()
}
