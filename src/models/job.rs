use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of listing types. The original free-text values (全职, 兼职,
/// 实习, 校招, 社招) map one-to-one onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    CampusRecruit,
    SocialRecruit,
}

/// A published job listing. Immutable once created; there is no edit or
/// delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_range: String,
    pub description: String,
    pub requirements: String,
    pub contact_info: String,
    pub deadline: NaiveDate,
    pub is_alumni_enterprise: bool,
    pub posted_date: DateTime<Utc>,
    /// Unenforced foreign key to `User.id`.
    pub poster_id: String,
}

impl JobListing {
    /// A listing is expired when its deadline is strictly before the given
    /// date. A deadline equal to `today` is still active.
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        self.deadline < today
    }
}
