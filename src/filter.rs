use crate::models::job::{JobListing, JobType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineFilter {
    Active,
    Expired,
}

/// Optional constraints over the listing collection. An absent field means
/// no constraint on that dimension; present constraints AND together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    pub deadline: Option<DeadlineFilter>,
    pub is_alumni_enterprise: Option<bool>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.job_type.is_none()
            && self.location.is_none()
            && self.deadline.is_none()
            && self.is_alumni_enterprise.is_none()
    }
}

/// Tests one listing against every present constraint. Expiry is computed
/// against the supplied date so the predicate stays deterministic.
pub fn matches(job: &JobListing, filter: &JobFilter, today: NaiveDate) -> bool {
    if let Some(job_type) = filter.job_type {
        if job.job_type != job_type {
            return false;
        }
    }
    if let Some(location) = &filter.location {
        if job.location != *location {
            return false;
        }
    }
    if let Some(deadline) = filter.deadline {
        let expired = job.is_expired_at(today);
        match deadline {
            DeadlineFilter::Active if expired => return false,
            DeadlineFilter::Expired if !expired => return false,
            _ => {}
        }
    }
    if let Some(is_alumni) = filter.is_alumni_enterprise {
        if job.is_alumni_enterprise != is_alumni {
            return false;
        }
    }
    true
}

/// Reduces the listing sequence to the members satisfying `filter`,
/// preserving insertion order.
pub fn apply(jobs: &[JobListing], filter: &JobFilter, today: NaiveDate) -> Vec<JobListing> {
    jobs.iter()
        .filter(|job| matches(job, filter, today))
        .cloned()
        .collect()
}
