use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::filter::{self, JobFilter};
use crate::models::job::JobListing;
use crate::store::{Store, JOBS_KEY};
use crate::utils::time;
use tracing::info;

/// Listing repository over the `jobs` record. Listings are an append-only
/// log: no edit, no delete, insertion order preserved.
#[derive(Clone)]
pub struct JobService {
    store: Store,
}

impl JobService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Appends a listing, assigning its id and posted date. No validation
    /// happens here: the posting form owns the rules (`CreateJobPayload`),
    /// so even a past deadline is accepted at this level.
    pub fn create(&self, payload: CreateJobPayload, poster_id: &str) -> Result<JobListing> {
        let mut jobs = self.load_jobs()?;
        let posted_date = time::now();

        let job = JobListing {
            id: next_listing_id(&jobs, posted_date.timestamp_millis()),
            title: payload.title,
            company: payload.company,
            location: payload.location,
            job_type: payload.job_type,
            salary_range: payload.salary_range,
            description: payload.description,
            requirements: payload.requirements,
            contact_info: payload.contact_info,
            deadline: payload.deadline,
            is_alumni_enterprise: payload.is_alumni_enterprise,
            posted_date,
            poster_id: poster_id.to_string(),
        };

        jobs.push(job.clone());
        self.store.write(JOBS_KEY, &jobs)?;
        info!(id = %job.id, title = %job.title, "created listing");
        Ok(job)
    }

    /// All listings in insertion order, optionally reduced by a filter.
    pub fn list(&self, criteria: Option<&JobFilter>) -> Result<Vec<JobListing>> {
        let jobs = self.load_jobs()?;
        match criteria {
            Some(criteria) => Ok(filter::apply(&jobs, criteria, time::today())),
            None => Ok(jobs),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<JobListing> {
        self.load_jobs()?
            .into_iter()
            .find(|job| job.id == id)
            .ok_or_else(|| Error::NotFound(format!("listing {}", id)))
    }

    /// Deadline strictly before today. A listing whose deadline is today is
    /// still active.
    pub fn is_expired(&self, job: &JobListing) -> bool {
        job.is_expired_at(time::today())
    }

    fn load_jobs(&self) -> Result<Vec<JobListing>> {
        Ok(self.store.read(JOBS_KEY)?.unwrap_or_default())
    }
}

/// Time-derived listing id: the creation timestamp in milliseconds, bumped
/// past any id already taken within the same millisecond.
fn next_listing_id(existing: &[JobListing], timestamp_millis: i64) -> String {
    let mut candidate = timestamp_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|job| job.id == id) {
            return id;
        }
        candidate += 1;
    }
}
