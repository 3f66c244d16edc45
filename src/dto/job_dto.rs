use crate::dto::not_blank;
use crate::models::job::JobType;
use crate::utils::time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Posting form data: everything a listing carries except the id and the
/// posted date, which the repository assigns.
///
/// The posting form calls `validate()` before submitting; the repository
/// accepts the payload as-is (a past deadline is rejected here, not there).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub company: String,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    pub job_type: JobType,
    #[validate(custom(function = "not_blank"))]
    pub salary_range: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub requirements: String,
    #[validate(custom(function = "not_blank"))]
    pub contact_info: String,
    #[validate(custom(function = "deadline_not_past"))]
    pub deadline: NaiveDate,
    #[serde(default)]
    pub is_alumni_enterprise: bool,
}

fn deadline_not_past(deadline: &NaiveDate) -> Result<(), ValidationError> {
    if *deadline < time::today() {
        return Err(ValidationError::new("deadline_not_past"));
    }
    Ok(())
}
