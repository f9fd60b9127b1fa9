use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_quarter, validate_url, validate_year,
    Validate,
};
use serde::{Deserialize, Serialize};

/// A counselor profile as published on the practice site.
///
/// Loaded from `counselor.json` and immutable after load. The
/// `long_description` field is a trusted HTML fragment and is passed
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counselor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub titles: Vec<String>,
    pub short_description: String,
    pub long_description: String,
    pub email: String,
    pub phone: String,
    pub credentials: Vec<String>,
    pub insurance: Vec<String>,
    pub memberships: Vec<String>,
    pub appointment_link: String,
    pub directory_id: String,
    pub practitioner_id: String,
}

impl Validate for Counselor {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("id", &self.id)?;
        validate_non_empty_string("firstName", &self.first_name)?;
        validate_non_empty_string("lastName", &self.last_name)?;
        validate_email("email", &self.email)?;
        // Some profiles have no online booking; an empty link is allowed.
        if !self.appointment_link.is_empty() {
            validate_url("appointmentLink", &self.appointment_link)?;
        }
        Ok(())
    }
}

/// A quarterly newsletter entry from the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub title: String,
    /// Quarter within the year, "1" through "4".
    pub quarter: String,
    /// Four-digit year, kept as a string to match the source files.
    pub year: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for Newsletter {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("id", &self.id)?;
        validate_non_empty_string("title", &self.title)?;
        validate_year("year", &self.year)?;
        validate_quarter("quarter", &self.quarter)?;
        Ok(())
    }
}

/// Envelope of `counselor.json`: `{ "counselorList": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounselorData {
    #[serde(rename = "counselorList")]
    pub counselor_list: Vec<Counselor>,
}

/// Envelope of `newsletter.json`: `{ "newsletterList": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterData {
    #[serde(rename = "newsletterList")]
    pub newsletter_list: Vec<Newsletter>,
}
