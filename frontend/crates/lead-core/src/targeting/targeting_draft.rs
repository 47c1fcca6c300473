//! Editable copy of a profile's targeting criteria.

use crate::Profile;
use crate::models::targeting_list;

/// Working state of the targeting form.
///
/// Company sizes and job levels are toggled as sets. Industries and job
/// titles are edited as comma-separated text in the `*_input` mirrors; the
/// list fields are only re-derived from those mirrors at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingDraft {
    pub target_industries: Vec<String>,
    pub target_company_sizes: Vec<String>,
    pub target_job_titles: Vec<String>,
    pub target_job_levels: Vec<String>,
    pub industries_input: String,
    pub job_titles_input: String,
}

/// The four lists that get written back to the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingSelection {
    pub target_industries: Vec<String>,
    pub target_company_sizes: Vec<String>,
    pub target_job_titles: Vec<String>,
    pub target_job_levels: Vec<String>,
}

impl TargetingDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            target_industries: profile.target_industries.clone(),
            target_company_sizes: profile.target_company_sizes.clone(),
            target_job_titles: profile.target_job_titles.clone(),
            target_job_levels: profile.target_job_levels.clone(),
            industries_input: targeting_list::join(&profile.target_industries),
            job_titles_input: targeting_list::join(&profile.target_job_titles),
        }
    }

    /// Flip membership of a company size. Returns true if it is now selected.
    pub fn toggle_company_size(&mut self, value: &str) -> bool {
        toggle(&mut self.target_company_sizes, value)
    }

    /// Flip membership of a job level. Returns true if it is now selected.
    pub fn toggle_job_level(&mut self, value: &str) -> bool {
        toggle(&mut self.target_job_levels, value)
    }

    pub fn set_industries_input<S: Into<String>>(&mut self, text: S) {
        self.industries_input = text.into();
    }

    pub fn set_job_titles_input<S: Into<String>>(&mut self, text: S) {
        self.job_titles_input = text.into();
    }

    /// Re-split the text mirrors and collect the lists to save.
    pub fn selection(&self) -> TargetingSelection {
        TargetingSelection {
            target_industries: targeting_list::split(&self.industries_input),
            target_company_sizes: self.target_company_sizes.clone(),
            target_job_titles: targeting_list::split(&self.job_titles_input),
            target_job_levels: self.target_job_levels.clone(),
        }
    }
}

impl TargetingSelection {
    /// Overlay the selection onto the fetched profile (or an empty one).
    pub fn merge_into(self, profile: Option<&Profile>) -> Profile {
        let mut merged = profile.cloned().unwrap_or_default();
        merged.target_industries = self.target_industries;
        merged.target_company_sizes = self.target_company_sizes;
        merged.target_job_titles = self.target_job_titles;
        merged.target_job_levels = self.target_job_levels;
        merged
    }
}

fn toggle(values: &mut Vec<String>, value: &str) -> bool {
    if values.iter().any(|v| v == value) {
        values.retain(|v| v != value);
        false
    } else {
        values.push(value.to_string());
        true
    }
}
