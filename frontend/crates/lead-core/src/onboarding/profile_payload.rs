use crate::OnboardingDraft;

use serde::Serialize;

/// Body of the profile-create POST sent when onboarding completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePayload {
    pub owner_name: String,
    pub job_title: String,
    pub business_name: String,
    pub industry: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub target_customer_type: String,
    pub target_location: String,
    pub services: String,
}

impl From<&OnboardingDraft> for ProfilePayload {
    fn from(draft: &OnboardingDraft) -> Self {
        Self {
            owner_name: draft.owner_name.clone(),
            job_title: draft.job_title.clone(),
            business_name: draft.business_name.clone(),
            industry: draft.industry.clone(),
            website: draft.website.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: draft.address(),
            target_customer_type: draft.target_customer_type.clone(),
            target_location: draft.target_location.clone(),
            services: draft.services.clone(),
        }
    }
}
