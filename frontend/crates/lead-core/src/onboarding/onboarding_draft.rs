use crate::DraftField;

/// Everything the wizard collects. Lives only as long as the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub owner_name: String,
    pub job_title: String,
    pub business_name: String,
    pub industry: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub target_customer_type: String,
    pub target_location: String,
    pub services: String,
}

impl OnboardingDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::OwnerName => &self.owner_name,
            DraftField::JobTitle => &self.job_title,
            DraftField::BusinessName => &self.business_name,
            DraftField::Industry => &self.industry,
            DraftField::Website => &self.website,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Street => &self.street,
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::Zip => &self.zip,
            DraftField::TargetCustomerType => &self.target_customer_type,
            DraftField::TargetLocation => &self.target_location,
            DraftField::Services => &self.services,
        }
    }

    pub fn set<S: Into<String>>(&mut self, field: DraftField, value: S) {
        let slot = match field {
            DraftField::OwnerName => &mut self.owner_name,
            DraftField::JobTitle => &mut self.job_title,
            DraftField::BusinessName => &mut self.business_name,
            DraftField::Industry => &mut self.industry,
            DraftField::Website => &mut self.website,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Street => &mut self.street,
            DraftField::City => &mut self.city,
            DraftField::State => &mut self.state,
            DraftField::Zip => &mut self.zip,
            DraftField::TargetCustomerType => &mut self.target_customer_type,
            DraftField::TargetLocation => &mut self.target_location,
            DraftField::Services => &mut self.services,
        };
        *slot = value.into();
    }

    /// `"{street}, {city}, {state} {zip}"`
    pub fn address(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}
