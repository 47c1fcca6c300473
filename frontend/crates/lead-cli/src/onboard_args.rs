use lead_core::DraftField;

use clap::Args;

#[derive(Args, Default)]
pub struct OnboardArgs {
    /// Prompt for each step instead of reading flags
    #[arg(long)]
    pub interactive: bool,

    #[arg(long)]
    pub owner_name: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub business_name: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    #[arg(long)]
    pub target_customer_type: Option<String>,
    #[arg(long)]
    pub target_location: Option<String>,
    #[arg(long)]
    pub services: Option<String>,
}

impl OnboardArgs {
    /// Flag values paired with the wizard field they fill.
    pub fn values(&self) -> Vec<(DraftField, &str)> {
        [
            (DraftField::OwnerName, &self.owner_name),
            (DraftField::JobTitle, &self.job_title),
            (DraftField::BusinessName, &self.business_name),
            (DraftField::Industry, &self.industry),
            (DraftField::Website, &self.website),
            (DraftField::Email, &self.email),
            (DraftField::Phone, &self.phone),
            (DraftField::Street, &self.street),
            (DraftField::City, &self.city),
            (DraftField::State, &self.state),
            (DraftField::Zip, &self.zip),
            (DraftField::TargetCustomerType, &self.target_customer_type),
            (DraftField::TargetLocation, &self.target_location),
            (DraftField::Services, &self.services),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}
