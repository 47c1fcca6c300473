use crate::OnboardingStep;
use crate::options::{INDUSTRIES, TARGET_CUSTOMER_TYPES, US_STATES};

/// Addressable wizard inputs, used by form renderers to walk a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    OwnerName,
    JobTitle,
    BusinessName,
    Industry,
    Website,
    Email,
    Phone,
    Street,
    City,
    State,
    Zip,
    TargetCustomerType,
    TargetLocation,
    Services,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OwnerName => "Your name",
            Self::JobTitle => "Job title",
            Self::BusinessName => "Business name",
            Self::Industry => "Industry",
            Self::Website => "Website",
            Self::Email => "Business email",
            Self::Phone => "Phone",
            Self::Street => "Street address",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP code",
            Self::TargetCustomerType => "Target customer type",
            Self::TargetLocation => "Target location",
            Self::Services => "Services you offer",
        }
    }

    pub fn step(&self) -> OnboardingStep {
        match self {
            Self::OwnerName | Self::JobTitle => OnboardingStep::Profile,
            Self::BusinessName | Self::Industry | Self::Website => OnboardingStep::Business,
            Self::Email | Self::Phone | Self::Street | Self::City | Self::State | Self::Zip => {
                OnboardingStep::Contact
            }
            Self::TargetCustomerType | Self::TargetLocation | Self::Services => {
                OnboardingStep::Goals
            }
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::OwnerName
                | Self::JobTitle
                | Self::BusinessName
                | Self::Industry
                | Self::Website
                | Self::Email
                | Self::Phone
                | Self::City
                | Self::State
        )
    }

    /// Select inputs offer a fixed list; everything else is free text.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Industry => Some(INDUSTRIES),
            Self::State => Some(US_STATES),
            Self::TargetCustomerType => Some(TARGET_CUSTOMER_TYPES),
            _ => None,
        }
    }

    /// Fields rendered on a given step, in display order.
    pub fn for_step(step: OnboardingStep) -> &'static [DraftField] {
        match step {
            OnboardingStep::Profile => &[Self::OwnerName, Self::JobTitle],
            OnboardingStep::Business => &[Self::BusinessName, Self::Industry, Self::Website],
            OnboardingStep::Contact => &[
                Self::Email,
                Self::Phone,
                Self::Street,
                Self::City,
                Self::State,
                Self::Zip,
            ],
            OnboardingStep::Goals => &[
                Self::TargetCustomerType,
                Self::TargetLocation,
                Self::Services,
            ],
        }
    }
}
