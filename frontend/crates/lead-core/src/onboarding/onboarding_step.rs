use crate::{CoreError, Result as CoreErrorResult};

/// The four wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OnboardingStep {
    #[default]
    Profile,
    Business,
    Contact,
    Goals,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Profile,
        OnboardingStep::Business,
        OnboardingStep::Contact,
        OnboardingStep::Goals,
    ];

    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            Self::Profile => 1,
            Self::Business => 2,
            Self::Contact => 3,
            Self::Goals => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Profile => "Your Profile",
            Self::Business => "Your Business",
            Self::Contact => "Contact Details",
            Self::Goals => "Your Goals",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Profile => Some(Self::Business),
            Self::Business => Some(Self::Contact),
            Self::Contact => Some(Self::Goals),
            Self::Goals => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Profile => None,
            Self::Business => Some(Self::Profile),
            Self::Contact => Some(Self::Business),
            Self::Goals => Some(Self::Contact),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl TryFrom<u8> for OnboardingStep {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: u8) -> CoreErrorResult<Self> {
        match value {
            1 => Ok(Self::Profile),
            2 => Ok(Self::Business),
            3 => Ok(Self::Contact),
            4 => Ok(Self::Goals),
            _ => Err(CoreError::invalid_step(value)),
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} of 4: {}", self.number(), self.title())
    }
}
