//! Fixed choices offered by the onboarding and targeting forms.

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Real Estate",
    "Retail",
    "Manufacturing",
    "Education",
    "Professional Services",
    "Marketing & Advertising",
    "Construction",
    "Hospitality",
    "Legal",
    "Other",
];

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

pub const JOB_LEVELS: &[&str] = &[
    "C-Level",
    "VP",
    "Director",
    "Manager",
    "Individual Contributor",
];

pub const TARGET_CUSTOMER_TYPES: &[&str] = &["B2B", "B2C", "Both"];

pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];
