//! Profile record owned by the backend.

use crate::models::targeting_list;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Business profile as returned by `GET /api/profile`.
///
/// Fields the frontend does not know about are kept in `extra` so that a
/// targeting save can send the whole object back unchanged. A known field
/// that does not arrive as a string also stays in `extra`, with its
/// original value. Absent fields are left out when serializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_customer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,

    pub target_industries: Vec<String>,
    pub target_company_sizes: Vec<String>,
    pub target_job_titles: Vec<String>,
    pub target_job_levels: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Short label for headers and logs.
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .or(self.owner_name.as_deref())
            .unwrap_or("Unnamed business")
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        Ok(Profile {
            business_name: take_text(&mut fields, "business_name"),
            industry: take_text(&mut fields, "industry"),
            website: take_text(&mut fields, "website"),
            owner_name: take_text(&mut fields, "owner_name"),
            job_title: take_text(&mut fields, "job_title"),
            email: take_text(&mut fields, "email"),
            phone: take_text(&mut fields, "phone"),
            address: take_text(&mut fields, "address"),
            target_customer_type: take_text(&mut fields, "target_customer_type"),
            target_location: take_text(&mut fields, "target_location"),
            services: take_text(&mut fields, "services"),
            target_industries: take_list(&mut fields, "target_industries"),
            target_company_sizes: take_list(&mut fields, "target_company_sizes"),
            target_job_titles: take_list(&mut fields, "target_job_titles"),
            target_job_levels: take_list(&mut fields, "target_job_levels"),
            extra: fields,
        })
    }
}

/// Move a string field out of `fields`. Any other shape is left in place.
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(fields.get(key), Some(Value::String(_))) {
        return None;
    }
    match fields.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Move a targeting field out of `fields`, normalized. A shape that is
/// neither a list nor a string reads as empty; the save overwrites it.
fn take_list(fields: &mut Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .remove(key)
        .and_then(|value| targeting_list::deserialize(value).ok())
        .unwrap_or_default()
}
