//! Lead data collected by the proposal wizard.
//!
//! A lead is serialized with camelCase keys so the JSON handed to a sink
//! matches what a CRM or `/api/leads` endpoint expects:
//!
//! ```json
//! {"firstName":"Jane","lastName":"Doe","email":"jane@x.com","phone":"",
//!  "company":"","website":"","services":["seo","ppc"],"goals":""}
//! ```

use serde::{Deserialize, Serialize};

/// A marketing service a prospect can tick in the wizard's second step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    /// Stable identifier stored in [`LeadFormData::services`]
    pub id: &'static str,
    /// Checkbox label
    pub label: &'static str,
}

/// Services offered in the wizard, in display order.
pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption {
        id: "seo",
        label: "SEO Optimization",
    },
    ServiceOption {
        id: "ppc",
        label: "PPC Management",
    },
    ServiceOption {
        id: "social",
        label: "Social Media Marketing",
    },
    ServiceOption {
        id: "content",
        label: "Content Marketing",
    },
    ServiceOption {
        id: "analytics",
        label: "Analytics & Insights",
    },
    ServiceOption {
        id: "strategy",
        label: "Digital Strategy",
    },
];

/// Free-text fields of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    /// Required in step one
    FirstName,
    /// Required in step one
    LastName,
    /// Required in step one
    Email,
    /// Optional
    Phone,
    /// Optional
    Company,
    /// Optional
    Website,
    /// Step three textarea
    Goals,
}

impl LeadField {
    /// Fields entered on the first wizard page, in display order.
    pub const CONTACT: [LeadField; 6] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::Email,
        LeadField::Phone,
        LeadField::Company,
        LeadField::Website,
    ];

    /// The element id / form name used for this field.
    pub fn as_key(&self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Company => "company",
            LeadField::Website => "website",
            LeadField::Goals => "goals",
        }
    }

    /// Whether the field must be non-empty before the wizard advances.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            LeadField::FirstName | LeadField::LastName | LeadField::Email
        )
    }
}

/// Everything a prospect entered in the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFormData {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Business email
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Company name
    pub company: String,
    /// Company website
    pub website: String,
    /// Selected service ids, unique, in the order they were ticked
    pub services: Vec<String>,
    /// Marketing goals or challenges
    pub goals: String,
}

impl LeadFormData {
    /// Current value of a text field.
    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Company => &self.company,
            LeadField::Website => &self.website,
            LeadField::Goals => &self.goals,
        }
    }

    /// Replace a text field with the raw input value.
    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Company => &mut self.company,
            LeadField::Website => &mut self.website,
            LeadField::Goals => &mut self.goals,
        };
        *slot = value.into();
    }

    /// Add the service if absent, remove it if present.
    ///
    /// Returns whether the service is selected afterwards.
    pub fn toggle_service(&mut self, id: &str) -> bool {
        if let Some(pos) = self.services.iter().position(|s| s == id) {
            self.services.remove(pos);
            false
        } else {
            self.services.push(id.to_string());
            true
        }
    }

    /// Whether `id` is currently selected.
    pub fn has_service(&self, id: &str) -> bool {
        self.services.iter().any(|s| s == id)
    }

    /// First name, last name and email are all non-empty.
    pub fn has_contact_details(&self) -> bool {
        LeadField::CONTACT
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.field(*f).is_empty())
    }

    /// At least one service is selected.
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// Nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn double_toggle_restores_empty_set() {
        for option in SERVICE_OPTIONS {
            let mut lead = LeadFormData::default();
            assert!(lead.toggle_service(option.id));
            assert!(!lead.toggle_service(option.id));
            assert!(lead.services.is_empty(), "{} left behind", option.id);
        }
    }

    #[test]
    fn toggle_keeps_ids_unique_and_ordered() {
        let mut lead = LeadFormData::default();
        lead.toggle_service("ppc");
        lead.toggle_service("seo");
        lead.toggle_service("social");
        lead.toggle_service("seo");
        assert_eq!(lead.services, vec!["ppc", "social"]);
        assert!(lead.has_service("social"));
        assert!(!lead.has_service("seo"));
    }

    #[test]
    fn contact_details_need_all_three_required_fields() {
        let mut lead = LeadFormData::default();
        assert!(!lead.has_contact_details());

        lead.set_field(LeadField::FirstName, "Jane");
        lead.set_field(LeadField::LastName, "Doe");
        assert!(!lead.has_contact_details());

        lead.set_field(LeadField::Email, "jane@x.com");
        assert!(lead.has_contact_details());

        lead.set_field(LeadField::LastName, "");
        assert!(!lead.has_contact_details());
    }

    #[test]
    fn optional_fields_do_not_gate_contact_details() {
        let mut lead = LeadFormData::default();
        lead.set_field(LeadField::FirstName, "Jane");
        lead.set_field(LeadField::LastName, "Doe");
        lead.set_field(LeadField::Email, "jane@x.com");
        lead.set_field(LeadField::Phone, "");
        lead.set_field(LeadField::Website, "");
        assert!(lead.has_contact_details());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut lead = LeadFormData::default();
        lead.set_field(LeadField::FirstName, "Jane");
        lead.set_field(LeadField::LastName, "Doe");
        lead.set_field(LeadField::Email, "jane@x.com");
        lead.toggle_service("seo");
        lead.toggle_service("ppc");
        lead.set_field(LeadField::Goals, "More leads");

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@x.com",
                "phone": "",
                "company": "",
                "website": "",
                "services": ["seo", "ppc"],
                "goals": "More leads",
            })
        );
    }

    #[test]
    fn field_keys_match_form_names() {
        let keys: Vec<_> = LeadField::CONTACT.iter().map(LeadField::as_key).collect();
        assert_eq!(
            keys,
            vec!["firstName", "lastName", "email", "phone", "company", "website"]
        );
        assert_eq!(LeadField::Goals.as_key(), "goals");
    }
}
