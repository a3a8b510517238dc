//! Create/update form payloads.
//!
//! These are the bodies posted to the CRUD endpoints. They carry no
//! behavior of their own; see [`crate::validation`] for the rules.

use serde::{Deserialize, Serialize};

/// Customer, part, or process form: a name and, for parts and
/// processes, a type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityForm {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl EntityForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    /// Sets the type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// New schedule: a model and an order quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleForm {
    pub model_id: i64,
    pub quantity: i64,
}

/// One BOM line of a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelProcessDetail {
    pub model_name: String,
    pub part_name: String,
    #[serde(alias = "operatorNumber")]
    pub operation_number: String,
    pub bom: i64,
}

/// Model form with its BOM lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelForm {
    pub name: String,
    pub created: String,
    pub process_details: Vec<ModelProcessDetail>,
}

/// One routing step hosted by a work center.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessComponent {
    pub part_name: String,
    pub operation_number: String,
    pub work_center_name: String,
    pub work_center_category: String,
    pub base_quantity: f64,
    /// Setup time (minutes).
    pub setup: f64,
    /// Cycle time per unit (minutes).
    pub cycle_time: f64,
}

/// Work center form. Components may be added later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkCenterForm {
    pub name: String,
    pub process_components: Option<Vec<ProcessComponent>>,
}
