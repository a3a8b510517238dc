//! Input validation for forms and timeline payloads.
//!
//! Form checks mirror the create/update screens: required text fields,
//! numeric minimums, and non-empty line collections. Every check runs;
//! the caller receives all issues at once, each tagged with the path of
//! the offending field (`processDetails[1].bom`).
//!
//! [`audit_timeline_rows`] reports what the layout engine would silently
//! skip, for callers that want to surface bad records instead of hiding
//! them.

use std::collections::HashSet;

use crate::models::{
    EntityForm, ModelForm, ScheduleForm, TimelineRow, WorkCenterForm,
};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Field path (camelCase, as on the wire).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required text field is blank.
    Required,
    /// A number is below its minimum.
    BelowMinimum,
    /// A collection that needs at least one entry is empty.
    EmptyCollection,
    /// Two records share the same ID.
    DuplicateId,
    /// A timestamp does not parse.
    UnparseableTimestamp,
    /// A finish precedes its start.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn require(&mut self, field: impl Into<String>, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::new(
                ValidationErrorKind::Required,
                field,
                format!("{label} is required"),
            ));
        }
    }

    fn at_least(&mut self, field: impl Into<String>, value: f64, min: f64, message: &str) {
        if value.is_nan() || value < min {
            self.errors.push(ValidationError::new(
                ValidationErrorKind::BelowMinimum,
                field,
                message,
            ));
        }
    }

    fn finish(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Validates a customer (`requires_kind = false`), part, or process form.
pub fn validate_entity(form: &EntityForm, requires_kind: bool) -> ValidationResult {
    let mut c = Collector::default();
    c.require("name", &form.name, "Name");
    if requires_kind {
        c.require("type", form.kind.as_deref().unwrap_or(""), "Type");
    }
    c.finish()
}

/// Validates a new schedule: a model must be chosen and at least one
/// unit ordered.
pub fn validate_schedule_form(form: &ScheduleForm) -> ValidationResult {
    let mut c = Collector::default();
    if form.model_id <= 0 {
        c.errors.push(ValidationError::new(
            ValidationErrorKind::Required,
            "modelId",
            "Model is required",
        ));
    }
    c.at_least("quantity", form.quantity as f64, 1.0, "Quantity must be at least 1");
    c.finish()
}

/// Validates a model and each of its BOM lines.
pub fn validate_model_form(form: &ModelForm) -> ValidationResult {
    let mut c = Collector::default();
    c.require("name", &form.name, "Name");
    c.require("created", &form.created, "Created date");

    if form.process_details.is_empty() {
        c.errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCollection,
            "processDetails",
            "At least one process detail is required",
        ));
    }
    for (i, line) in form.process_details.iter().enumerate() {
        let path = |f: &str| format!("processDetails[{i}].{f}");
        c.require(path("modelName"), &line.model_name, "Model Name");
        c.require(path("partName"), &line.part_name, "Part Name");
        c.require(path("operationNumber"), &line.operation_number, "Operation Number");
        c.at_least(path("bom"), line.bom as f64, 1.0, "BOM is required");
    }
    c.finish()
}

/// Validates a work center. Components are optional, but each present
/// component must be complete.
pub fn validate_work_center_form(form: &WorkCenterForm) -> ValidationResult {
    let mut c = Collector::default();
    c.require("name", &form.name, "Name");

    for (i, comp) in form.process_components.iter().flatten().enumerate() {
        let path = |f: &str| format!("processComponents[{i}].{f}");
        c.require(path("partName"), &comp.part_name, "Part Name");
        c.require(path("operationNumber"), &comp.operation_number, "Operation Number");
        c.require(path("workCenterName"), &comp.work_center_name, "Work Center Name");
        c.require(
            path("workCenterCategory"),
            &comp.work_center_category,
            "Work Center Category",
        );
        c.at_least(path("baseQuantity"), comp.base_quantity, 1.0, "Base Quantity is required");
        c.at_least(path("setup"), comp.setup, 0.0, "Setup is required");
        c.at_least(path("cycleTime"), comp.cycle_time, 0.0, "Cycle Time is required");
    }
    c.finish()
}

/// Reports timeline details the layout engine would skip.
///
/// Checks:
/// 1. Detail IDs are unique across all rows
/// 2. Start and finish timestamps parse
/// 3. Finish is not before start
pub fn audit_timeline_rows(rows: &[TimelineRow]) -> ValidationResult {
    let mut c = Collector::default();
    let mut seen = HashSet::new();

    for (r, row) in rows.iter().enumerate() {
        for (d, detail) in row.schedule_details.iter().enumerate() {
            let path = |f: &str| format!("[{r}].scheduleDetails[{d}].{f}");

            if !seen.insert(detail.id) {
                c.errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    path("id"),
                    format!("Duplicate schedule detail ID: {}", detail.id),
                ));
            }

            let start = detail.start();
            let finish = detail.finish();
            if start.is_none() {
                c.errors.push(ValidationError::new(
                    ValidationErrorKind::UnparseableTimestamp,
                    path("startTime"),
                    format!("Detail {} has unparseable start '{}'", detail.id, detail.start_time),
                ));
            }
            if finish.is_none() {
                c.errors.push(ValidationError::new(
                    ValidationErrorKind::UnparseableTimestamp,
                    path("finishTime"),
                    format!("Detail {} has unparseable finish '{}'", detail.id, detail.finish_time),
                ));
            }
            if let (Some(s), Some(f)) = (start, finish) {
                if f < s {
                    c.errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedInterval,
                        path("finishTime"),
                        format!("Detail {} finishes before it starts", detail.id),
                    ));
                }
            }
        }
    }
    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelProcessDetail, ProcessComponent, ScheduleDetail};

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_entity_form() {
        assert!(validate_entity(&EntityForm::new("Acme"), false).is_ok());
        assert!(validate_entity(&EntityForm::new("Shaft").with_kind("Steel"), true).is_ok());

        let errors = validate_entity(&EntityForm::new("  "), true).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[1].field, "type");
    }

    #[test]
    fn test_schedule_form() {
        assert!(validate_schedule_form(&ScheduleForm { model_id: 3, quantity: 10 }).is_ok());

        let errors = validate_schedule_form(&ScheduleForm { model_id: 0, quantity: 0 }).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Model is required");
        assert_eq!(errors[1].message, "Quantity must be at least 1");
    }

    #[test]
    fn test_model_form_requires_lines() {
        let form = ModelForm {
            name: "MX".into(),
            created: "2024-06-03".into(),
            process_details: vec![],
        };
        assert_eq!(
            kinds(validate_model_form(&form)),
            vec![ValidationErrorKind::EmptyCollection]
        );
    }

    #[test]
    fn test_model_form_line_paths() {
        let form = ModelForm {
            name: "MX".into(),
            created: "2024-06-03".into(),
            process_details: vec![
                ModelProcessDetail {
                    model_name: "MX".into(),
                    part_name: "Shaft".into(),
                    operation_number: "10".into(),
                    bom: 2,
                },
                ModelProcessDetail {
                    model_name: "MX".into(),
                    part_name: "".into(),
                    operation_number: "20".into(),
                    bom: 0,
                },
            ],
        };
        let errors = validate_model_form(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["processDetails[1].partName", "processDetails[1].bom"]);
    }

    #[test]
    fn test_work_center_form() {
        let empty = WorkCenterForm {
            name: "Press 1".into(),
            process_components: None,
        };
        assert!(validate_work_center_form(&empty).is_ok());

        let comp = ProcessComponent {
            part_name: "Shaft".into(),
            operation_number: "10".into(),
            work_center_name: "Press 1".into(),
            work_center_category: "Press".into(),
            base_quantity: 0.0,
            setup: -1.0,
            cycle_time: 0.0,
        };
        let form = WorkCenterForm {
            name: "Press 1".into(),
            process_components: Some(vec![comp]),
        };
        let errors = validate_work_center_form(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "processComponents[0].baseQuantity");
        assert_eq!(errors[1].field, "processComponents[0].setup");
    }

    #[test]
    fn test_audit_clean_rows() {
        let rows = [TimelineRow::new("MX")
            .with_detail(ScheduleDetail::new(1, "2024-06-03T08:00:00", "2024-06-03T09:00:00"))];
        assert!(audit_timeline_rows(&rows).is_ok());
    }

    #[test]
    fn test_audit_reports_skipped_records() {
        let rows = [
            TimelineRow::new("MX")
                .with_detail(ScheduleDetail::new(1, "2024-06-03T09:00:00", "2024-06-03T08:00:00")),
            TimelineRow::new("MY")
                .with_detail(ScheduleDetail::new(1, "", "2024-06-03T08:00:00")),
        ];
        let errors = audit_timeline_rows(&rows).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::InvertedInterval,
                ValidationErrorKind::DuplicateId,
                ValidationErrorKind::UnparseableTimestamp,
            ]
        );
        assert_eq!(errors[1].field, "[1].scheduleDetails[0].id");
    }
}
