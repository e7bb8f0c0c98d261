use serde_json::json;
use staffline_models::{EmployeeSearchRecord, EmployeeSearchRequest, SearchPage, NOT_AVAILABLE};
use validator::Validate;

fn sample_record() -> EmployeeSearchRecord {
    EmployeeSearchRecord {
        id: 1,
        full_name: "John Doe".to_string(),
        payroll_id: Some("A100".to_string()),
        department_name: "Engineering".to_string(),
        hiring_mode_name: NOT_AVAILABLE.to_string(),
        temp_payroll_id: None,
        state_id: Some(7),
        state_name: "Karnataka".to_string(),
        city_id: None,
        city_name: NOT_AVAILABLE.to_string(),
        campus_id: Some(3),
        campus_name: "North".to_string(),
        category_name: NOT_AVAILABLE.to_string(),
        employee_type_id: None,
        employee_type_name: NOT_AVAILABLE.to_string(),
    }
}

#[test]
fn record_serializes_every_field_in_camel_case() {
    let value = serde_json::to_value(sample_record()).unwrap();
    let obj = value.as_object().unwrap();

    for key in [
        "id",
        "fullName",
        "payrollId",
        "departmentName",
        "hiringModeName",
        "tempPayrollId",
        "stateId",
        "stateName",
        "cityId",
        "cityName",
        "campusId",
        "campusName",
        "categoryName",
        "employeeTypeId",
        "employeeTypeName",
    ] {
        assert!(obj.contains_key(key), "missing field {key}");
    }
    assert_eq!(obj.len(), 15);
    // Absent ids stay null rather than being dropped.
    assert_eq!(value["cityId"], serde_json::Value::Null);
    assert_eq!(value["cityName"], "N/A");
}

#[test]
fn request_accepts_partial_payloads() {
    let request: EmployeeSearchRequest = serde_json::from_value(json!({
        "departmentId": 4,
        "categoryName": "Engineering"
    }))
    .unwrap();

    assert_eq!(request.department_id, Some(4));
    assert_eq!(request.category_name.as_deref(), Some("Engineering"));
    assert_eq!(request.state_id, None);
    assert_eq!(request.identifier_clause, None);
}

#[test]
fn request_rejects_oversized_identifier_clause() {
    let request = EmployeeSearchRequest {
        identifier_clause: Some("x".repeat(4001)),
        ..Default::default()
    };
    assert!(request.validate().is_err());

    let request = EmployeeSearchRequest {
        identifier_clause: Some("A100,A101".to_string()),
        ..Default::default()
    };
    assert!(request.validate().is_ok());
}

#[test]
fn page_reports_remaining_matches() {
    let page = SearchPage {
        rows: vec![sample_record()],
        total_count: 3,
        offset: 0,
        limit: 1,
    };
    assert!(page.has_more());
    assert_eq!(page.len(), 1);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["totalCount"], 3);
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);

    let empty: SearchPage<EmployeeSearchRecord> = SearchPage::empty(0, 2000);
    assert!(empty.is_empty());
    assert!(!empty.has_more());
}

#[test]
fn map_keeps_window_and_total() {
    let page = SearchPage {
        rows: vec![3_i64, 4],
        total_count: 9,
        offset: 2,
        limit: 2,
    };

    let mapped = page.map(|id| format!("E{id}"));
    assert_eq!(mapped.rows, vec!["E3".to_string(), "E4".to_string()]);
    assert_eq!(mapped.total_count, 9);
    assert_eq!(mapped.offset, 2);
    assert_eq!(mapped.limit, 2);
    assert!(mapped.has_more());
}
