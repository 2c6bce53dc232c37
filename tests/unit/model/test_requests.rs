use easy_sharepoint::error::AppError;
use easy_sharepoint::model::requests::{
    CheckInType, FieldType, ListTemplate, NewField, NewList,
};

#[test]
fn test_list_template_codes() {
    assert_eq!(ListTemplate::CustomList.code(), 100);
    assert_eq!(ListTemplate::DocumentLibrary.code(), 101);
    assert_eq!(ListTemplate::Tasks.code(), 107);
    assert_eq!(u32::from(ListTemplate::WebPartGallery), 113);
}

#[test]
fn test_field_type_codes() {
    assert_eq!(FieldType::Invalid.code(), 0);
    assert_eq!(FieldType::Text.code(), 2);
    assert_eq!(FieldType::Boolean.code(), 8);
    assert_eq!(FieldType::MaxItems.code(), 31);
    assert_eq!(FieldType::default(), FieldType::Text);
}

#[test]
fn test_field_type_from_code() {
    for code in 0..=31 {
        let kind = FieldType::from_code(code).unwrap();
        assert_eq!(kind.code(), code);
    }
    assert_eq!(FieldType::from_code(32), None);
    assert_eq!(FieldType::from_code(-1), None);
}

#[test]
fn test_check_in_type_codes() {
    assert_eq!(CheckInType::Minor.code(), 0);
    assert_eq!(CheckInType::Major.code(), 1);
    assert_eq!(CheckInType::Overwrite.code(), 2);
    assert_eq!(CheckInType::default(), CheckInType::Minor);
}

#[test]
fn test_new_list_defaults() {
    let list = NewList::new("Projects");
    assert_eq!(list.title, "Projects");
    assert_eq!(list.description, "");
    assert_eq!(list.base_template, 100);
    assert!(list.allow_content_types);
    assert!(list.content_types_enabled);
    assert!(list.extra.is_empty());
    assert!(list.validate().is_ok());
}

#[test]
fn test_new_list_rejects_blank_title() {
    assert!(matches!(
        NewList::new("  ").validate(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_new_field_raw_code() {
    let field = NewField::with_kind_code("Score", 9);
    assert_eq!(field.field_type(), Some(FieldType::Number));

    let unknown = NewField::with_kind_code("Odd", 99);
    assert_eq!(unknown.field_type(), None);
    assert!(unknown.validate().is_ok());
}

#[test]
fn test_new_field_rejects_blank_title() {
    assert!(matches!(
        NewField::new("", FieldType::Text).validate(),
        Err(AppError::InvalidInput(_))
    ));
}
