#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn known() -> KnownTypes {
    KnownTypes::new().with_parcelable("com.example.User")
}

#[test]
fn KnownTypes___default___has_standard_containers() {
    let types = KnownTypes::default();

    assert!(types.parcelables.is_empty());
    assert!(types.list_containers.contains("java.util.ArrayList"));
    assert!(types.sparse_containers.contains("android.util.SparseArray"));
}

#[test_case("java.util.ArrayList<com.example.User>", true)]
#[test_case("java.util.ArrayList<java.lang.String>", false)]
#[test_case("java.util.LinkedList<com.example.User>", false)]
#[test_case("java.util.ArrayList", false)]
#[test_case("com.example.User", false)]
fn KnownTypes___is_parcelable_list(text: &str, expected: bool) {
    assert_eq!(known().is_parcelable_list(&TypeDescriptor::new(text)), expected);
}

#[test_case("android.util.SparseArray<com.example.User>", true)]
#[test_case("android.util.SparseArray<java.lang.String>", false)]
#[test_case("java.util.ArrayList<com.example.User>", false)]
fn KnownTypes___is_sparse_parcelable_array(text: &str, expected: bool) {
    assert_eq!(known().is_sparse_parcelable_array(&TypeDescriptor::new(text)), expected);
}

#[test_case("com.example.User[]", true)]
#[test_case("com.example.Other[]", false)]
#[test_case("com.example.User", false)]
#[test_case("int[]", false)]
fn KnownTypes___is_parcelable_array(text: &str, expected: bool) {
    assert_eq!(known().is_parcelable_array(&TypeDescriptor::new(text)), expected);
}

#[test]
fn KnownTypes___custom_list_container___recognized() {
    let mut types = known();
    types.list_containers.insert("java.util.List".to_string());

    assert!(types.is_parcelable_list(&TypeDescriptor::new("java.util.List<com.example.User>")));
}

#[test]
fn KnownTypes___deserialize___missing_containers_use_defaults() {
    let types: KnownTypes = serde_json::from_str(r#"{ "parcelables": ["com.example.User"] }"#).unwrap();

    assert!(types.parcelables.contains("com.example.User"));
    assert_eq!(types.list_containers, KnownTypes::default().list_containers);
    assert_eq!(types.sparse_containers, KnownTypes::default().sparse_containers);
}
