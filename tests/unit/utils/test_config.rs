use easy_sharepoint::utils::config::{get_env_list_or_default, get_env_or_default};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("EASY_SP_TEST_STRING", "test_value");
        let result: String = get_env_or_default("EASY_SP_TEST_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("EASY_SP_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("EASY_SP_MISSING");
        let result: String = get_env_or_default("EASY_SP_MISSING", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("EASY_SP_TEST_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("EASY_SP_TEST_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("EASY_SP_TEST_INVALID");
    }
}

#[test]
fn test_get_env_list_or_default_parses_list() {
    unsafe {
        env::set_var("EASY_SP_TEST_LIST", "200, 204 ,201");
        let result: Vec<u16> = get_env_list_or_default("EASY_SP_TEST_LIST", &[1]);
        assert_eq!(result, vec![200, 204, 201]);
        env::remove_var("EASY_SP_TEST_LIST");
    }
}

#[test]
fn test_get_env_list_or_default_falls_back() {
    unsafe {
        env::set_var("EASY_SP_TEST_BAD_LIST", "200,abc");
        let result: Vec<u16> = get_env_list_or_default("EASY_SP_TEST_BAD_LIST", &[200, 204]);
        assert_eq!(result, vec![200, 204]);

        env::set_var("EASY_SP_TEST_BAD_LIST", " , ");
        let result: Vec<u16> = get_env_list_or_default("EASY_SP_TEST_BAD_LIST", &[200]);
        assert_eq!(result, vec![200]);
        env::remove_var("EASY_SP_TEST_BAD_LIST");

        let result: Vec<u16> = get_env_list_or_default("EASY_SP_TEST_BAD_LIST", &[202]);
        assert_eq!(result, vec![202]);
    }
}
