use cloud_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("CC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("CC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("CC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("CC_MISSING_VAR");
        let result: String = get_env_or_default("CC_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("CC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("CC_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("CC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_treats_blank_as_missing() {
    unsafe {
        env::set_var("CC_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("CC_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("CC_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_value() {
    unsafe {
        env::set_var("CC_TEST_VAR_OPTION", " 123 ");
        let result: Option<u32> = get_env_or_none("CC_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("CC_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_flag_variants() {
    unsafe {
        env::set_var("CC_TEST_FLAG", "Yes");
        assert!(get_env_flag("CC_TEST_FLAG", false));
        env::set_var("CC_TEST_FLAG", "0");
        assert!(!get_env_flag("CC_TEST_FLAG", true));
        env::set_var("CC_TEST_FLAG", "maybe");
        assert!(get_env_flag("CC_TEST_FLAG", true));
        env::remove_var("CC_TEST_FLAG");
        assert!(!get_env_flag("CC_TEST_FLAG", false));
    }
}
