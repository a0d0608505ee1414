pub mod password_policy;
pub mod use_cases;
