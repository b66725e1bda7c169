mod auth_tests;
mod employee_tests;
