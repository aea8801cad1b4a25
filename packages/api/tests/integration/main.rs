mod contact_tests;
mod registration_tests;
