//! Integration tests for panenav.

mod util;

mod arg_tests;
mod invalid_config_tests;
mod invalid_layout_tests;
mod navigation_tests;
mod valid_config_tests;
