//! Tests for theme module

mod convert_tests;
