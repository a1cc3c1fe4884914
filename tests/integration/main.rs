//! Integration tests for termlib and the tldemo binary

mod helpers;

mod cli_test;
mod terminal_test;
