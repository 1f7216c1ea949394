//! Edge case tests for goval-lex
