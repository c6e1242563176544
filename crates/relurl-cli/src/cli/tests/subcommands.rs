//! Tests for inspect, full-path, search, set-search, update-search.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_inspect() {
    match parse(&["relurl", "inspect", "http://example.com/a?b=1"]) {
        CliCommand::Inspect { url } => assert_eq!(url, "http://example.com/a?b=1"),
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_full_path() {
    match parse(&["relurl", "full-path", "/a/b?c#d"]) {
        CliCommand::FullPath { url } => assert_eq!(url, "/a/b?c#d"),
        _ => panic!("expected FullPath"),
    }
}

#[test]
fn cli_parse_search() {
    match parse(&["relurl", "search", "/a?x=1&x=2"]) {
        CliCommand::Search { url } => assert_eq!(url, "/a?x=1&x=2"),
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_set_search() {
    match parse(&["relurl", "set-search", "/a?old=1#h", "x=1", "y=2"]) {
        CliCommand::SetSearch { url, pairs } => {
            assert_eq!(url, "/a?old=1#h");
            assert_eq!(pairs, vec!["x=1", "y=2"]);
        }
        _ => panic!("expected SetSearch"),
    }
}

#[test]
fn cli_parse_set_search_without_pairs() {
    match parse(&["relurl", "set-search", "/a?old=1"]) {
        CliCommand::SetSearch { url, pairs } => {
            assert_eq!(url, "/a?old=1");
            assert!(pairs.is_empty());
        }
        _ => panic!("expected SetSearch"),
    }
}

#[test]
fn cli_parse_update_search() {
    match parse(&["relurl", "update-search", "/a?page=1", "page=2"]) {
        CliCommand::UpdateSearch { url, pairs } => {
            assert_eq!(url, "/a?page=1");
            assert_eq!(pairs, vec!["page=2"]);
        }
        _ => panic!("expected UpdateSearch"),
    }
}

#[test]
fn cli_parse_missing_url_fails() {
    assert!(crate::cli::Cli::try_parse_from(["relurl", "inspect"]).is_err());
}
