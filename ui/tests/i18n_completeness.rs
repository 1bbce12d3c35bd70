//! Source and copy agree: every literal `fl!` id exists in the fallback
//! resource, and every fallback message is looked up somewhere.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ui::i18n::message_ids;

const EN_US: &str = include_str!("../i18n/en-US/uaskibuy-ui.ftl");

/// Prefixes of numbered entries, which are looked up with runtime-built ids
/// and so never appear as literals in source.
const NUMBERED_PREFIXES: &[&str] = &["how-step-", "featured-vehicle-", "why-point-", "testimonial-"];

const NEEDLE: &str = "fl!(loader, \"";

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            let entries = fs::read_dir(&path).expect("readable source dir");
            stack.extend(entries.flatten().map(|entry| entry.path()));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

/// Literal ids passed to `fl!(loader, "..")` under `src/`.
fn referenced_ids() -> BTreeSet<String> {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut found = BTreeSet::new();
    for path in rust_sources(&src_root) {
        let content = fs::read_to_string(&path).expect("readable source file");
        for (at, _) in content.match_indices(NEEDLE) {
            if let Some((id, _)) = content[at + NEEDLE.len()..].split_once('"') {
                found.insert(id.to_string());
            }
        }
    }
    found
}

#[test]
fn referenced_ids_exist_in_fallback() {
    let fallback = message_ids(EN_US).expect("valid fallback resource");
    let referenced = referenced_ids();
    assert!(!referenced.is_empty(), "no fl!(loader, \"..\") lookups found");

    let missing: Vec<&String> = referenced.difference(&fallback).collect();
    assert!(
        missing.is_empty(),
        "ids looked up in source but missing in en-US: {missing:?}"
    );
}

#[test]
fn every_fallback_message_is_used() {
    let fallback = message_ids(EN_US).expect("valid fallback resource");
    let referenced = referenced_ids();

    let unused: Vec<&String> = fallback
        .iter()
        .filter(|id| !referenced.contains(*id))
        .filter(|id| !NUMBERED_PREFIXES.iter().any(|p| id.starts_with(p)))
        .collect();
    assert!(
        unused.is_empty(),
        "en-US messages never looked up in source: {unused:?}"
    );
}
