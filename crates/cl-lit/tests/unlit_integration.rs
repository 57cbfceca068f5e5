// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for unliterating modules on a real filesystem.

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use cl_lit::{
    Convention, Extensions, ModuleOutcome, ModulePaths, PrefixTable, TracingReporter,
    Unliterator, WriteMode,
};
use tempfile::tempdir;

const TREE: &str = "\
Binary trees.

>> module Data.Tree

>> :: Tree a = Leaf | Node a (Tree a) (Tree a)
>> depth :: (Tree a) -> Int
>  depth Leaf = 0
>  depth (Node _ l r) = 1 + max (depth l) (depth r)
";

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000 + secs)
}

fn touch(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

fn write_module(root: &Path, module: &str, content: &str) -> ModulePaths {
    let paths = ModulePaths::resolve(root, module, &Extensions::default()).unwrap();
    fs::create_dir_all(paths.literate.parent().unwrap()).unwrap();
    fs::write(&paths.literate, content).unwrap();
    paths
}

#[test]
fn test_nested_module_is_unliterated() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Data.Tree", TREE);

    let outcome = Unliterator::default()
        .process_module(dir.path(), "Data.Tree", &TracingReporter)
        .unwrap();
    assert_eq!(outcome, ModuleOutcome::Regenerated { lines: 8 });

    let definition = fs::read_to_string(dir.path().join("Data/Tree.dcl")).unwrap();
    let implementation = fs::read_to_string(&paths.implementation).unwrap();

    assert_eq!(definition.lines().count(), TREE.lines().count());
    assert_eq!(implementation.lines().count(), TREE.lines().count());
    assert_eq!(definition.lines().nth(2), Some("definition module Data.Tree"));
    assert_eq!(
        implementation.lines().nth(2),
        Some("implementation module Data.Tree")
    );
    assert_eq!(definition.lines().nth(6), Some(""));
    assert_eq!(implementation.lines().nth(6), Some("depth Leaf = 0"));
}

#[test]
fn test_regeneration_is_idempotent() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Main", TREE);
    let unlit = Unliterator::default().with_force(true);

    unlit.process_module(dir.path(), "Main", &TracingReporter).unwrap();
    let first = (
        fs::read(&paths.definition).unwrap(),
        fs::read(&paths.implementation).unwrap(),
    );
    unlit.process_module(dir.path(), "Main", &TracingReporter).unwrap();
    let second = (
        fs::read(&paths.definition).unwrap(),
        fs::read(&paths.implementation).unwrap(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_partially_stale_module_is_regenerated() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Main", ">> module Main\n");
    fs::write(&paths.definition, "stale\n").unwrap();
    fs::write(&paths.implementation, "stale\n").unwrap();

    touch(&paths.literate, at(10));
    touch(&paths.definition, at(5));
    touch(&paths.implementation, at(20));

    let outcome = Unliterator::default()
        .process_module(dir.path(), "Main", &TracingReporter)
        .unwrap();
    assert_eq!(outcome, ModuleOutcome::Regenerated { lines: 1 });
    assert_eq!(
        fs::read_to_string(&paths.definition).unwrap(),
        "definition module Main\n"
    );
}

#[test]
fn test_fresh_module_is_left_alone() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Main", ">> module Main\n");
    fs::write(&paths.definition, "hand edited\n").unwrap();
    fs::write(&paths.implementation, "hand edited\n").unwrap();

    touch(&paths.literate, at(10));
    touch(&paths.definition, at(11));
    touch(&paths.implementation, at(11));

    let unlit = Unliterator::default();
    let outcome = unlit.process_module(dir.path(), "Main", &TracingReporter).unwrap();
    assert_eq!(outcome, ModuleOutcome::UpToDate);
    assert_eq!(fs::read_to_string(&paths.definition).unwrap(), "hand edited\n");

    // Deleting an output makes the module stale again.
    fs::remove_file(&paths.implementation).unwrap();
    let outcome = unlit.process_module(dir.path(), "Main", &TracingReporter).unwrap();
    assert_eq!(outcome, ModuleOutcome::Regenerated { lines: 1 });
    assert_eq!(
        fs::read_to_string(&paths.definition).unwrap(),
        "definition module Main\n"
    );
}

#[test]
fn test_single_convention_in_place() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Old", "< module Old\n< f :: Int\n> f = 1\n");

    let unlit = Unliterator::new(PrefixTable::for_convention(Convention::Single))
        .with_write_mode(WriteMode::InPlace);
    unlit.process_module(dir.path(), "Old", &TracingReporter).unwrap();

    assert_eq!(
        fs::read_to_string(&paths.definition).unwrap(),
        "definition module Old\nf :: Int\n\n"
    );
    assert_eq!(
        fs::read_to_string(&paths.implementation).unwrap(),
        "implementation module Old\nf :: Int\nf = 1\n"
    );
}

#[test]
fn test_empty_literate_source() {
    let dir = tempdir().unwrap();
    let paths = write_module(dir.path(), "Empty", "");

    let outcome = Unliterator::default()
        .process_module(dir.path(), "Empty", &TracingReporter)
        .unwrap();
    assert_eq!(outcome, ModuleOutcome::Regenerated { lines: 0 });
    assert_eq!(fs::read_to_string(&paths.definition).unwrap(), "");
    assert_eq!(fs::read_to_string(&paths.implementation).unwrap(), "");
}

#[test]
fn test_batch_follows_configured_order() {
    let dir = tempdir().unwrap();
    write_module(dir.path(), "B", ">> module B\n");
    write_module(dir.path(), "A.Inner", ">> module A.Inner\n");

    let report = cl_lit::process_all(dir.path(), ["B", "Plain", "A.Inner"], &TracingReporter)
        .unwrap();
    let order: Vec<&str> = report.outcomes.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(order, vec!["B", "Plain", "A.Inner"]);
    assert_eq!(report.regenerated(), vec!["B", "A.Inner"]);
    assert_eq!(report.outcomes[1].1, ModuleOutcome::NoSource);
}
