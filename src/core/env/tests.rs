// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::current_env;
use crate::core::env::container::Env;
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);

    env.set("FOO", "baz");
    assert_eq!(env.get("FOO"), Some("baz"));
    assert!(!env.is_empty());
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    env2.set("KEY2", "value2");

    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "env1_KEY1": env1.get("KEY1"),
            "env1_KEY2": env1.get("KEY2"),
            "env2_KEY1": env2.get("KEY1"),
            "env2_KEY2": env2.get("KEY2"),
        }),
        @r#"
    env1_KEY1: value1
    env1_KEY2: ~
    env2_KEY1: value1
    env2_KEY2: value2
    "#
    );
}

#[test]
fn test_with_search_path_leaves_original() {
    let mut map = BTreeMap::new();
    map.insert("PATH".to_string(), "/home/user/bin:/usr/bin".to_string());
    map.insert("HOME".to_string(), "/home/user".to_string());
    let parent = Env::from_map(map);

    let child = parent.with_search_path("/bin:/usr/bin");

    assert_eq!(child.get("PATH"), Some("/bin:/usr/bin"));
    assert_eq!(child.get("HOME"), Some("/home/user"));
    assert_eq!(parent.get("PATH"), Some("/home/user/bin:/usr/bin"));
    assert_eq!(child.len(), 2);
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(env.get("PATH").is_some(), "PATH should exist in current environment");
}

#[test]
fn test_env_iter_is_sorted() {
    let mut env = Env::new();
    env.set("B", "2");
    env.set("A", "1");

    let vars: Vec<_> = env.iter().collect();
    assert_eq!(vars, [("A", "1"), ("B", "2")]);
}
