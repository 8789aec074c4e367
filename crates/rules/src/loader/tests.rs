//! Tests for the rule loader module.

use std::fs;

use tempfile::TempDir;

use super::*;

const NODE_RULES_YAML: &str = r#"
groups:
  - name: node
    rules:
      - alert: InstanceDown
        expr: up == 0
        for: 5m
"#;

const API_RULES_YAML: &str = r#"
groups:
  - name: api
    rules:
      - alert: HighLatency
        expr: service_latency{job="api"} > 0.5
"#;

fn temp_loader() -> (TempDir, RuleLoader) {
    let dir = TempDir::new().expect("create tempdir");
    (dir, RuleLoader::default())
}

fn input(path: &std::path::Path) -> String {
    path.to_str().expect("utf-8 temp path").to_string()
}

#[test]
fn load_rule_from_file() {
    let (dir, loader) = temp_loader();
    let path = dir.path().join("node.yml");
    fs::write(&path, NODE_RULES_YAML).unwrap();

    let set = loader.load_file(&path).unwrap().unwrap();
    assert_eq!(set.groups.len(), 1);
    assert_eq!(set.groups[0].rules[0].alert, "InstanceDown");
}

#[test]
fn load_file_without_groups_is_nothing_to_merge() {
    let (dir, loader) = temp_loader();

    let empty = dir.path().join("empty.yml");
    fs::write(&empty, "").unwrap();
    assert!(loader.load_file(&empty).unwrap().is_none());

    let comments = dir.path().join("comments.yml");
    fs::write(&comments, "# nothing here yet\n---\n").unwrap();
    assert!(loader.load_file(&comments).unwrap().is_none());

    let no_groups = dir.path().join("no-groups.yml");
    fs::write(&no_groups, "groups: []\n").unwrap();
    assert!(loader.load_file(&no_groups).unwrap().is_none());
}

#[test]
fn load_file_reports_parse_errors_with_path() {
    let (dir, loader) = temp_loader();
    let path = dir.path().join("broken.yml");
    fs::write(&path, "groups:\n  - name: [unterminated\n").unwrap();

    let err = loader.load_file(&path).unwrap_err();
    match err {
        RuleError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_file_reports_missing_file() {
    let (dir, loader) = temp_loader();
    let err = loader.load_file(&dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, RuleError::Io { .. }));
}

#[test]
fn resolve_directory_sorted_and_filtered() {
    let (dir, loader) = temp_loader();
    fs::write(dir.path().join("b.yml"), NODE_RULES_YAML).unwrap();
    fs::write(dir.path().join("a.yaml"), API_RULES_YAML).unwrap();
    fs::write(dir.path().join(".hidden.yml"), NODE_RULES_YAML).unwrap();
    fs::write(dir.path().join("readme.txt"), "not a rule").unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("c.yml"), NODE_RULES_YAML).unwrap();

    let paths = loader.resolve_inputs(&[input(dir.path())]).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.yaml", "b.yml"]);
    assert!(paths.iter().all(|p| p.is_absolute()));
}

#[test]
fn resolve_directory_recursive() {
    let dir = TempDir::new().unwrap();
    let loader = RuleLoader::new(LoaderOptions {
        recursive: true,
        ..Default::default()
    });
    fs::write(dir.path().join("a.yml"), API_RULES_YAML).unwrap();
    let sub = dir.path().join("team");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("b.yml"), NODE_RULES_YAML).unwrap();
    let hidden = dir.path().join(".git");
    fs::create_dir(&hidden).unwrap();
    fs::write(hidden.join("c.yml"), NODE_RULES_YAML).unwrap();

    let paths = loader.resolve_inputs(&[input(dir.path())]).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[1].ends_with("team/b.yml"));
}

#[test]
fn resolve_glob_pattern() {
    let (dir, loader) = temp_loader();
    fs::write(dir.path().join("team-a.rules.yml"), API_RULES_YAML).unwrap();
    fs::write(dir.path().join("team-b.rules.yml"), NODE_RULES_YAML).unwrap();
    fs::write(dir.path().join("other.yml"), NODE_RULES_YAML).unwrap();

    let pattern = format!("{}/*.rules.yml", input(dir.path()));
    let paths = loader.resolve_inputs(&[pattern]).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["team-a.rules.yml", "team-b.rules.yml"]);
}

#[test]
fn resolve_deduplicates_preserving_first_occurrence() {
    let (dir, loader) = temp_loader();
    let a = dir.path().join("a.yml");
    let b = dir.path().join("b.yml");
    fs::write(&a, API_RULES_YAML).unwrap();
    fs::write(&b, NODE_RULES_YAML).unwrap();

    let paths = loader
        .resolve_inputs(&[input(&b), input(dir.path())])
        .unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["b.yml", "a.yml"]);
}

#[test]
fn resolve_missing_inputs_fail() {
    let (dir, loader) = temp_loader();

    let missing = input(&dir.path().join("absent.yml"));
    assert!(matches!(
        loader.resolve_inputs(&[missing]),
        Err(RuleError::InputNotFound(_))
    ));

    let no_match = format!("{}/*.yml", input(dir.path()));
    assert!(matches!(
        loader.resolve_inputs(&[no_match]),
        Err(RuleError::InputNotFound(_))
    ));
}

#[test]
fn load_all_reports_each_file() {
    let (dir, loader) = temp_loader();
    let good = dir.path().join("good.yml");
    let empty = dir.path().join("empty.yml");
    let broken = dir.path().join("broken.yml");
    fs::write(&good, NODE_RULES_YAML).unwrap();
    fs::write(&empty, "").unwrap();
    fs::write(&broken, "groups: {").unwrap();

    let results = loader.load_all(&[good.clone(), empty, broken]);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].path, good);
    assert!(matches!(results[0].status, LoadStatus::Loaded { .. }));
    assert!(matches!(results[1].status, LoadStatus::Skipped { .. }));
    assert!(matches!(results[2].status, LoadStatus::Failed { .. }));
}

#[test]
fn parse_rule_set_blank_documents() {
    assert!(parse_rule_set("").unwrap().is_empty());
    assert!(parse_rule_set("\n  \n# comment\n").unwrap().is_empty());
    assert_eq!(parse_rule_set(NODE_RULES_YAML).unwrap().groups.len(), 1);
}
