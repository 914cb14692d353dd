use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct FakePage {
    nodes: HashMap<&'static str, Vec<&'static str>>,
}

impl FakePage {
    fn with(mut self, selector: &'static str, nodes: &[&'static str]) -> Self {
        self.nodes.insert(selector, nodes.to_vec());
        self
    }
}

impl Probe for FakePage {
    type Node = &'static str;

    fn query(&self, selector: &str) -> Vec<Self::Node> {
        self.nodes.get(selector).cloned().unwrap_or_default()
    }
}

#[derive(Default)]
struct Log {
    installed: RefCell<Vec<String>>,
}

type TestFeature = Feature<FakePage, Log, String>;

fn record(log: &Log, roots: Vec<&'static str>) -> Result<(), String> {
    log.installed.borrow_mut().push(roots.join(","));
    Ok(())
}

fn fail(_: &Log, _: Vec<&'static str>) -> Result<(), String> {
    Err("setup failed".to_string())
}

fn needs_outline(page: &FakePage, _: &[&'static str]) -> bool {
    !page.query(".cursor-outline").is_empty()
}

#[test]
fn installs_features_whose_root_exists() {
    let page = FakePage::default().with(".btn", &["a", "b"]);
    let log = Log::default();
    let features: [TestFeature; 1] = [Feature::new("magnetic", ".btn", record)];

    let reports = run(&page, &log, &features);

    assert_eq!(reports, vec![Report { name: "magnetic", outcome: Outcome::Installed { roots: 2 } }]);
    assert_eq!(*log.installed.borrow(), vec!["a,b".to_string()]);
}

#[test]
fn missing_root_is_skipped_without_setup() {
    let page = FakePage::default();
    let log = Log::default();
    let features: [TestFeature; 1] = [Feature::new("nav", ".mobile-toggle", record)];

    let reports = run(&page, &log, &features);

    assert_eq!(reports[0].outcome, Outcome::Skipped(Skip::Missing));
    assert!(log.installed.borrow().is_empty());
}

#[test]
fn predicate_can_reject_page() {
    let page = FakePage::default().with(".cursor-dot", &["dot"]);
    let log = Log::default();
    let features: [TestFeature; 1] = [Feature::new("cursor", ".cursor-dot", record).when(needs_outline)];

    assert_eq!(run(&page, &log, &features)[0].outcome, Outcome::Skipped(Skip::NotApplicable));

    let page = page.with(".cursor-outline", &["ring"]);
    assert_eq!(run(&page, &log, &features)[0].outcome, Outcome::Installed { roots: 1 });
}

#[test]
fn failing_setup_does_not_stop_others() {
    let page = FakePage::default().with(".a", &["a"]).with(".b", &["b"]);
    let log = Log::default();
    let features: [TestFeature; 2] = [Feature::new("broken", ".a", fail), Feature::new("fine", ".b", record)];

    let reports = run(&page, &log, &features);

    assert_eq!(reports[0].outcome, Outcome::Failed("setup failed".to_string()));
    assert_eq!(reports[1].outcome, Outcome::Installed { roots: 1 });
}

#[test]
fn reports_follow_list_order() {
    let page = FakePage::default().with(".x", &["x"]);
    let log = Log::default();
    let features: [TestFeature; 3] =
        [Feature::new("one", ".x", record), Feature::new("two", ".y", record), Feature::new("three", ".x", record)];

    let names: Vec<_> = run(&page, &log, &features).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

#[test]
fn document_rooted_feature_runs_without_its_controls() {
    let page = FakePage::default().with("html", &["root"]);
    let log = Log::default();
    let features: [TestFeature; 2] =
        [Feature::new("theme-preference", "html", record), Feature::new("theme", ".theme-toggle", record)];

    let reports = run(&page, &log, &features);

    assert_eq!(reports[0].outcome, Outcome::Installed { roots: 1 });
    assert_eq!(reports[1].outcome, Outcome::Skipped(Skip::Missing));
    assert_eq!(*log.installed.borrow(), vec!["root".to_string()]);
}
