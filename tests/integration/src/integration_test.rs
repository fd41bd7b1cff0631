//! End-to-end integration test for the vertical slice
//!
//! This test exercises the complete flow: settings layers -> catalog load ->
//! product snapshot -> product view -> view model.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use shop_core::{Error, ProductView, Resolver, SettingsResolver, ViewPhase, ViewStatus};
use shop_meta::{Attributes, MalformedPolicy, MatchPolicy};
use shop_store::Catalog;
use shop_test_utils::{TestCatalog, attrs};

const STORE_YAML: &str = r#"
products:
  - id: 40
    name: Notebook ASUS Vivobook 15
    slug: vivobook-15
    configurations:
      - id: 401
        attributes: { ram: 16GB, ssd: 512GB, color: Plata }
        price: 1549.99
        stock: 3
        sku: VB15-16-512-P
        order_rank: 1
      - id: 400
        attributes: { ram: 8GB, ssd: 512GB, color: Plata }
        price: 1199.99
        originalPrice: 1299.99
        stock: 5
        sku: VB15-8-512-P
        order_rank: 0
      - id: 402
        attributes: { ram: 16GB, ssd: 1TB, color: Negro }
        price: 1749.99
        stock: 0
        sku: VB15-16-1TB-N
        order_rank: 2
      - id: 403
        attributes: { ram: 32GB, ssd: 1TB, color: Negro }
        price: 2199.99
        sku: VB15-32-1TB-N
        order_rank: 3
        active: false
"#;

/// Set up a project directory with a YAML catalog and project settings
fn setup_project(settings: &str) -> TestCatalog {
    let fixture = TestCatalog::new();
    fixture.write("data/store.yaml", STORE_YAML);
    fixture.write(".configurator/config.toml", settings);
    fixture
}

fn open_view(fixture: &TestCatalog, product: &str) -> ProductView {
    let resolver =
        SettingsResolver::with_global_config_dir(fixture.root(), fixture.root().join("global"));
    let settings = resolver.resolve().unwrap();
    let path = resolver.catalog_path(&settings).unwrap();

    let catalog = Catalog::load(&path)
        .unwrap()
        .with_policy(settings.catalog.malformed);
    let snapshot = catalog.snapshot(product).unwrap();
    ProductView::from_snapshot(snapshot, settings.resolver.match_policy)
}

#[test]
fn test_full_vertical_slice() {
    let fixture = setup_project(
        r#"
[catalog]
path = "data/store.yaml"
malformed = "reject"
"#,
    );

    let mut view = open_view(&fixture, "vivobook-15");
    assert_eq!(view.product(), Some("Notebook ASUS Vivobook 15"));
    assert_eq!(view.phase(), ViewPhase::Defaulted);

    // Records arrive ordered by rank, inactive row removed
    let ids: Vec<&str> = view.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["400", "401", "402"]);

    let model = view.view_model();
    assert_eq!(model.status, ViewStatus::Ready);
    let active = model.active.unwrap();
    assert_eq!(active.sku, "VB15-8-512-P");
    assert_eq!(active.price, Decimal::new(119999, 2));
    assert_eq!(active.discount_percent, Some(8));

    // Colour follows the chosen RAM
    assert!(!view.option_availability("color", "Negro"));
    assert_eq!(view.select("ram", "16GB"), ViewPhase::Matched);
    assert_eq!(view.require_active().unwrap().sku, "VB15-16-512-P");
    assert!(!view.option_availability("color", "Negro"));

    assert_eq!(view.select("ssd", "1TB"), ViewPhase::Unmatched);
    assert!(matches!(
        view.require_active(),
        Err(Error::NoMatchForSelection { .. })
    ));

    assert_eq!(view.select("color", "Negro"), ViewPhase::Matched);
    let record = view.require_active().unwrap();
    assert_eq!(record.sku, "VB15-16-1TB-N");
    assert!(!record.in_stock());
}

#[test]
fn test_settings_choose_strict_matching() {
    let fixture = setup_project(
        r#"
[catalog]
path = "data/store.yaml"

[resolver]
match_policy = "require-unique"
"#,
    );
    fixture.write(".configurator/config.local.toml", "[catalog]\nmalformed = \"skip\"\n");

    let mut view = open_view(&fixture, "40");
    assert_eq!(view.policy(), MatchPolicy::RequireUnique);

    // {ram: 16GB} alone is ambiguous between 401 and 402
    let resolver = Resolver::with_policy(view.records(), view.policy());
    assert!(resolver.find_match(&attrs(&[("ram", "16GB")])).is_none());
    assert!(resolver.is_value_available(&Attributes::new(), "ram", "16GB"));

    // Full attribute maps from the default stay unique
    assert_eq!(view.select("ram", "16GB"), ViewPhase::Matched);
    assert_eq!(view.require_active().unwrap().id.as_str(), "401");
}

#[test]
fn test_reject_policy_surfaces_malformed_rows() {
    let fixture = TestCatalog::new();
    let path = fixture.with_sample();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.policy(), MalformedPolicy::Skip);
    assert_eq!(catalog.snapshot("ideapad-3").unwrap().quarantined.len(), 1);

    let strict = catalog.with_policy(MalformedPolicy::Reject);
    let err = strict.snapshot("ideapad-3").unwrap_err();
    assert!(err.to_string().contains("missing price"));

    // A clean product is unaffected by the stricter policy
    assert_eq!(strict.snapshot("hp-15").unwrap().records.len(), 1);
}
