//! Storefront scenarios run against the same catalog in every document format

use pretty_assertions::assert_eq;
use rstest::rstest;
use shop_core::{ProductView, ViewPhase, ViewStatus};
use shop_meta::MatchPolicy;
use shop_store::Catalog;
use shop_test_utils::TestCatalog;

const JSON: &str = r#"{
  "products": [
    {
      "id": 1,
      "name": "Notebook Lenovo IdeaPad 3",
      "configurations": [
        {"id": 1, "attributes": {"ram": "8GB", "ssd": "512GB"}, "price": 1299},
        {"id": 2, "attributes": {"ram": "16GB", "ssd": "512GB"}, "price": 1799},
        {"id": 3, "attributes": {"ram": "16GB", "ssd": "1TB"}, "price": 1999}
      ]
    },
    {"id": 2, "name": "Notebook HP 15", "configurations": [
      {"id": 20, "attributes": {"color": "Negro"}, "price": 100}
    ]},
    {"id": 3, "name": "MacBook Air", "configurations": []}
  ]
}"#;

const TOML: &str = r#"
[[products]]
id = 1
name = "Notebook Lenovo IdeaPad 3"

[[products.configurations]]
id = 1
price = 1299
attributes = { ram = "8GB", ssd = "512GB" }

[[products.configurations]]
id = 2
price = 1799
attributes = { ram = "16GB", ssd = "512GB" }

[[products.configurations]]
id = 3
price = 1999
attributes = { ram = "16GB", ssd = "1TB" }

[[products]]
id = 2
name = "Notebook HP 15"

[[products.configurations]]
id = 20
price = 100
attributes = { color = "Negro" }

[[products]]
id = 3
name = "MacBook Air"
configurations = []
"#;

const YAML: &str = r#"
products:
  - id: 1
    name: Notebook Lenovo IdeaPad 3
    configurations:
      - { id: 1, attributes: { ram: 8GB, ssd: 512GB }, price: 1299 }
      - { id: 2, attributes: { ram: 16GB, ssd: 512GB }, price: 1799 }
      - { id: 3, attributes: { ram: 16GB, ssd: 1TB }, price: 1999 }
  - id: 2
    name: Notebook HP 15
    configurations:
      - { id: 20, attributes: { color: Negro }, price: 100 }
  - id: 3
    name: MacBook Air
    configurations: []
"#;

/// Load `product` from the catalog written as `name`, into a fresh view
fn view_for(fixture: &TestCatalog, name: &str, content: &str, product: &str) -> ProductView {
    let path = fixture.write(name, content);
    let snapshot = Catalog::load(&path).unwrap().snapshot(product).unwrap();
    ProductView::from_snapshot(snapshot, MatchPolicy::FirstMatch)
}

fn active_id(view: &ProductView) -> Option<String> {
    view.active_record().map(|r| r.id.to_string())
}

#[rstest]
#[case::json("catalog.json", JSON)]
#[case::toml("catalog.toml", TOML)]
#[case::yaml("catalog.yaml", YAML)]
fn test_ram_ssd_walkthrough(#[case] name: &str, #[case] content: &str) {
    let fixture = TestCatalog::new();
    let mut view = view_for(&fixture, name, content, "1");

    assert_eq!(view.phase(), ViewPhase::Defaulted);
    assert_eq!(active_id(&view), Some("1".to_string()));

    view.select("ram", "16GB");
    assert_eq!(active_id(&view), Some("2".to_string()));

    view.select("ssd", "1TB");
    assert_eq!(active_id(&view), Some("3".to_string()));

    let options = view.available_options();
    assert_eq!(options["ram"], vec!["8GB", "16GB"]);
    assert_eq!(options["ssd"], vec!["1TB", "512GB"]);
}

#[rstest]
#[case::json("catalog.json", JSON)]
#[case::toml("catalog.toml", TOML)]
#[case::yaml("catalog.yaml", YAML)]
fn test_product_without_configurations(#[case] name: &str, #[case] content: &str) {
    let fixture = TestCatalog::new();
    let mut view = view_for(&fixture, name, content, "3");

    assert_eq!(view.phase(), ViewPhase::Empty);
    assert_eq!(view.select("ram", "8GB"), ViewPhase::Empty);

    let model = view.view_model();
    assert_eq!(model.status, ViewStatus::NoConfigurations);
    assert!(model.options.is_empty());
    assert!(model.active.is_none());
}

#[rstest]
#[case::json("catalog.json", JSON)]
#[case::toml("catalog.toml", TOML)]
#[case::yaml("catalog.yaml", YAML)]
fn test_attribute_missing_from_every_record(#[case] name: &str, #[case] content: &str) {
    let fixture = TestCatalog::new();
    let mut view = view_for(&fixture, name, content, "2");

    assert_eq!(active_id(&view), Some("20".to_string()));
    assert!(!view.option_availability("ram", "8GB"));

    assert_eq!(view.select("ram", "8GB"), ViewPhase::Unmatched);
    assert_eq!(view.view_model().status, ViewStatus::NoMatch);

    // Going back to a value the record carries does not clear the stray key
    assert_eq!(view.select("color", "Negro"), ViewPhase::Unmatched);

    // A reload starts over from the default
    let mut reloaded = view_for(&fixture, name, content, "2");
    assert_eq!(reloaded.select("color", "Negro"), ViewPhase::Matched);
}
