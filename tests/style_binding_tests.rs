use toerings::element::{Element, InlineStyle};
use toerings::style::{StyleMap, StyleTarget, StyleVars};

fn custom_props(element: &Element) -> Vec<(String, String)> {
    element
        .style()
        .custom_properties()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

fn props(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

#[test]
fn attach_sets_one_custom_property_per_entry() {
    let mut element = Element::new("div");
    let _vars = StyleVars::attach(&mut element, StyleMap::new().with("a", 1).with("b", "2px"));

    assert_eq!(custom_props(&element), props(&[("--a", "1"), ("--b", "2px")]));
}

#[test]
fn update_overwrites_adds_and_removes() {
    let mut element = Element::new("div");
    {
        let mut vars = StyleVars::attach(&mut element, StyleMap::new().with("a", "1").with("b", "2"));
        vars.update(StyleMap::new().with("b", "3").with("c", "4"));
        assert_eq!(vars.applied().len(), 2);
    }

    assert_eq!(element.style().property("--a"), None);
    assert_eq!(element.style().property("--b"), Some("3"));
    assert_eq!(element.style().property("--c"), Some("4"));
    assert_eq!(element.style().custom_properties().count(), 2);
}

#[test]
fn update_with_same_mapping_is_idempotent() {
    let mut vars = StyleVars::attach(Element::new("div"), StyleMap::new().with("a", "1"));
    let map = StyleMap::new().with("a", "2").with("b", "3");

    vars.update(map.clone());
    let first = custom_props(vars.target());
    vars.update(map);
    assert_eq!(custom_props(vars.target()), first);
}

#[test]
fn empty_update_removes_everything_previously_set() {
    let mut vars = StyleVars::attach(
        Element::new("div"),
        StyleMap::new().with("a", "1").with("b", "2"),
    );
    vars.update(StyleMap::new());
    assert_eq!(vars.target().style().custom_properties().count(), 0);
}

#[test]
fn disjoint_and_superset_updates_track_the_latest_keys() {
    let mut vars = StyleVars::attach(InlineStyle::new(), StyleMap::new().with("a", "1"));

    vars.update(StyleMap::new().with("x", "9"));
    assert_eq!(vars.target().property("--a"), None);
    assert_eq!(vars.target().property("--x"), Some("9"));

    vars.update(StyleMap::new().with("x", "9").with("y", "8").with("z", "7"));
    let names: Vec<&str> = vars.target().custom_properties().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["--x", "--y", "--z"]);
}

#[test]
fn values_are_passed_through_verbatim() {
    let mut vars = StyleVars::attach(InlineStyle::new(), StyleMap::new());
    vars.update(StyleMap::new().with("broken", "}; not css"));
    assert_eq!(vars.target().property("--broken"), Some("}; not css"));
}

#[test]
fn binder_leaves_attributes_and_plain_declarations_alone() {
    let mut element = Element::new("svg").with_attribute("class", "ring");
    element.style_mut().set_property("color", "red");

    let mut vars = StyleVars::attach(&mut element, StyleMap::new().with("a", "1"));
    vars.update(StyleMap::new());
    drop(vars);

    assert_eq!(element.attribute("class"), Some("ring"));
    assert_eq!(element.attributes().len(), 1);
    assert_eq!(element.style().property("color"), Some("red"));
}

#[test]
fn detach_removes_owned_properties_and_returns_target() {
    let vars = StyleVars::attach(InlineStyle::new(), StyleMap::new().with("a", "1").with("b", "2"));
    let style = vars.detach();
    assert!(style.is_empty());
    assert_eq!(style.css_text(), "");
}

#[test]
fn css_text_serializes_in_insertion_order() {
    let vars = StyleVars::attach(InlineStyle::new(), StyleMap::new().with("a", "1").with("b", "2"));
    assert_eq!(vars.target().css_text(), "--a: 1; --b: 2;");
}

#[test]
fn removing_an_attribute_leaves_custom_properties_bound() {
    let mut element = Element::new("div").with_attribute("data-plot", "plot-1");
    let mut vars = StyleVars::attach(&mut element, StyleMap::new().with("a", "1"));
    vars.update(StyleMap::new().with("a", "2"));
    drop(vars);

    assert_eq!(element.remove_attribute("data-plot").as_deref(), Some("plot-1"));
    assert_eq!(element.remove_attribute("data-plot"), None);
    assert!(element.attributes().is_empty());
    assert_eq!(element.style().property("--a"), Some("2"));
}
