//! Getter tests against rendered fixture views

use domdex::{Config, Getter, LookupError, LookupKind, RenderedTemplate, Template};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TextModel {
    test_text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ArticleModel {
    title: String,
    author: String,
}

fn config() -> Config {
    // RUST_LOG=domdex=debug to see index and render logs
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Config::default().with_view_folder(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/views"))
}

fn render_text(view: &str) -> RenderedTemplate {
    let model = TextModel {
        test_text: "Hello World".to_string(),
    };
    Template::render(view, &config(), &model).unwrap()
}

fn render_article() -> RenderedTemplate {
    let model = ArticleModel {
        title: "A cool title".to_string(),
        author: "Aaron Buckley".to_string(),
    };
    Template::render("Article.cshtml", &config(), &model).unwrap()
}

fn too_many(kind: LookupKind, key: &str, count: usize) -> LookupError {
    LookupError::TooManyElementsFound {
        kind,
        key: key.to_string(),
        count,
    }
}

// ============================================================================
// GET ONLY
// ============================================================================

#[test]
fn get_only_by_id_can_get() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    let div = sut.get_only().by_id("div-1").unwrap().unwrap();
    assert_eq!(div.text(), "My Div One, Hello World");
}

#[test]
fn get_only_by_id_fails_when_more_than_one_found() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    assert_eq!(sut.get_only().by_id("div-1"), Err(too_many(LookupKind::Id, "div-1", 2)));
}

#[test]
fn get_only_by_id_is_none_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert_eq!(sut.get_only().by_id("not-a-real-id"), Ok(None));
}

#[test]
fn get_only_by_test_id_can_get() {
    let sut = render_article();
    let h2 = sut.get_only().by_test_id("first-h2").unwrap().unwrap();
    assert_eq!(h2.text(), "A cool title");
}

#[test]
fn get_only_by_test_id_fails_when_more_than_one_found() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    assert_eq!(
        sut.get_only().by_test_id("my-test-id"),
        Err(too_many(LookupKind::TestId, "my-test-id", 2))
    );
}

#[test]
fn get_only_by_test_id_is_none_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert_eq!(sut.get_only().by_test_id("not-a-real-id"), Ok(None));
}

#[test]
fn get_only_by_type_can_get() {
    let sut = render_article();
    let h1 = sut.get_only().by_type("h1").unwrap().unwrap();
    assert_eq!(h1.text(), "Now this is a story!");
}

#[test]
fn get_only_by_type_fails_when_more_than_one_found() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    assert!(matches!(
        sut.get_only().by_type("div"),
        Err(LookupError::TooManyElementsFound { kind: LookupKind::Type, .. })
    ));
}

#[test]
fn get_only_by_type_is_none_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert_eq!(sut.get_only().by_type("not-real"), Ok(None));
}

#[test]
fn get_only_by_partial_name_can_get() {
    let sut = render_article();
    let partial = sut.get_only().by_partial_name("_PartialName.cshtml").unwrap();
    assert!(partial.is_some());
}

#[test]
fn get_only_by_partial_name_fails_when_more_than_one_found() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    assert_eq!(
        sut.get_only().by_partial_name("common-partial"),
        Err(too_many(LookupKind::PartialName, "common-partial", 2))
    );
}

#[test]
fn get_only_by_partial_name_is_none_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert_eq!(sut.get_only().by_partial_name("not-real"), Ok(None));
}

#[test]
fn get_only_with_complex_classes() {
    let sut = render_text("ComplexClasses.cshtml");
    let div = sut.get_only().by_id("a-lot-of-classes").unwrap().unwrap();
    assert_eq!(div.classes(), vec!["cool-class-a", "another-class", "col-12"]);

    let repeated = sut.get_only().by_id("repeated-classes").unwrap().unwrap();
    assert_eq!(repeated.classes(), vec!["btn", "btn-primary", "btn"]);
}

#[test]
fn get_only_by_asp_attributes() {
    let sut = render_text("Login.cshtml");
    let form = sut.get_only().by_asp_action("Login").unwrap().unwrap();
    assert_eq!(form.tag(), "form");
    assert_eq!(sut.get_only().by_asp_action("Logout"), Ok(None));
    assert_eq!(
        sut.get_only().by_asp_controller("Account"),
        Err(too_many(LookupKind::AspController, "Account", 2))
    );
    assert!(sut.get_only().by_asp_for("Email").is_err());
}

// ============================================================================
// GET ALL
// ============================================================================

#[test]
fn get_all_by_id_returns_every_match_in_order() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    let texts: Vec<_> = sut.get_all().by_id("div-1").iter().map(|e| e.text()).collect();
    assert_eq!(
        texts,
        vec!["My Div One, Hello World", "My Other Div One, Hello World"]
    );
}

#[test]
fn get_all_by_id_is_empty_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert!(sut.get_all().by_id("not-a-real-id").is_empty());
}

#[test]
fn get_all_by_partial_name_includes_partial_content() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    let partials = sut.get_all().by_partial_name("common-partial");
    assert_eq!(partials.len(), 2);
    for partial in &partials {
        assert_eq!(partial.tag(), "partial");
        assert_eq!(partial.attribute("name"), Some("common-partial"));
        assert_eq!(partial.text(), "Shared content");
    }
}

#[test]
fn get_all_by_asp_for_spans_labels_and_inputs() {
    let sut = render_text("Login.cshtml");
    let tags: Vec<_> = sut.get_all().by_asp_for("Email").iter().map(|e| e.tag()).collect();
    assert_eq!(tags, vec!["label", "input"]);
    assert_eq!(sut.get_all().by_asp_action("Register")[0].text(), "Create an account");
}

#[test]
fn get_all_by_type_and_test_id() {
    let sut = render_article();
    assert_eq!(sut.get_all().by_type("p").len(), 1);
    assert_eq!(sut.get_all().by_test_id("article-footer")[0].text(), "Thanks for reading, Aaron Buckley");
}

// ============================================================================
// GET FIRST
// ============================================================================

#[test]
fn get_first_picks_document_order() {
    let sut = render_text("MultipleDuplicateIds.cshtml");
    let first = sut.get_first().by_id("div-1").unwrap();
    assert_eq!(first.text(), "My Div One, Hello World");
    assert_eq!(Some(first), sut.get_all().by_id("div-1").first().copied());
}

#[test]
fn get_first_is_none_when_nothing_found() {
    let sut = render_text("MultipleUniqueIds.cshtml");
    assert!(sut.get_first().by_type("table").is_none());
    assert!(sut.get_first().by_asp_controller("Home").is_none());
}

#[test]
fn get_first_by_asp_controller() {
    let sut = render_text("Login.cshtml");
    assert_eq!(sut.get_first().by_asp_controller("Account").unwrap().tag(), "form");
    assert_eq!(sut.get_first().by_asp_for("Password").unwrap().tag(), "label");
}
