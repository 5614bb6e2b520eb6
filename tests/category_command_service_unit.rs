use shop_directory::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use shop_directory::application::commands::locations::{
    CreateLocationCommand, UpdateLocationCommand,
};
use shop_directory::application::error::ApplicationError;
use shop_directory::domain::errors::DomainError;
use shop_directory::domain::slug::SlugScope;

mod support;

use support::{TestApp, test_admin};

fn is_conflict(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_))
    )
}

fn is_not_found(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
    )
}

#[tokio::test]
async fn create_assigns_a_slug_and_suffixes_lookalike_names() {
    let app = TestApp::new();
    let commands = &app.services.category_commands;

    let cafe = commands
        .create_category(&test_admin(), CreateCategoryCommand { name: "Café".into() })
        .await
        .unwrap();
    let caf = commands
        .create_category(&test_admin(), CreateCategoryCommand { name: "Caf".into() })
        .await
        .unwrap();

    assert_eq!(cafe.slug.as_deref(), Some("caf"));
    assert_eq!(caf.slug.as_deref(), Some("caf-1"));
}

#[tokio::test]
async fn create_rejects_blank_and_duplicate_names() {
    let app = TestApp::new();
    let commands = &app.services.category_commands;
    app.directory.seed_category("Books", Some("books"));

    let blank = commands
        .create_category(&test_admin(), CreateCategoryCommand { name: "   ".into() })
        .await
        .unwrap_err();
    assert!(
        matches!(blank, ApplicationError::Domain(DomainError::Validation(_))),
        "got {blank:?}"
    );

    let duplicate = commands
        .create_category(&test_admin(), CreateCategoryCommand { name: "Books".into() })
        .await
        .unwrap_err();
    assert!(is_conflict(&duplicate), "got {duplicate:?}");
    assert_eq!(app.directory.slug_writes(SlugScope::Category), 0);
}

#[tokio::test]
async fn rename_regenerates_the_slug_and_same_name_keeps_it() {
    let app = TestApp::new();
    let commands = &app.services.category_commands;
    let category = app.directory.seed_category("Toys", Some("toys"));

    let same = commands
        .update_category(
            &test_admin(),
            UpdateCategoryCommand {
                id: category.id.0,
                name: "Toys".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(same.slug.as_deref(), Some("toys"));

    let renamed = commands
        .update_category(
            &test_admin(),
            UpdateCategoryCommand {
                id: category.id.0,
                name: "Board Games".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug.as_deref(), Some("board-games"));
}

#[tokio::test]
async fn update_reports_missing_and_taken_names() {
    let app = TestApp::new();
    let commands = &app.services.category_commands;
    let toys = app.directory.seed_category("Toys", Some("toys"));
    app.directory.seed_category("Games", Some("games"));

    let missing = commands
        .update_category(
            &test_admin(),
            UpdateCategoryCommand {
                id: 999,
                name: "Anything".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(is_not_found(&missing), "got {missing:?}");

    let taken = commands
        .update_category(
            &test_admin(),
            UpdateCategoryCommand {
                id: toys.id.0,
                name: "Games".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(is_conflict(&taken), "got {taken:?}");
}

#[tokio::test]
async fn delete_is_refused_while_shops_use_the_category() {
    let app = TestApp::new();
    let dir = &app.directory;
    let used = dir.seed_category("Used", Some("used"));
    let unused = dir.seed_category("Unused", Some("unused"));
    let location = dir.seed_location("Centre", Some("centre"));
    dir.seed_customer("Shop", Some("shop"), used.id, location.id);
    let commands = &app.services.category_commands;

    let err = commands
        .delete_category(&test_admin(), DeleteCategoryCommand { id: used.id.0 })
        .await
        .unwrap_err();
    assert!(is_conflict(&err), "got {err:?}");

    commands
        .delete_category(&test_admin(), DeleteCategoryCommand { id: unused.id.0 })
        .await
        .unwrap();
    assert!(dir.category(unused.id).is_none());

    let gone = commands
        .delete_category(&test_admin(), DeleteCategoryCommand { id: unused.id.0 })
        .await
        .unwrap_err();
    assert!(is_not_found(&gone), "got {gone:?}");
}

#[tokio::test]
async fn public_listing_hides_unused_categories() {
    let app = TestApp::new();
    let dir = &app.directory;
    let used = dir.seed_category("Zoo Supplies", Some("zoo-supplies"));
    dir.seed_category("Antiques", Some("antiques"));
    let location = dir.seed_location("Centre", Some("centre"));
    dir.seed_customer("Shop", Some("shop"), used.id, location.id);
    let queries = &app.services.category_queries;

    let all: Vec<String> = queries
        .list_categories(true)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(all, ["Antiques", "Zoo Supplies"]);

    let public: Vec<String> = queries
        .list_categories(false)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(public, ["Zoo Supplies"]);
}

#[tokio::test]
async fn slug_lookup_finds_the_category_or_reports_not_found() {
    let app = TestApp::new();
    app.directory.seed_category("Books", Some("books"));
    let queries = &app.services.category_queries;

    let found = queries.get_category_by_slug("books".into()).await.unwrap();
    assert_eq!(found.name, "Books");

    let err = queries
        .get_category_by_slug("nope".into())
        .await
        .unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn locations_share_the_category_rules() {
    let app = TestApp::new();
    let commands = &app.services.location_commands;

    let created = commands
        .create_location(&test_admin(), CreateLocationCommand { name: "Old Town".into() })
        .await
        .unwrap();
    assert_eq!(created.slug.as_deref(), Some("old-town"));

    let duplicate = commands
        .create_location(&test_admin(), CreateLocationCommand { name: "Old Town".into() })
        .await
        .unwrap_err();
    assert!(is_conflict(&duplicate));

    let renamed = commands
        .update_location(
            &test_admin(),
            UpdateLocationCommand {
                id: created.id,
                name: "New Town".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug.as_deref(), Some("new-town"));
}

#[tokio::test]
async fn categories_in_location_are_distinct_and_sorted() {
    let app = TestApp::new();
    let dir = &app.directory;
    let food = dir.seed_category("Food", Some("food"));
    let books = dir.seed_category("Books", Some("books"));
    let toys = dir.seed_category("Toys", Some("toys"));
    let here = dir.seed_location("Here", Some("here"));
    let there = dir.seed_location("There", Some("there"));
    dir.seed_customer("A", Some("a"), food.id, here.id);
    dir.seed_customer("B", Some("b"), food.id, here.id);
    dir.seed_customer("C", Some("c"), books.id, here.id);
    dir.seed_customer("D", Some("d"), toys.id, there.id);

    let names: Vec<String> = app
        .services
        .location_queries
        .categories_in_location(here.id.0)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Books", "Food"]);

    let unknown = app
        .services
        .location_queries
        .categories_in_location(4242)
        .await
        .unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn create_fails_without_writing_when_the_slug_lookup_fails() {
    let app = TestApp::new();
    app.directory.fail_slug_lookup(SlugScope::Category);

    let err = app
        .services
        .category_commands
        .create_category(&test_admin(), CreateCategoryCommand { name: "Garden".into() })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Persistence(_))
    ));
    assert_eq!(app.directory.slug_writes(SlugScope::Category), 0);
    assert!(
        app.services
            .category_queries
            .list_categories(true)
            .await
            .unwrap()
            .is_empty()
    );
}
