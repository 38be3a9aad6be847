//! Integration tests for the paginated repository, driven by JSON page fixtures.

use async_trait::async_trait;

use menu_audit::error::RepositoryError;
use menu_audit::model::{self, MenuIndex, Page};
use menu_audit::repository::{MenuRepository, PageSource};
use menu_audit::validate::{self, ValidatorOptions};

/// Serves fixture pages by number; page 2 can be swapped for a malformed one.
struct FixturePages {
    malformed_second_page: bool,
}

#[async_trait]
impl PageSource for FixturePages {
    async fn fetch_page(&self, page: u64) -> Result<Page, RepositoryError> {
        let json = match page {
            1 => include_str!("fixtures/page_1.json"),
            2 if self.malformed_second_page => include_str!("fixtures/page_malformed.json"),
            2 => include_str!("fixtures/page_2.json"),
            3 => include_str!("fixtures/page_3.json"),
            _ => return Err(RepositoryError::HttpStatus { page, status: 404 }),
        };
        model::parse_page(json, page)
    }
}

#[tokio::test]
async fn fetch_all_then_validate() {
    let repo = MenuRepository::new(FixturePages {
        malformed_second_page: false,
    });
    let nodes = repo.fetch_all().await.expect("Should fetch all pages");
    assert_eq!(nodes.len(), 7);

    let index = MenuIndex::build(&nodes);
    let audit = validate::validate_forest(&index, ValidatorOptions::default());
    let report = audit.to_report();

    let valid: Vec<(i64, Vec<i64>)> = report
        .valid_menus
        .iter()
        .map(|m| (m.root_id, m.children.clone()))
        .collect();
    assert_eq!(valid, vec![(1, vec![3, 5]), (7, vec![])]);

    assert_eq!(report.invalid_menus.len(), 1);
    assert_eq!(report.invalid_menus[0].root_id, 2);
    assert_eq!(report.invalid_menus[0].children, vec![2, 4, 6]);
}

#[tokio::test]
async fn malformed_page_aborts_with_page_context() {
    let repo = MenuRepository::new(FixturePages {
        malformed_second_page: true,
    });
    let err = repo.fetch_all().await.unwrap_err();
    assert_eq!(err.page(), 2);
    assert!(matches!(err, RepositoryError::MalformedPage { .. }));
    assert!(err.to_string().contains("pagination.per_page"), "{}", err);
}
