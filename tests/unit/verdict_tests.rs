//! Unit tests for the pure `Verdict::decide` rule.

use issue_commander::models::repository::{RepositoryMetadata, RepositoryOwner};
use issue_commander::Verdict;

fn repo(owner: &str, fork: bool) -> RepositoryMetadata {
    RepositoryMetadata {
        owner: RepositoryOwner {
            login: owner.to_owned(),
        },
        fork,
    }
}

#[test]
fn owner_of_source_repo_is_authorized() {
    let verdict = Verdict::decide("amihaiemil", &repo("amihaiemil", false));
    assert_eq!(verdict, Verdict::Authorized);
    assert!(verdict.is_authorized());
    assert_eq!(verdict.label(), "authorized");
}

#[test]
fn fork_wins_over_matching_owner() {
    let verdict = Verdict::decide("amihaiemil", &repo("amihaiemil", true));
    assert_eq!(
        verdict,
        Verdict::Fork {
            owner: "amihaiemil".into()
        }
    );
    assert!(!verdict.is_authorized());
    assert_eq!(verdict.label(), "fork");
}

#[test]
fn different_author_is_not_owner() {
    let verdict = Verdict::decide("someone", &repo("amihaiemil", false));
    assert!(!verdict.is_authorized());
    assert_eq!(verdict.label(), "not_owner");
}

#[test]
fn comparison_is_exact() {
    assert!(!Verdict::decide("amihaiemil ", &repo("amihaiemil", false)).is_authorized());
    assert!(!Verdict::decide("Amihaiemil", &repo("amihaiemil", false)).is_authorized());
    assert!(!Verdict::decide("", &repo("amihaiemil", false)).is_authorized());
}
