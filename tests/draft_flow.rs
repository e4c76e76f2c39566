//! End-to-end draft persistence flow
//!
//! Exercises the public surface the portal forms use: load on mount, save
//! on change, clear after submission, across simulated app restarts.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::tempdir;

use draftstore::{
    ApplicationDraft, Database, DraftKey, DraftKind, DraftSession, DraftStore, InvestmentDraft,
    ProgramDraft, StaticIdentity,
};

fn open_store(dir: &tempfile::TempDir) -> DraftStore {
    let db = Database::open(dir.path().join("drafts.db")).unwrap();
    DraftStore::new(&db)
}

#[test]
fn program_draft_lifecycle() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);
    let key = DraftKey::new(DraftKind::Program, Some("u42"), None);

    // User fills in a title; the form saves on a debounced change
    let draft = ProgramDraft {
        title: "Test Program".to_string(),
        ..Default::default()
    };
    store.save(&key, &draft);

    // App restart: fresh handles over the same database file
    drop(store);
    let store = open_store(&dir);
    let restored: ProgramDraft = store.load(&key).unwrap();
    assert_eq!(restored.title, "Test Program");

    // Successful submission clears the draft
    store.clear(&key);
    assert_eq!(store.load::<ProgramDraft>(&key), None);
}

#[test]
fn drafts_survive_restart_per_kind_and_user() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);

    store.save(
        &DraftKey::new(DraftKind::Program, Some("u1"), None),
        &ProgramDraft {
            title: "Program by u1".to_string(),
            ..Default::default()
        },
    );
    store.save(
        &DraftKey::new(DraftKind::Investment, Some("u1"), None),
        &InvestmentDraft {
            title: "Investment by u1".to_string(),
            ..Default::default()
        },
    );

    drop(store);
    let store = open_store(&dir);

    let program: ProgramDraft = store
        .load(&DraftKey::new(DraftKind::Program, Some("u1"), None))
        .unwrap();
    let investment: InvestmentDraft = store
        .load(&DraftKey::new(DraftKind::Investment, Some("u1"), None))
        .unwrap();
    assert_eq!(program.title, "Program by u1");
    assert_eq!(investment.title, "Investment by u1");

    // Nothing leaks to another user
    let other: Option<ProgramDraft> =
        store.load(&DraftKey::new(DraftKind::Program, Some("u2"), None));
    assert_eq!(other, None);
}

#[test]
fn login_switches_scope_without_migrating_anon_drafts() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);

    let anon = DraftSession::new(store.clone(), Arc::new(StaticIdentity::anonymous()));
    anon.save(&ProgramDraft {
        title: "Anonymous work".to_string(),
        ..Default::default()
    });

    // After login the session computes user-scoped keys; the anonymous
    // draft stays where it was and a fresh save owns the new key
    let signed_in = DraftSession::new(store.clone(), Arc::new(StaticIdentity::user("u42")));
    assert_eq!(signed_in.load::<ProgramDraft>(), None);

    signed_in.save(&ProgramDraft {
        title: "Authenticated work".to_string(),
        ..Default::default()
    });

    assert_eq!(
        anon.load::<ProgramDraft>().unwrap().title,
        "Anonymous work"
    );
    assert_eq!(
        signed_in.load::<ProgramDraft>().unwrap().title,
        "Authenticated work"
    );
}

#[test]
fn application_drafts_keyed_by_parent_program() {
    let dir = tempdir().unwrap();
    let session = DraftSession::new(open_store(&dir), Arc::new(StaticIdentity::user("u7")));

    let draft = ApplicationDraft {
        description: "Proposal for program one".to_string(),
        ..Default::default()
    };
    session.save_application("prog-1", &draft);

    assert_eq!(session.load_application("prog-1"), Some(draft));
    assert_eq!(session.load_application("prog-2"), None);
}

fn arb_program_draft() -> impl Strategy<Value = ProgramDraft> {
    (
        ".*",
        ".*",
        ".*",
        proptest::option::of(0i64..4_102_444_800i64),
        proptest::option::of("[0-9]{1,6} [A-Z]{3,5}"),
        proptest::collection::vec("[a-z]{1,12}", 0..5),
        proptest::collection::vec("https://[a-z]{3,10}\\.example", 0..4),
    )
        .prop_map(
            |(title, summary, description, deadline, reward, keywords, links)| ProgramDraft {
                title,
                summary,
                description,
                deadline: deadline.and_then(|s| chrono::DateTime::from_timestamp(s, 0)),
                reward,
                keywords,
                links,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Round-trip: whatever the form held comes back deep-equal after a
    // save/load pair, for arbitrary field contents
    #[test]
    fn saved_drafts_roundtrip(draft in arb_program_draft(), user in "[a-zA-Z0-9]{1,16}") {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let key = DraftKey::new(DraftKind::Program, Some(&user), None);

        store.save(&key, &draft);
        let loaded: ProgramDraft = store.load(&key).expect("saved draft should load");
        prop_assert_eq!(loaded, draft);
    }

    // Overwrite: the second save fully replaces the first
    #[test]
    fn resave_replaces_previous(first in arb_program_draft(), second in arb_program_draft()) {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        let key = DraftKey::new(DraftKind::Program, Some("u1"), None);

        store.save(&key, &first);
        store.save(&key, &second);

        let loaded: ProgramDraft = store.load(&key).expect("saved draft should load");
        prop_assert_eq!(loaded, second);
    }
}
