use chrono::{Duration, TimeZone, Utc};
use notewarmer::{ReviewSession, SessionConfig, VisitStore, WeightPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn test_full_review_cycle() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["alpha.md", "beta.md", "gamma.md", "delta.md"] {
        fs::write(dir.path().join(name), "note body").unwrap();
    }
    let config = SessionConfig {
        folder: dir.path().to_path_buf(),
        ..SessionConfig::default()
    };

    // First run: nothing was ever visited, the store file gets created.
    let t0 = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();
    let mut session = ReviewSession::begin(&config, t0).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let picked = session.pick(2, WeightPolicy::Quadratic, &mut rng).unwrap();
    assert_eq!(picked.len(), 2);
    session.commit(&picked, t0).unwrap();
    assert!(dir.path().join("notewarmer.json").is_file());

    // Second run, a day later: the two visited notes are 1440 minutes
    // old, the other two inherit that maximum.
    let t1 = t0 + Duration::days(1);
    let session = ReviewSession::begin(&config, t1).unwrap();
    assert!(session.ages().iter().all(|a| a.age_minutes == 1440));

    // Visit everything, then immediately re-check: ages collapse to zero
    // and picking still works through the uniform fallback.
    let mut session = ReviewSession::begin(&config, t1).unwrap();
    let all: Vec<String> = session.notes().to_vec();
    session.commit(&all, t1).unwrap();

    let session = ReviewSession::begin(&config, t1).unwrap();
    assert!(session.ages().iter().all(|a| a.age_minutes == 0));
    let picked = session.pick(3, WeightPolicy::Log, &mut rng).unwrap();
    assert_eq!(picked.len(), 3);
}

#[test]
fn test_store_survives_between_runs_with_minute_precision() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("only.md"), "x").unwrap();
    let config = SessionConfig {
        folder: dir.path().to_path_buf(),
        ..SessionConfig::default()
    };

    let t0 = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 30).unwrap();
    let mut session = ReviewSession::begin(&config, t0).unwrap();
    session.commit(&["only.md".to_owned()], t0).unwrap();

    let store = VisitStore::load(&dir.path().join("notewarmer.json")).unwrap();
    assert_eq!(store.last_visit("only.md"), Some(t0));

    // 90 seconds later the note is one whole minute old.
    let ages = store.ages_in_minutes(t0 + Duration::seconds(90));
    assert_eq!(ages["only.md"], 1);
}

#[test]
fn test_old_notes_dominate_the_sample() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["stale.md", "fresh.md"] {
        fs::write(dir.path().join(name), "x").unwrap();
    }
    let config = SessionConfig {
        folder: dir.path().to_path_buf(),
        ..SessionConfig::default()
    };

    let t0 = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();
    let mut session = ReviewSession::begin(&config, t0).unwrap();
    session.commit(&["stale.md".to_owned()], t0).unwrap();

    // A week later, visit only the fresh note.
    let t1 = t0 + Duration::days(7);
    let mut session = ReviewSession::begin(&config, t1).unwrap();
    session.commit(&["fresh.md".to_owned()], t1).unwrap();

    // Another hour on, the stale note is overwhelmingly more likely.
    let t2 = t1 + Duration::hours(1);
    let session = ReviewSession::begin(&config, t2).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut stale_wins = 0;
    for _ in 0..200 {
        let picked = session.pick(1, WeightPolicy::Quadratic, &mut rng).unwrap();
        if picked[0] == "stale.md" {
            stale_wins += 1;
        }
    }
    assert!(stale_wins > 190, "stale note picked only {stale_wins}/200 times");
}
