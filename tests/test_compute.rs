use star_catcher::compute::*;
use star_catcher::config::{GameConfig, Tint};
use star_catcher::entities::*;
use star_catcher::store::EntityStore;

fn setup() -> (EntityStore, Catcher, GameSession, GameConfig) {
    let config = GameConfig::default();
    let mut catcher = Catcher::centered(&config);
    catcher.set_x(280); // spans [280, 360], top edge at y=460
    (EntityStore::new(config.sparkle_size), catcher, GameSession::new(), config)
}

fn star(x: i32, y: i32, category: Category, speed: i32) -> Spawn {
    Spawn { x, y, category, speed }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_each_object_by_its_speed() {
    let (mut store, catcher, mut session, config) = setup();
    let a = store.insert(star(50, 10, Category::Favorable, 3));
    let b = store.insert(star(500, 100, Category::Unfavorable, 7));

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert!(out.removed.is_empty());
    assert_eq!(store.get(a).unwrap().y(), 13);
    assert_eq!(store.get(b).unwrap().y(), 107);
    assert_eq!(store.get(a).unwrap().speed(), 3);
}

#[test]
fn advance_on_empty_store_is_a_no_op() {
    let (mut store, catcher, mut session, config) = setup();
    let out = advance(&mut store, &catcher, &mut session, &config);
    assert_eq!(out, StepOutcome::default());
    assert_eq!(session.score, 0);
}

// ── Catching ──────────────────────────────────────────────────────────────────

#[test]
fn favorable_catch_scores_ten_and_removes() {
    let (mut store, catcher, mut session, config) = setup();
    // 448 + 5 = 453; lower edge 453 + 7 = 460 reaches the catcher top
    let id = store.insert(star(300, 448, Category::Favorable, 5));

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(session.score, 10);
    assert_eq!(out.score_delta, 10);
    assert_eq!(out.caught, vec![id]);
    assert_eq!(out.removed, vec![id]);
    assert!(store.is_empty());
    assert_eq!(
        out.popups,
        vec![PopupRequest { text: "+10".into(), tint: Tint::Green, x: 300, y: 433 }]
    );
}

#[test]
fn unfavorable_catch_drives_score_negative() {
    let (mut store, catcher, mut session, config) = setup();
    store.insert(star(300, 450, Category::Unfavorable, 5));

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(session.score, -5);
    assert_eq!(out.popups[0].text, "-5");
    assert_eq!(out.popups[0].tint, Tint::Red);
}

#[test]
fn object_one_unit_short_of_catcher_is_not_caught() {
    let (mut store, catcher, mut session, config) = setup();
    // 447 + 5 = 452; lower edge 459 < 460
    let id = store.insert(star(300, 447, Category::Favorable, 5));
    let out = advance(&mut store, &catcher, &mut session, &config);
    assert!(out.caught.is_empty());
    assert_eq!(store.get(id).unwrap().y(), 452);
}

#[test]
fn catch_requires_horizontal_overlap() {
    let (mut store, catcher, mut session, config) = setup();
    store.insert(star(279, 455, Category::Favorable, 5));
    store.insert(star(361, 455, Category::Favorable, 5));
    let edge_left = store.insert(star(280, 455, Category::Favorable, 5));
    let edge_right = store.insert(star(360, 455, Category::Favorable, 5));

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(out.caught, vec![edge_left, edge_right]);
    assert_eq!(store.len(), 2);
    assert_eq!(session.score, 20);
}

#[test]
fn simultaneous_catches_all_score_once() {
    let (mut store, catcher, mut session, config) = setup();
    store.insert(star(290, 455, Category::Favorable, 5));
    store.insert(star(320, 455, Category::Unfavorable, 5));
    store.insert(star(350, 455, Category::Favorable, 5));

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(out.caught.len(), 3);
    assert_eq!(out.popups.len(), 3);
    assert_eq!(session.score, 15);
    assert!(store.is_empty());

    // Nothing left to score on the next tick
    let again = advance(&mut store, &catcher, &mut session, &config);
    assert!(again.caught.is_empty());
    assert_eq!(session.score, 15);
}

#[test]
fn objects_passing_below_catcher_band_are_still_caught_when_overlapping() {
    let (mut store, catcher, mut session, config) = setup();
    // Deep below the catcher's top edge but still horizontally inside
    store.insert(star(300, 490, Category::Favorable, 5));
    let out = advance(&mut store, &catcher, &mut session, &config);
    assert_eq!(out.caught.len(), 1);
}

// ── Floor exit ────────────────────────────────────────────────────────────────

#[test]
fn object_exits_once_top_edge_passes_floor() {
    let (mut store, catcher, mut session, config) = setup();
    // far from the catcher horizontally
    let gone = store.insert(star(50, 503, Category::Favorable, 5)); // 508 - 7 = 501 > 500
    let stays = store.insert(star(60, 502, Category::Favorable, 5)); // 507 - 7 = 500, not > 500

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(out.exited, vec![gone]);
    assert_eq!(out.removed, vec![gone]);
    assert!(out.popups.is_empty());
    assert_eq!(session.score, 0);
    assert!(store.get(stays).is_some());
}

#[test]
fn catch_wins_over_floor_exit_in_the_same_tick() {
    let (mut store, catcher, mut session, config) = setup();
    let id = store.insert(star(300, 520, Category::Unfavorable, 5));
    let obj = store.get(id).unwrap().clone();
    assert_eq!(resolve(&obj, &catcher, &config), Some(Resolution::Caught));

    let out = advance(&mut store, &catcher, &mut session, &config);
    assert_eq!(out.caught, vec![id]);
    assert!(out.exited.is_empty());
    assert_eq!(session.score, -5);
}

#[test]
fn store_size_after_step_matches_removals() {
    let (mut store, catcher, mut session, config) = setup();
    store.insert(star(300, 455, Category::Favorable, 5)); // caught
    store.insert(star(50, 600, Category::Favorable, 5)); // exits
    store.insert(star(50, 10, Category::Unfavorable, 5)); // stays
    let before = store.len();

    let out = advance(&mut store, &catcher, &mut session, &config);

    assert_eq!(store.len(), before - out.removed.len());
    assert_eq!(store.len(), 1);
}

// ── Tiers ─────────────────────────────────────────────────────────────────────

#[test]
fn tiers_follow_thresholds() {
    let config = GameConfig::default();
    assert_eq!(select_tier(150, &config), ResultTier::Top);
    assert_eq!(select_tier(100, &config), ResultTier::Top);
    assert_eq!(select_tier(99, &config), ResultTier::Second);
    assert_eq!(select_tier(50, &config), ResultTier::Second);
    assert_eq!(select_tier(49, &config), ResultTier::Third);
    assert_eq!(select_tier(0, &config), ResultTier::Third);
    assert_eq!(select_tier(-1, &config), ResultTier::Lowest);
    assert_eq!(select_tier(-10, &config), ResultTier::Lowest);
}
