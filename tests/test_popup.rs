use std::time::{Duration, Instant};

use star_catcher::compute::PopupRequest;
use star_catcher::config::Tint;
use star_catcher::popup::{PopupBoard, PopupId};

const LIFE: Duration = Duration::from_millis(300);

#[test]
fn popup_lives_until_its_deadline() {
    let t0 = Instant::now();
    let mut board = PopupBoard::new(LIFE);
    board.spawn("+10", Tint::Green, 100, 80, t0);

    assert_eq!(board.expire_due(t0 + Duration::from_millis(299)), 0);
    assert_eq!(board.len(), 1);
    assert_eq!(board.expire_due(t0 + LIFE), 1);
    assert!(board.is_empty());
}

#[test]
fn popups_expire_independently() {
    let t0 = Instant::now();
    let mut board = PopupBoard::new(LIFE);
    board.spawn("+10", Tint::Green, 0, 0, t0);
    let late = board.spawn("-5", Tint::Red, 0, 0, t0 + Duration::from_millis(200));

    assert_eq!(board.expire_due(t0 + Duration::from_millis(350)), 1);
    assert_eq!(board.iter().map(|p| p.id).collect::<Vec<_>>(), vec![late]);
    assert_eq!(board.next_deadline(), Some(t0 + Duration::from_millis(500)));
}

#[test]
fn removing_twice_is_a_no_op() {
    let t0 = Instant::now();
    let mut board = PopupBoard::new(LIFE);
    let id = board.spawn("+10", Tint::Green, 0, 0, t0);

    assert!(board.remove(id));
    assert!(!board.remove(id));
    assert!(!board.remove(id));
    assert!(board.is_empty());
}

#[test]
fn removal_after_clear_is_a_no_op() {
    let t0 = Instant::now();
    let mut board = PopupBoard::new(LIFE);
    let id = board.spawn("+10", Tint::Green, 0, 0, t0);
    board.clear();

    assert!(!board.remove(id));
    assert!(!board.remove(PopupId(12345)));
    assert_eq!(board.expire_due(t0 + LIFE * 10), 0);
}

#[test]
fn spawn_request_copies_text_colour_and_position() {
    let t0 = Instant::now();
    let mut board = PopupBoard::new(LIFE);
    board.spawn_request(PopupRequest { text: "-5".into(), tint: Tint::Red, x: 12, y: 34 }, t0);

    let p = board.iter().next().unwrap();
    assert_eq!(p.text, "-5");
    assert_eq!(p.tint, Tint::Red);
    assert_eq!((p.x, p.y), (12, 34));
    assert_eq!(p.expires_at, t0 + LIFE);
}
