// License: MIT

use crate::core::action::Action;
use crate::core::config::TrackerConfig;
use crate::core::events::Event;
use crate::core::session::{Mode, Session};
use crate::core::tracker::Tracker;

const SEC: u64 = 1_000;

fn tracker(break_ms: u64, reminders: Vec<u64>) -> Tracker {
    Tracker::new(TrackerConfig::new(SEC, break_ms, reminders).unwrap())
}

fn crossed(actions: &[Action]) -> Vec<u64> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::ThresholdCrossed { threshold_ms } => Some(*threshold_ms),
            _ => None,
        })
        .collect()
}

/// Apply `n` ticks and collect every threshold crossing, tagged with the
/// tick number it fired on.
fn run_ticks(tr: &Tracker, session: &mut Session, n: u64) -> Vec<(u64, u64)> {
    let mut fired = Vec::new();
    for i in 1..=n {
        let actions = tr.handle_event(session, Event::Tick { now_ms: i * SEC });
        for t in crossed(&actions) {
            fired.push((i, t));
        }
    }
    fired
}

#[test]
fn active_ticks_accumulate_exactly() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 100);

    assert_eq!(session.mode(), Mode::Active);
    assert_eq!(session.active_ms(), 100 * SEC);
}

#[test]
fn snapshot_emitted_on_every_tick() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    let actions = tr.handle_event(&mut session, Event::Tick { now_ms: SEC });
    assert_eq!(
        actions,
        vec![Action::Snapshot {
            mode: Mode::Active,
            active_ms: SEC,
        }]
    );

    // Idle ticks still refresh the display.
    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 2 * SEC });
    let actions = tr.handle_event(&mut session, Event::Tick { now_ms: 3 * SEC });
    assert_eq!(
        actions,
        vec![Action::Snapshot {
            mode: Mode::Idle,
            active_ms: SEC,
        }]
    );
}

#[test]
fn reminder_fires_exactly_on_crossing_tick() {
    let tr = tracker(180 * SEC, vec![3600 * SEC, 7200 * SEC]);
    let mut session = Session::new();

    let fired = run_ticks(&tr, &mut session, 3600);

    assert_eq!(fired, vec![(3600, 3600 * SEC)]);
    assert_eq!(session.active_ms(), 3600 * SEC);
}

#[test]
fn each_reminder_fires_once_in_ascending_order() {
    let tr = tracker(180 * SEC, vec![3600 * SEC, 7200 * SEC]);
    let mut session = Session::new();

    let fired = run_ticks(&tr, &mut session, 7200);

    assert_eq!(fired, vec![(3600, 3600 * SEC), (7200, 7200 * SEC)]);
}

#[test]
fn several_reminders_can_cross_on_one_tick() {
    // Reminders closer together than one tick interval: both fire on the
    // same tick, ascending.
    let tr = tracker(180 * SEC, vec![500, 900]);
    let mut session = Session::new();

    let actions = tr.handle_event(&mut session, Event::Tick { now_ms: SEC });

    assert_eq!(crossed(&actions), vec![500, 900]);
}

#[test]
fn screensaver_start_is_idempotent() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 10);

    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 11 * SEC });
    let once = session.clone();

    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 12 * SEC });
    assert_eq!(session, once);
}

#[test]
fn stop_without_start_is_a_noop() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 5);
    let before = session.clone();

    tr.handle_event(&mut session, Event::ScreensaverStopped { now_ms: 6 * SEC });
    tr.handle_event(&mut session, Event::ResumedFromSleep { now_ms: 7 * SEC });

    assert_eq!(session, before);
}

#[test]
fn break_resets_at_exact_threshold() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 100);
    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 0 });

    // 179 idle ticks: one short of the break threshold.
    run_ticks(&tr, &mut session, 179);
    assert_eq!(session.active_ms(), 100 * SEC);

    // The 180th idle tick qualifies the break.
    run_ticks(&tr, &mut session, 1);
    assert_eq!(session.active_ms(), 0);
    assert!(session.fired().is_empty());
    assert_eq!(session.mode(), Mode::Idle);

    // Idle continues uneventfully; nothing grows, nothing resets again.
    run_ticks(&tr, &mut session, 20);
    assert_eq!(session.active_ms(), 0);
    assert_eq!(session.idle_ms(), 0);
}

#[test]
fn short_idle_preserves_active_time() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 100);
    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 0 });
    run_ticks(&tr, &mut session, 100);
    tr.handle_event(&mut session, Event::ScreensaverStopped { now_ms: 0 });

    assert_eq!(session.mode(), Mode::Active);
    assert_eq!(session.active_ms(), 100 * SEC);
    assert_eq!(session.idle_ms(), 0);
}

#[test]
fn idle_spans_do_not_merge_across_resumes() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    // Two idle spans of 100 ticks each, separated by a resume: together
    // past the threshold, but neither alone qualifies.
    for _ in 0..2 {
        tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 0 });
        run_ticks(&tr, &mut session, 100);
        tr.handle_event(&mut session, Event::ScreensaverStopped { now_ms: 0 });
    }

    assert_eq!(session.active_ms(), 0);
    assert_eq!(session.mode(), Mode::Active);
    // No reset happened, so a prior counter would have survived; verify
    // with a non-zero counter as well.
    run_ticks(&tr, &mut session, 10);
    tr.handle_event(&mut session, Event::PrepareForSleep { now_ms: 0 });
    run_ticks(&tr, &mut session, 179);
    tr.handle_event(&mut session, Event::ResumedFromSleep { now_ms: 0 });
    assert_eq!(session.active_ms(), 10 * SEC);
}

#[test]
fn sleep_and_wake_pair_like_the_screensaver() {
    let tr = tracker(180 * SEC, vec![3600 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 50);

    tr.handle_event(&mut session, Event::PrepareForSleep { now_ms: 0 });
    assert_eq!(session.mode(), Mode::Idle);

    run_ticks(&tr, &mut session, 200);
    assert_eq!(session.active_ms(), 0);

    tr.handle_event(&mut session, Event::ResumedFromSleep { now_ms: 0 });
    assert_eq!(session.mode(), Mode::Active);
    assert_eq!(session.idle_ms(), 0);
}

#[test]
fn fired_reminder_does_not_repeat_until_reset() {
    let tr = tracker(180 * SEC, vec![10 * SEC]);
    let mut session = Session::new();

    let fired = run_ticks(&tr, &mut session, 100);
    assert_eq!(fired, vec![(10, 10 * SEC)]);

    // Break, then a fresh session fires it again.
    tr.handle_event(&mut session, Event::ScreensaverStarted { now_ms: 0 });
    run_ticks(&tr, &mut session, 180);
    tr.handle_event(&mut session, Event::ScreensaverStopped { now_ms: 0 });

    let fired = run_ticks(&tr, &mut session, 10);
    assert_eq!(fired, vec![(10, 10 * SEC)]);
}

#[test]
fn manual_reset_restores_initial_counters() {
    let tr = tracker(180 * SEC, vec![10 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 50);
    assert!(!session.fired().is_empty());

    let actions = tr.handle_event(&mut session, Event::ManualReset { now_ms: 0 });

    assert_eq!(session.active_ms(), 0);
    assert!(session.fired().is_empty());
    assert_eq!(session, Session::new());
    assert_eq!(
        actions,
        vec![Action::Snapshot {
            mode: Mode::Active,
            active_ms: 0,
        }]
    );
}

#[test]
fn silent_mode_holds_reminders_until_switched_off() {
    let tr = tracker(180 * SEC, vec![10 * SEC]);
    let mut session = Session::new();

    tr.handle_event(
        &mut session,
        Event::SilentChanged {
            silent: true,
            now_ms: 0,
        },
    );

    // Well past the threshold, nothing fires and nothing is recorded.
    let fired = run_ticks(&tr, &mut session, 30);
    assert!(fired.is_empty());
    assert!(session.fired().is_empty());

    tr.handle_event(
        &mut session,
        Event::SilentChanged {
            silent: false,
            now_ms: 0,
        },
    );

    // The overdue reminder fires on the first non-silent tick.
    let fired = run_ticks(&tr, &mut session, 1);
    assert_eq!(fired, vec![(1, 10 * SEC)]);
}

#[test]
fn snapshot_reports_state_for_info() {
    let tr = tracker(180 * SEC, vec![3600 * SEC, 7200 * SEC]);
    let mut session = Session::new();

    run_ticks(&tr, &mut session, 3900);

    let snap = tr.snapshot(&session);
    assert_eq!(snap.waybar.text, "1:05");
    assert_eq!(snap.waybar.alt, "active");
    // 65min of a 2h alert interval: 195 degrees, already on a step.
    assert_eq!(snap.waybar.icon_phase, 195);
    assert!(!snap.silent);
    assert!(snap.pretty_text.contains("1h 5m"));
}
