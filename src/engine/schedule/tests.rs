use super::{build_schedule, days_to_target, window_status};
use crate::config::ProjectionRules;
use crate::domain::animal::{AnimalProfile, WeightEntry};
use crate::domain::breed::BreedReference;
use crate::domain::projection::ScheduleEvent;
use crate::domain::types::{ScheduleEventKind, Sex, WindowStatus};
use crate::engine::age::add_days;
use chrono::NaiveDate;

// ==========================================
// Helpers
// ==========================================

fn birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn at_age(days: i64) -> NaiveDate {
    add_days(birth(), days)
}

fn profile(sex: Option<Sex>) -> AnimalProfile {
    AnimalProfile {
        birth_date: Some(birth()),
        sex,
        weight_history: Vec::new(),
        current_weight_kg: None,
    }
}

fn schedule_at(
    profile: &AnimalProfile,
    breed: &BreedReference,
    age_days: i64,
) -> Vec<ScheduleEvent> {
    build_schedule(profile, breed, at_age(age_days), &ProjectionRules::default())
}

fn find(events: &[ScheduleEvent], kind: ScheduleEventKind) -> Option<&ScheduleEvent> {
    events.iter().find(|e| e.kind == kind)
}

fn early_only(days: u32) -> BreedReference {
    BreedReference {
        early_slaughter_days: Some(days),
        ..BreedReference::default()
    }
}

// ==========================================
// Weaning
// ==========================================

#[test]
fn test_weaning_emitted_before_75_days() {
    let events = schedule_at(&profile(None), &BreedReference::default(), 74);
    let weaning = find(&events, ScheduleEventKind::Weaning).expect("weaning expected at 74d");
    assert_eq!(weaning.days_remaining, 1);
    assert_eq!(weaning.event_date, at_age(75));
    assert_eq!(weaning.window_status, WindowStatus::Upcoming);
}

#[test]
fn test_weaning_suppressed_from_75_days() {
    let events = schedule_at(&profile(None), &BreedReference::default(), 75);
    assert!(find(&events, ScheduleEventKind::Weaning).is_none());
}

// ==========================================
// Early slaughter window (90 ± 15 d)
// ==========================================

#[test]
fn test_early_window_upcoming_before_band() {
    let events = schedule_at(&profile(None), &early_only(90), 74);
    let early = find(&events, ScheduleEventKind::EarlySlaughterWindow).unwrap();
    assert_eq!(early.window_status, WindowStatus::Upcoming);
    assert_eq!(early.days_remaining, 16);
}

#[test]
fn test_early_window_current_inside_band() {
    for age in [75, 90, 100, 105] {
        let events = schedule_at(&profile(None), &early_only(90), age);
        let early = find(&events, ScheduleEventKind::EarlySlaughterWindow)
            .unwrap_or_else(|| panic!("early window expected at {}d", age));
        assert_eq!(early.window_status, WindowStatus::Current, "age {}d", age);
        assert_eq!(early.days_remaining, 90 - age);
        assert_eq!(early.event_date, at_age(90));
    }
}

#[test]
fn test_early_window_excluded_after_band() {
    let events = schedule_at(&profile(None), &early_only(90), 106);
    assert!(find(&events, ScheduleEventKind::EarlySlaughterWindow).is_none());
}

// ==========================================
// Conventional slaughter window (300 ± 30 d)
// ==========================================

#[test]
fn test_conventional_window_boundaries() {
    let breed = BreedReference {
        conventional_slaughter_days: Some(300),
        ..BreedReference::default()
    };
    let status_at = |age| {
        let events = schedule_at(&profile(None), &breed, age);
        find(&events, ScheduleEventKind::ConventionalSlaughterWindow).map(|e| e.window_status)
    };
    assert_eq!(status_at(269), Some(WindowStatus::Upcoming));
    assert_eq!(status_at(270), Some(WindowStatus::Current));
    assert_eq!(status_at(330), Some(WindowStatus::Current));
    assert_eq!(status_at(331), None);
}

// ==========================================
// Late slaughter window (400..=500 d)
// ==========================================

#[test]
fn test_late_window_requires_both_bounds() {
    let breed = BreedReference {
        late_slaughter_days_min: Some(400),
        ..BreedReference::default()
    };
    let events = schedule_at(&profile(None), &breed, 300);
    assert!(find(&events, ScheduleEventKind::LateSlaughterWindow).is_none());
}

#[test]
fn test_late_window_boundaries() {
    let breed = BreedReference {
        late_slaughter_days_min: Some(400),
        late_slaughter_days_max: Some(500),
        ..BreedReference::default()
    };
    let event_at = |age| {
        find(&schedule_at(&profile(None), &breed, age), ScheduleEventKind::LateSlaughterWindow)
            .cloned()
    };

    let upcoming = event_at(399).unwrap();
    assert_eq!(upcoming.window_status, WindowStatus::Upcoming);
    assert_eq!(upcoming.event_date, at_age(400));
    assert_eq!(upcoming.days_remaining, 1);

    assert_eq!(event_at(400).unwrap().window_status, WindowStatus::Current);
    let last = event_at(500).unwrap();
    assert_eq!(last.window_status, WindowStatus::Current);
    assert_eq!(last.days_remaining, -100);
    assert!(event_at(501).is_none());
}

// ==========================================
// Sexual maturity / first breeding
// ==========================================

#[test]
fn test_sexual_maturity_offset() {
    let breed = BreedReference {
        sexual_maturity_months: Some(12),
        ..BreedReference::default()
    };
    let events = schedule_at(&profile(Some(Sex::Male)), &breed, 359);
    let maturity = find(&events, ScheduleEventKind::SexualMaturity).unwrap();
    assert_eq!(maturity.event_date, at_age(360));
    assert_eq!(maturity.days_remaining, 1);

    let events = schedule_at(&profile(Some(Sex::Male)), &breed, 360);
    assert!(find(&events, ScheduleEventKind::SexualMaturity).is_none());
}

#[test]
fn test_first_breeding_only_for_females() {
    let breed = BreedReference {
        sexual_maturity_months: Some(12),
        ..BreedReference::default()
    };

    let female = schedule_at(&profile(Some(Sex::Female)), &breed, 100);
    let breeding = find(&female, ScheduleEventKind::FirstBreeding).unwrap();
    assert_eq!(breeding.event_date, at_age(420));
    assert_eq!(breeding.days_remaining, 320);

    let male = schedule_at(&profile(Some(Sex::Male)), &breed, 100);
    assert!(find(&male, ScheduleEventKind::FirstBreeding).is_none());

    let unknown = schedule_at(&profile(None), &breed, 100);
    assert!(find(&unknown, ScheduleEventKind::FirstBreeding).is_none());

    let late = schedule_at(&profile(Some(Sex::Female)), &breed, 420);
    assert!(find(&late, ScheduleEventKind::FirstBreeding).is_none());
}

// ==========================================
// Adult weight
// ==========================================

fn adult_breed(daily_gain: Option<f64>) -> BreedReference {
    BreedReference {
        adult_weight_female_kg: Some(400.0),
        daily_weight_gain_grams: daily_gain,
        ..BreedReference::default()
    }
}

fn weighing(current: f64) -> AnimalProfile {
    let mut p = profile(Some(Sex::Female));
    p.weight_history.push(WeightEntry::new(current, at_age(200)));
    p
}

#[test]
fn test_adult_weight_not_emitted_near_target() {
    let events = schedule_at(&weighing(384.0), &adult_breed(Some(150.0)), 300);
    assert!(find(&events, ScheduleEventKind::AdultWeightReached).is_none());

    // 0.95 exactly is not below the threshold
    let events = schedule_at(&weighing(380.0), &adult_breed(Some(150.0)), 300);
    assert!(find(&events, ScheduleEventKind::AdultWeightReached).is_none());
}

#[test]
fn test_adult_weight_emitted_below_threshold() {
    let today_age = 300;
    let events = schedule_at(&weighing(376.0), &adult_breed(Some(150.0)), today_age);
    let adult = find(&events, ScheduleEventKind::AdultWeightReached).unwrap();
    assert_eq!(adult.days_remaining, 160);
    assert_eq!(adult.event_date, add_days(at_age(today_age), 160));
    assert_eq!(adult.window_status, WindowStatus::Upcoming);
}

#[test]
fn test_adult_weight_defaults_daily_gain() {
    for gain in [None, Some(0.0)] {
        let events = schedule_at(&weighing(376.0), &adult_breed(gain), 300);
        let adult = find(&events, ScheduleEventKind::AdultWeightReached).unwrap();
        assert_eq!(adult.days_remaining, 160);
    }
}

#[test]
fn test_adult_weight_rounds_up() {
    assert_eq!(days_to_target(100.0, 100.1, 150.0), 1);
    assert_eq!(days_to_target(376.0, 400.0, 150.0), 160);
    assert_eq!(days_to_target(300.0, 400.0, 600.0), 167);
}

#[test]
fn test_adult_weight_requires_current_weight() {
    let events = schedule_at(&profile(Some(Sex::Female)), &adult_breed(Some(150.0)), 300);
    assert!(find(&events, ScheduleEventKind::AdultWeightReached).is_none());
}

#[test]
fn test_adult_weight_prefers_explicit_current_weight() {
    let mut p = weighing(200.0);
    p.current_weight_kg = Some(376.0);
    let events = schedule_at(&p, &adult_breed(Some(150.0)), 300);
    let adult = find(&events, ScheduleEventKind::AdultWeightReached).unwrap();
    assert_eq!(adult.days_remaining, 160);
}

// ==========================================
// Ordering and degradation
// ==========================================

#[test]
fn test_current_window_sorts_first() {
    let breed = BreedReference {
        sexual_maturity_months: Some(12),
        early_slaughter_days: Some(60),
        conventional_slaughter_days: Some(300),
        ..BreedReference::default()
    };
    // age 50: early window 45..=75 is current, weaning still ahead
    let events = schedule_at(&profile(Some(Sex::Female)), &breed, 50);
    let kinds: Vec<ScheduleEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ScheduleEventKind::EarlySlaughterWindow,
            ScheduleEventKind::Weaning,
            ScheduleEventKind::SexualMaturity,
            ScheduleEventKind::ConventionalSlaughterWindow,
            ScheduleEventKind::FirstBreeding,
        ]
    );
}

#[test]
fn test_fixed_rank_beats_days_remaining() {
    let breed = BreedReference {
        sexual_maturity_months: Some(24),
        early_slaughter_days: Some(200),
        ..BreedReference::default()
    };
    // early (200d) comes before maturity (720d) only by rank, not by date order
    let events = schedule_at(&profile(None), &breed, 10);
    let kinds: Vec<ScheduleEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ScheduleEventKind::Weaning,
            ScheduleEventKind::SexualMaturity,
            ScheduleEventKind::EarlySlaughterWindow,
        ]
    );
}

#[test]
fn test_missing_birth_date_yields_no_events() {
    let p = AnimalProfile {
        sex: Some(Sex::Female),
        current_weight_kg: Some(100.0),
        ..AnimalProfile::default()
    };
    let breed = adult_breed(Some(150.0));
    let events = build_schedule(&p, &breed, birth(), &ProjectionRules::default());
    assert!(events.is_empty());
}

#[test]
fn test_empty_reference_only_yields_weaning() {
    let events = schedule_at(&profile(Some(Sex::Female)), &BreedReference::default(), 10);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, ScheduleEventKind::Weaning);
}

#[test]
fn test_every_event_has_a_reason() {
    let breed = BreedReference {
        sexual_maturity_months: Some(12),
        early_slaughter_days: Some(60),
        late_slaughter_days_min: Some(400),
        late_slaughter_days_max: Some(500),
        adult_weight_female_kg: Some(400.0),
        ..BreedReference::default()
    };
    let events = schedule_at(&weighing(100.0), &breed, 50);
    assert!(!events.is_empty());
    for e in &events {
        assert!(e.reason.starts_with(&e.kind.to_string()), "reason: {}", e.reason);
    }
}

#[test]
fn test_window_status_helper() {
    assert_eq!(window_status(74, 75, 105), Some(WindowStatus::Upcoming));
    assert_eq!(window_status(75, 75, 105), Some(WindowStatus::Current));
    assert_eq!(window_status(105, 75, 105), Some(WindowStatus::Current));
    assert_eq!(window_status(106, 75, 105), None);
}
