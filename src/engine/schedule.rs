// ==========================================
// Livestock Manager - life-stage schedule
// ==========================================
// Rules (each independent, skipped when its reference data is missing):
// 1) Weaning                 birth + weaning_days, while age < offset
// 2) SexualMaturity          birth + maturity_months*30, while age < offset
// 3) EarlySlaughterWindow    birth + early, ±early_tol, until age > offset+tol
// 4) ConventionalSlaughter   birth + conventional, ±conv_tol, until age > offset+tol
// 5) LateSlaughterWindow     birth + min, Current in [min, max], until age > max
// 6) FirstBreeding           females, birth + (maturity+extra)*30, while age < offset
// 7) AdultWeightReached      today + ceil(missing_kg*1000/daily_gain_g), ratio < threshold
// Order: Current events first, then fixed rank per kind, then days_remaining
// ==========================================

use crate::config::ProjectionRules;
use crate::domain::animal::AnimalProfile;
use crate::domain::breed::BreedReference;
use crate::domain::projection::{AnimalAge, ScheduleEvent};
use crate::domain::types::{ScheduleEventKind, Sex, WindowStatus};
use crate::engine::age::{add_days, compute_ages, DAYS_PER_MONTH};
use chrono::NaiveDate;

/// Upcoming/Current/None for a day offset with a closed tolerance band.
/// `None` means the band is fully behind the animal.
pub fn window_status(age_days: i64, start: i64, end: i64) -> Option<WindowStatus> {
    if age_days > end {
        None
    } else if age_days >= start {
        Some(WindowStatus::Current)
    } else {
        Some(WindowStatus::Upcoming)
    }
}

/// Days needed to close the gap to `target_kg` at `daily_gain_g`.
pub fn days_to_target(current_kg: f64, target_kg: f64, daily_gain_g: f64) -> i64 {
    ((target_kg - current_kg) * 1000.0 / daily_gain_g).ceil() as i64
}

struct ScheduleContext {
    birth: NaiveDate,
    today: NaiveDate,
    age: AnimalAge,
}

impl ScheduleContext {
    /// Event anchored at birth + offset_days.
    fn birth_anchored(
        &self,
        kind: ScheduleEventKind,
        offset_days: i64,
        window_status: WindowStatus,
        reason: String,
    ) -> ScheduleEvent {
        ScheduleEvent {
            kind,
            event_date: add_days(self.birth, offset_days),
            days_remaining: offset_days - self.age.days,
            window_status,
            reason,
        }
    }

    /// Milestone without tolerance: only while the nominal date is ahead.
    fn milestone(&self, kind: ScheduleEventKind, offset_days: i64) -> Option<ScheduleEvent> {
        if self.age.days >= offset_days {
            return None;
        }
        let reason = format!("{}: offset={}d, age={}d", kind, offset_days, self.age.days);
        Some(self.birth_anchored(kind, offset_days, WindowStatus::Upcoming, reason))
    }

    /// Slaughter window centred on `offset_days` with ± `tolerance_days`.
    fn tolerance_window(
        &self,
        kind: ScheduleEventKind,
        offset_days: i64,
        tolerance_days: i64,
    ) -> Option<ScheduleEvent> {
        let status = window_status(
            self.age.days,
            offset_days - tolerance_days,
            offset_days + tolerance_days,
        )?;
        let reason = format!(
            "{}: offset={}d, tolerance=±{}d, age={}d",
            kind, offset_days, tolerance_days, self.age.days
        );
        Some(self.birth_anchored(kind, offset_days, status, reason))
    }
}

/// Upcoming life-stage events on `today`, sorted for display.
///
/// Empty without a birth date.
pub fn build_schedule(
    profile: &AnimalProfile,
    breed: &BreedReference,
    today: NaiveDate,
    rules: &ProjectionRules,
) -> Vec<ScheduleEvent> {
    let (birth, age) = match (profile.birth_date, compute_ages(profile.birth_date, today)) {
        (Some(birth), Some(age)) => (birth, age),
        _ => return Vec::new(),
    };
    let ctx = ScheduleContext { birth, today, age };
    let mut events = Vec::new();

    // 1) weaning
    events.extend(ctx.milestone(ScheduleEventKind::Weaning, rules.weaning_days as i64));

    // 2) sexual maturity
    if let Some(maturity) = breed.sexual_maturity_months {
        events.extend(ctx.milestone(
            ScheduleEventKind::SexualMaturity,
            maturity as i64 * DAYS_PER_MONTH,
        ));
    }

    // 3) early slaughter
    if let Some(early) = breed.early_slaughter_days {
        events.extend(ctx.tolerance_window(
            ScheduleEventKind::EarlySlaughterWindow,
            early as i64,
            rules.early_slaughter_tolerance_days as i64,
        ));
    }

    // 4) conventional slaughter
    if let Some(conventional) = breed.conventional_slaughter_days {
        events.extend(ctx.tolerance_window(
            ScheduleEventKind::ConventionalSlaughterWindow,
            conventional as i64,
            rules.conventional_slaughter_tolerance_days as i64,
        ));
    }

    // 5) late slaughter, anchored at min
    if let Some((min, max)) = breed.late_slaughter_range() {
        let (min, max) = (min as i64, max as i64);
        if let Some(status) = window_status(ctx.age.days, min, max) {
            let reason = format!(
                "{}: range={}..{}d, age={}d",
                ScheduleEventKind::LateSlaughterWindow,
                min,
                max,
                ctx.age.days
            );
            events.push(ctx.birth_anchored(
                ScheduleEventKind::LateSlaughterWindow,
                min,
                status,
                reason,
            ));
        }
    }

    // 6) first breeding, females only
    if let (Some(maturity), Some(Sex::Female)) = (breed.sexual_maturity_months, profile.sex) {
        let offset =
            (maturity as i64 + rules.first_breeding_extra_months as i64) * DAYS_PER_MONTH;
        events.extend(ctx.milestone(ScheduleEventKind::FirstBreeding, offset));
    }

    // 7) adult weight, anchored at today
    events.extend(adult_weight_event(&ctx, profile, breed, rules));

    sort_schedule(&mut events);
    events
}

fn adult_weight_event(
    ctx: &ScheduleContext,
    profile: &AnimalProfile,
    breed: &BreedReference,
    rules: &ProjectionRules,
) -> Option<ScheduleEvent> {
    let adult = breed.adult_weight_for(profile.sex).filter(|w| *w > 0.0)?;
    let current = profile.resolved_current_weight()?;

    let ratio = current / adult;
    if ratio >= rules.adult_weight_ratio_threshold {
        return None;
    }

    let daily_gain = breed
        .positive_daily_gain()
        .unwrap_or(rules.default_daily_gain_grams);
    if daily_gain <= 0.0 {
        return None;
    }
    let days = days_to_target(current, adult, daily_gain);

    Some(ScheduleEvent {
        kind: ScheduleEventKind::AdultWeightReached,
        event_date: add_days(ctx.today, days),
        days_remaining: days,
        window_status: WindowStatus::Upcoming,
        reason: format!(
            "{}: current={:.1}kg, adult={:.1}kg, ratio={:.3}, daily_gain={}g",
            ScheduleEventKind::AdultWeightReached,
            current,
            adult,
            ratio,
            daily_gain
        ),
    })
}

/// Current-window events first, then kind rank, then days remaining.
pub fn sort_schedule(events: &mut [ScheduleEvent]) {
    events.sort_by(|a, b| {
        a.sort_rank()
            .cmp(&b.sort_rank())
            .then(a.days_remaining.cmp(&b.days_remaining))
    });
}

#[cfg(test)]
mod tests;
