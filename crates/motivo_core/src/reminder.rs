//! Host notification scheduler seam.
//!
//! # Responsibility
//! - Abstract the platform's repeating-notification service behind a small
//!   trait so settings changes can drive it without a host binding.
//!
//! # Invariants
//! - At most one active repeating reminder; scheduling replaces any
//!   previous one.
//! - Calls are fire-and-forget; delivery is entirely the host's concern.

use crate::model::settings::{ReminderTime, Settings};
use log::info;

/// Platform notification scheduler contract.
pub trait ReminderScheduler {
    /// Schedules (or replaces) the daily reminder at `time`.
    fn schedule_daily(&self, time: ReminderTime);

    /// Cancels the active reminder, if any.
    fn cancel(&self);
}

/// Headless scheduler that only logs; used by tests and the CLI probe.
#[derive(Debug, Default)]
pub struct LoggingScheduler;

impl ReminderScheduler for LoggingScheduler {
    fn schedule_daily(&self, time: ReminderTime) {
        info!("event=reminder_schedule module=reminder status=ok time={time}");
    }

    fn cancel(&self) {
        info!("event=reminder_cancel module=reminder status=ok");
    }
}

/// Aligns the host scheduler with the current settings.
///
/// Enabled with a time set → schedule; anything else → cancel.
pub fn sync_reminder(settings: &Settings, scheduler: &dyn ReminderScheduler) {
    match (settings.reminder_enabled, settings.reminder_time) {
        (true, Some(time)) => scheduler.schedule_daily(time),
        _ => scheduler.cancel(),
    }
}
