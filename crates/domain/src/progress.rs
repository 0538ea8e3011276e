// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly progress snapshots.
//!
//! At most one progress record exists per (internship, week); writes for an
//! existing week update the row in place.

use serde::{Deserialize, Serialize};
use time::Date;

/// Default planned length of a placement, in weeks.
pub const DEFAULT_TOTAL_WEEKS: i32 = 12;

/// A per-week progress snapshot for one internship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipProgress {
    pub progress_id: i64,
    pub internship_id: i64,
    pub current_week: i32,
    pub total_weeks: i32,
    /// Task counters are fed by external aggregation over the internship's
    /// tasks; they are not maintained automatically.
    pub completed_tasks: i32,
    pub total_tasks: i32,
    /// Overall completion in percent, 0–100.
    pub overall_progress: f64,
    pub accomplishments: Option<String>,
    pub challenges: Option<String>,
    pub next_week_plan: Option<String>,
    pub week_start_date: Option<Date>,
    pub week_end_date: Option<Date>,
}
