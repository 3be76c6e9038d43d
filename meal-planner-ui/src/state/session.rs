//! Session State
//!
//! Protein goal and last plan total for the current page session.

use std::fmt;

pub const MIN_PROTEIN_GOAL: u32 = 20;
pub const MAX_PROTEIN_GOAL: u32 = 150;
pub const DEFAULT_PROTEIN_GOAL: u32 = 50;

/// Client-side session state, reset on reload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Daily target in grams, always within [MIN_PROTEIN_GOAL, MAX_PROTEIN_GOAL]
    pub protein_goal: u32,
    /// Protein total of the last generated plan
    pub current_protein: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            protein_goal: DEFAULT_PROTEIN_GOAL,
            current_protein: 0,
        }
    }
}

/// Rejected protein goal input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GoalError {
    NotANumber,
    OutOfRange(i64),
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Please enter a protein goal between {}g and {}g",
            MIN_PROTEIN_GOAL, MAX_PROTEIN_GOAL
        )
    }
}

/// Parse goal input the way a browser's `parseInt` reads it
///
/// Leading whitespace and an optional sign are accepted, then the leading
/// run of digits is used and the rest of the text is ignored.
pub fn parse_goal(raw: &str) -> Result<u32, GoalError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(GoalError::NotANumber);
    }

    // Saturate absurdly long inputs; they are out of range either way
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    if value < MIN_PROTEIN_GOAL as i64 || value > MAX_PROTEIN_GOAL as i64 {
        return Err(GoalError::OutOfRange(value));
    }

    Ok(value as u32)
}

impl SessionState {
    /// Apply a new goal from raw input
    ///
    /// On success the displayed progress restarts from zero. On failure the
    /// state is left untouched.
    pub fn update_goal(&mut self, raw: &str) -> Result<u32, GoalError> {
        let goal = parse_goal(raw)?;
        self.protein_goal = goal;
        self.current_protein = 0;
        Ok(goal)
    }

    pub fn progress(&self) -> ProteinProgress {
        ProteinProgress {
            current: self.current_protein,
            goal: self.protein_goal,
        }
    }
}

/// Confirmation shown after a goal change
pub fn goal_updated_message(goal: u32) -> String {
    format!("Protein goal updated to {}g", goal)
}

/// Projection of protein intake against the goal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProteinProgress {
    pub current: u32,
    pub goal: u32,
}

impl ProteinProgress {
    /// Percentage of the goal reached, capped at 100
    pub fn percent(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        let ratio = self.current as f64 / self.goal as f64;
        ratio.min(1.0) * 100.0
    }

    pub fn text(&self) -> String {
        format!("Protein: {}/{}g", self.current, self.goal)
    }

    /// CSS width for the progress bar
    pub fn width(&self) -> String {
        format!("{}%", self.percent())
    }
}
