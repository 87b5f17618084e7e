use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use storage::{
    dto::{
        coerce::{parse_count, parse_decimal},
        workout::{AdjustWorkoutRequest, CreateWorkoutRequest},
    },
    models::Workout,
};

use crate::error::{ClientError, Result};

/// A counter column that can be stepped up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Sets,
    Reps,
    Weight,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sets => "sets",
            Self::Reps => "reps",
            Self::Weight => "weight",
        }
    }

    pub fn value(self, workout: &Workout) -> Decimal {
        match self {
            Self::Sets => Decimal::from(workout.sets),
            Self::Reps => Decimal::from(workout.reps),
            Self::Weight => workout.weight,
        }
    }

    fn set(self, workout: &mut Workout, value: Decimal) {
        match self {
            Self::Sets => workout.sets = to_count(value).unwrap_or(workout.sets),
            Self::Reps => workout.reps = to_count(value).unwrap_or(workout.reps),
            Self::Weight => workout.weight = value,
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sets" | "set" => Ok(Self::Sets),
            "reps" | "rep" => Ok(Self::Reps),
            "weight" => Ok(Self::Weight),
            other => Err(format!(
                "unknown field '{}', expected sets, reps or weight",
                other
            )),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn to_count(value: Decimal) -> Option<i32> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
}

/// Applies `delta` the same way the store does: a decrement never takes a
/// value below zero, or below itself if it is already negative.
pub fn step(current: Decimal, delta: Decimal) -> Decimal {
    (current + delta).max(current.min(Decimal::ZERO))
}

/// A relative change to one counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub field: Field,
    pub delta: Decimal,
}

impl Adjustment {
    pub fn increment(field: Field) -> Self {
        Self {
            field,
            delta: Decimal::ONE,
        }
    }

    pub fn decrement(field: Field) -> Self {
        Self {
            field,
            delta: -Decimal::ONE,
        }
    }
}

/// Record of an optimistic change, kept until the server answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    pub id: i64,
    pub field: Field,
    pub before: Decimal,
    pub after: Decimal,
}

impl PendingChange {
    pub fn delta(&self) -> Decimal {
        self.after - self.before
    }

    pub fn is_noop(&self) -> bool {
        self.delta().is_zero()
    }

    pub fn to_request(&self) -> AdjustWorkoutRequest {
        let mut request = AdjustWorkoutRequest {
            id: Some(self.id),
            ..Default::default()
        };

        match self.field {
            Field::Sets => request.sets = to_count(self.delta()).unwrap_or(0),
            Field::Reps => request.reps = to_count(self.delta()).unwrap_or(0),
            Field::Weight => request.weight = self.delta(),
        }

        request
    }
}

/// Raw form input for a new workout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

impl Draft {
    /// Only the name is checked; unreadable numbers become zero.
    pub fn into_request(self) -> Result<CreateWorkoutRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::EmptyName);
        }

        Ok(CreateWorkoutRequest {
            name: Some(name.to_string()),
            sets: parse_count(&self.sets).unwrap_or(0),
            reps: parse_count(&self.reps).unwrap_or(0),
            weight: parse_decimal(&self.weight).unwrap_or(Decimal::ZERO),
        })
    }
}

/// Local mirror of the server's workout list, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    workouts: Vec<Workout>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id == id)
    }

    /// Appends a server-confirmed workout, replacing any copy with the same id.
    pub fn insert(&mut self, workout: Workout) {
        match self.get_mut(workout.id) {
            Some(existing) => *existing = workout,
            None => self.workouts.push(workout),
        }
    }

    /// Changes the local value right away and returns what is needed to
    /// confirm or undo it.
    pub fn apply(&mut self, id: i64, adjustment: Adjustment) -> Result<PendingChange> {
        let workout = self.get_mut(id).ok_or(ClientError::UnknownWorkout(id))?;

        let before = adjustment.field.value(workout);
        adjustment
            .field
            .set(workout, step(before, adjustment.delta));
        let after = adjustment.field.value(workout);

        Ok(PendingChange {
            id,
            field: adjustment.field,
            before,
            after,
        })
    }

    /// Replaces the local copy with the server's. Returns `false` when the
    /// workout has been removed locally in the meantime.
    pub fn confirm(&mut self, workout: Workout) -> bool {
        match self.get_mut(workout.id) {
            Some(existing) => {
                *existing = workout;
                true
            }
            None => false,
        }
    }

    /// Restores the value from before `pending`, unless something else has
    /// changed it since.
    pub fn rollback(&mut self, pending: &PendingChange) -> bool {
        let Some(workout) = self.get_mut(pending.id) else {
            return false;
        };

        if pending.field.value(workout) != pending.after {
            return false;
        }

        pending.field.set(workout, pending.before);
        true
    }

    pub fn remove(&mut self, id: i64) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.id == id)?;
        Some(self.workouts.remove(index))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.workouts.is_empty() {
            return writeln!(f, "No workouts yet.");
        }

        writeln!(
            f,
            "{:>6}  {:<24} {:>6} {:>6} {:>8}",
            "ID", "NAME", "SETS", "REPS", "WEIGHT"
        )?;
        for w in &self.workouts {
            writeln!(
                f,
                "{:>6}  {:<24} {:>6} {:>6} {:>8}",
                w.id,
                w.name,
                w.sets,
                w.reps,
                w.weight.normalize().to_string()
            )?;
        }

        Ok(())
    }
}
