use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::coerce;

/// Request payload for creating a workout.
///
/// Counters that are missing, `null` or not numeric are stored as zero.
/// The name is passed through as text; a missing name is left for the
/// store's `NOT NULL` constraint to reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkoutRequest {
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "coerce::count_or_zero")]
    pub sets: i32,

    #[serde(default, deserialize_with = "coerce::count_or_zero")]
    pub reps: i32,

    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "coerce::decimal_or_zero"
    )]
    #[schema(value_type = f64)]
    pub weight: Decimal,
}

/// Request payload for a partial update.
///
/// Absent and `null` fields keep their stored value; there is no way to
/// clear a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub id: Option<i64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_text"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_count"
    )]
    pub sets: Option<i32>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce::optional_count"
    )]
    pub reps: Option<i32>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "coerce::optional_decimal"
    )]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,
}

impl UpdateWorkoutRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sets.is_none() && self.reps.is_none() && self.weight.is_none()
    }
}

/// Relative change applied by the store in a single statement.
///
/// Each field is a delta, not an absolute value. Decrements stop at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdjustWorkoutRequest {
    #[serde(default, deserialize_with = "coerce::optional_id")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "coerce::count_or_zero")]
    pub sets: i32,

    #[serde(default, deserialize_with = "coerce::count_or_zero")]
    pub reps: i32,

    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "coerce::decimal_or_zero"
    )]
    #[schema(value_type = f64)]
    pub weight: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteWorkoutParams {
    /// Id of the workout to delete
    pub id: Option<String>,
}
