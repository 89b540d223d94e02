//! Field constraints for build order payloads.
//!
//! The web form runs these before submitting and the server runs them again before any
//! write. Lengths are counted in `char`s. The first violated constraint, in field order,
//! is reported.

use thiserror::Error;

use crate::model::build_order::{
    CreateBuildOrderDto, NewStepDto, ResourcesDto, UpdateBuildOrderDto,
};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const STEP_ACTION_MAX_LEN: usize = 200;
pub const STEP_DESCRIPTION_MAX_LEN: usize = 1000;
pub const MAX_TIME_MINUTES: i32 = 60;
pub const MAX_TIME_SECONDS: i32 = 59;
pub const MAX_VILLAGER_COUNT: i32 = 200;

/// A payload field that violates its constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `steps[2].timeSeconds`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();

    if len < min {
        if min == 1 {
            return Err(ValidationError::new(field, "must not be empty"));
        }
        return Err(ValidationError::new(
            field,
            format!("must be at least {} characters", min),
        ));
    }

    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }

    Ok(())
}

fn check_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }

    Ok(())
}

fn check_non_negative(field: &str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }

    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_length("title", title, 1, TITLE_MAX_LEN)
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    check_length("description", description, 0, DESCRIPTION_MAX_LEN)
}

pub fn validate_civilization(civilization: &str) -> Result<(), ValidationError> {
    check_length("civilization", civilization, 1, usize::MAX)
}

fn validate_resources(prefix: &str, resources: &ResourcesDto) -> Result<(), ValidationError> {
    check_non_negative(&format!("{}.resources.wood", prefix), resources.wood)?;
    check_non_negative(&format!("{}.resources.food", prefix), resources.food)?;
    check_non_negative(&format!("{}.resources.gold", prefix), resources.gold)?;
    check_non_negative(&format!("{}.resources.stone", prefix), resources.stone)?;

    Ok(())
}

impl NewStepDto {
    /// Validates the step found at `index` of the `steps` array
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let prefix = format!("steps[{}]", index);

        check_non_negative(&format!("{}.order", prefix), self.order)?;
        check_range(
            &format!("{}.timeMinutes", prefix),
            self.time_minutes,
            0,
            MAX_TIME_MINUTES,
        )?;
        check_range(
            &format!("{}.timeSeconds", prefix),
            self.time_seconds,
            0,
            MAX_TIME_SECONDS,
        )?;
        check_range(
            &format!("{}.villagerCount", prefix),
            self.villager_count,
            0,
            MAX_VILLAGER_COUNT,
        )?;
        check_length(
            &format!("{}.action", prefix),
            &self.action,
            1,
            STEP_ACTION_MAX_LEN,
        )?;
        check_length(
            &format!("{}.description", prefix),
            &self.description,
            0,
            STEP_DESCRIPTION_MAX_LEN,
        )?;
        validate_resources(&prefix, &self.resources)?;

        Ok(())
    }
}

pub fn validate_steps(steps: &[NewStepDto]) -> Result<(), ValidationError> {
    steps
        .iter()
        .enumerate()
        .try_for_each(|(index, step)| step.validate(index))
}

impl CreateBuildOrderDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_civilization(&self.civilization)?;
        validate_steps(&self.steps)?;

        Ok(())
    }
}

impl UpdateBuildOrderDto {
    /// Applies the create constraints to every field that is present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(civilization) = &self.civilization {
            validate_civilization(civilization)?;
        }
        if let Some(steps) = &self.steps {
            validate_steps(steps)?;
        }

        Ok(())
    }
}
