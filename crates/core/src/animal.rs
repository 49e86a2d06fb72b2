//! Animal attributes and the form-to-domain decode step.
//!
//! Browser submissions arrive as untyped URL-encoded pairs. [`AnimalForm`]
//! captures that raw shape; [`AnimalFields`] is the validated, typed value
//! every write path operates on. The conversion between them is the only
//! place checkbox coercion and numeric parsing happen.

use serde::Deserialize;

use crate::error::CoreError;

/// Value a browser submits for a checked checkbox.
const CHECKBOX_ON: &str = "on";

/// Validated animal attributes, produced by decoding a submitted form.
///
/// The persistence layer accepts only this shape for writes; raw form
/// payloads never reach a query.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalFields {
    pub animal_type: String,
    pub species: String,
    pub extinct: bool,
    pub location: String,
    pub life_expectancy: f64,
    pub img: String,
}

/// Raw URL-encoded form payload as submitted by the browser.
///
/// Field names follow the wire format (`animalType`, `lifeExpectancy`).
/// Every field is optional at this layer: an unchecked checkbox is absent
/// from the body entirely, and missing text fields decode to empty
/// strings rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalForm {
    pub animal_type: Option<String>,
    pub species: Option<String>,
    pub extinct: Option<String>,
    pub location: Option<String>,
    pub life_expectancy: Option<String>,
    pub img: Option<String>,
}

impl TryFrom<AnimalForm> for AnimalFields {
    type Error = CoreError;

    fn try_from(form: AnimalForm) -> Result<Self, Self::Error> {
        let life_expectancy = form
            .life_expectancy
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Validation("lifeExpectancy is required".into()))?
            .parse::<f64>()
            .map_err(|_| CoreError::Validation("lifeExpectancy must be a number".into()))?;

        if !life_expectancy.is_finite() {
            return Err(CoreError::Validation(
                "lifeExpectancy must be a finite number".into(),
            ));
        }

        Ok(AnimalFields {
            animal_type: form.animal_type.unwrap_or_default(),
            species: form.species.unwrap_or_default(),
            extinct: form.extinct.as_deref() == Some(CHECKBOX_ON),
            location: form.location.unwrap_or_default(),
            life_expectancy,
            img: form.img.unwrap_or_default(),
        })
    }
}
