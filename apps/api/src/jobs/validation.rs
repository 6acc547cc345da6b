use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::categories::is_valid_category;

/// Body of job create and edit requests. Edits replace every field.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub wage: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub recommended_skills: Vec<String>,
}

/// Checks a posting payload and normalizes it in place: text fields are
/// trimmed, skill lists are deduplicated with order preserved.
pub fn validate_job_payload(payload: &mut JobPayload) -> Result<(), AppError> {
    payload.title = payload.title.trim().to_string();
    payload.description = payload.description.trim().to_string();
    payload.location = payload.location.trim().to_string();

    if payload.title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if payload.description.is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }
    if payload.location.is_empty() {
        return Err(AppError::Validation("Location is required".to_string()));
    }
    if !is_valid_category(&payload.category) {
        return Err(AppError::Validation(format!(
            "Unknown category: {}",
            payload.category
        )));
    }
    if !payload.wage.is_finite() || payload.wage <= 0.0 {
        return Err(AppError::Validation(
            "Wage must be a positive hourly rate".to_string(),
        ));
    }

    payload.required_skills = normalize_skills(&payload.required_skills);
    payload.recommended_skills = normalize_skills(&payload.recommended_skills);
    Ok(())
}

/// Trims entries, drops blanks and keeps the first occurrence of duplicates.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if skill.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s == skill) {
            seen.push(skill.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> JobPayload {
        JobPayload {
            title: "Experienced Plumber Needed".to_string(),
            description: "Fix a burst pipe in a residential kitchen".to_string(),
            category: "Construction".to_string(),
            location: "Springfield".to_string(),
            wage: 18.5,
            required_skills: vec!["Plumbing".to_string()],
            recommended_skills: vec![],
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let mut p = payload();
        assert!(validate_job_payload(&mut p).is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut p = payload();
        p.title = "   ".to_string();
        assert!(validate_job_payload(&mut p).is_err());

        let mut p = payload();
        p.description = String::new();
        assert!(validate_job_payload(&mut p).is_err());

        let mut p = payload();
        p.location = "\t".to_string();
        assert!(validate_job_payload(&mut p).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut p = payload();
        p.category = "Gardening".to_string();
        assert!(validate_job_payload(&mut p).is_err());
    }

    #[test]
    fn test_wage_must_be_positive_and_finite() {
        for wage in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let mut p = payload();
            p.wage = wage;
            assert!(validate_job_payload(&mut p).is_err(), "wage {wage} passed");
        }
    }

    #[test]
    fn test_skills_are_trimmed_and_deduplicated() {
        let skills = vec![
            " Plumbing ".to_string(),
            "".to_string(),
            "Plumbing".to_string(),
            "Electrical".to_string(),
        ];
        assert_eq!(normalize_skills(&skills), vec!["Plumbing", "Electrical"]);
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut p = payload();
        p.title = "  Gardener  ".to_string();
        validate_job_payload(&mut p).unwrap();
        assert_eq!(p.title, "Gardener");
    }
}
