use crate::models::job::JobDetails;

/// An hourly wage range parsed from a filter string like "5-10" or "20+".
/// Bounds are inclusive, so neighbouring bands share their boundary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WageBand {
    min: f64,
    max: Option<f64>,
}

impl WageBand {
    /// Accepts "min-max", "min+" and a bare "min", all open-ended at the top
    /// when no max is given.
    pub fn parse(filter: &str) -> Option<WageBand> {
        let filter = filter.trim();
        if filter.is_empty() {
            return None;
        }

        if let Some(min) = filter.strip_suffix('+') {
            let min = min.trim().parse::<f64>().ok()?;
            return Some(WageBand { min, max: None });
        }

        if let Some((min, max)) = filter.split_once('-') {
            let min = min.trim().parse::<f64>().ok()?;
            let max = max.trim().parse::<f64>().ok()?;
            return Some(WageBand {
                min,
                max: Some(max),
            });
        }

        let min = filter.parse::<f64>().ok()?;
        Some(WageBand { min, max: None })
    }

    pub fn contains(&self, wage: f64) -> bool {
        wage >= self.min && wage <= self.max.unwrap_or(f64::INFINITY)
    }
}

/// Case-insensitive substring match on title or description.
pub fn matches_search(query: &str, title: &str, description: &str) -> bool {
    let query = query.to_lowercase();
    title.to_lowercase().contains(&query) || description.to_lowercase().contains(&query)
}

fn passes_filters(job: &JobDetails, search: Option<&str>, band: Option<&WageBand>) -> bool {
    if let Some(query) = search {
        if !matches_search(query, &job.title, &job.description) {
            return false;
        }
    }
    band.map_or(true, |band| band.contains(job.wage))
}

/// Splits listings into those passing the active filters and the rest.
/// With no filters active everything lands in the first bucket.
pub fn split_by_filters(
    jobs: Vec<JobDetails>,
    search: Option<&str>,
    band: Option<&WageBand>,
) -> (Vec<JobDetails>, Vec<JobDetails>) {
    jobs.into_iter()
        .partition(|job| passes_filters(job, search, band))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;
    use crate::models::profile::EmployerSummary;
    use chrono::Utc;
    use uuid::Uuid;

    fn job(title: &str, description: &str, wage: f64) -> JobDetails {
        JobDetails {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            category: "General".to_string(),
            location: "Springfield".to_string(),
            wage,
            required_skills: vec![],
            recommended_skills: vec![],
            status: JobStatus::Open,
            applications: 0,
            created_at: Utc::now(),
            completed_at: None,
            employer: EmployerSummary {
                id: Uuid::new_v4(),
                name: "Acme".to_string(),
                email: "acme@example.com".to_string(),
                phone: None,
                rating: 0.0,
                avatar_url: String::new(),
            },
        }
    }

    #[test]
    fn test_band_parsing() {
        assert_eq!(
            WageBand::parse("5-10"),
            Some(WageBand {
                min: 5.0,
                max: Some(10.0)
            })
        );
        assert_eq!(WageBand::parse("20+"), Some(WageBand { min: 20.0, max: None }));
        assert_eq!(WageBand::parse(" 15 - 20 "), WageBand::parse("15-20"));
        assert_eq!(WageBand::parse("30"), Some(WageBand { min: 30.0, max: None }));
        assert_eq!(WageBand::parse(""), None);
        assert_eq!(WageBand::parse("cheap"), None);
        assert_eq!(WageBand::parse("5-"), None);
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let band = WageBand::parse("5-10").unwrap();
        assert!(band.contains(5.0));
        assert!(band.contains(10.0));
        assert!(!band.contains(4.99));
        assert!(!band.contains(10.01));

        // Boundary wages land in both neighbouring bands.
        assert!(WageBand::parse("10-15").unwrap().contains(10.0));
    }

    #[test]
    fn test_open_ended_band() {
        let band = WageBand::parse("20+").unwrap();
        assert!(band.contains(20.0));
        assert!(band.contains(1000.0));
        assert!(!band.contains(19.99));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(matches_search("plumb", "Experienced Plumber Needed", ""));
        assert!(matches_search("PLUMB", "experienced plumber needed", ""));
        assert!(matches_search("urgent", "Gardener", "URGENT start this week"));
        assert!(!matches_search("electric", "Plumber", "fix a sink"));
    }

    #[test]
    fn test_split_with_no_filters_matches_everything() {
        let jobs = vec![job("A", "", 8.0), job("B", "", 25.0)];
        let (matched, others) = split_by_filters(jobs, None, None);
        assert_eq!(matched.len(), 2);
        assert!(others.is_empty());
    }

    #[test]
    fn test_split_separates_non_matching_jobs() {
        let jobs = vec![
            job("Plumber wanted", "", 8.0),
            job("Electrician", "", 8.0),
            job("Plumber apprentice", "", 30.0),
        ];
        let band = WageBand::parse("5-10").unwrap();
        let (matched, others) = split_by_filters(jobs, Some("plumber"), Some(&band));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Plumber wanted");
        assert_eq!(others.len(), 2);
    }
}
