use listing_core::{Contract, HourlyRange, InvertedRange, JobId, JobPosting, Region, Shift, Tag};

pub struct JobSpec<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub region: &'a str,
    pub shift: Shift,
    pub contract: Contract,
    pub rate: (u32, u32),
    pub language: &'a str,
    pub tags: &'a [&'a str],
}

pub fn job(spec: JobSpec<'_>) -> Result<JobPosting, InvertedRange> {
    Ok(JobPosting {
        id: JobId::new(spec.id),
        title: spec.title.to_string(),
        company: format!("{} Logistics", spec.region),
        city: spec.region.to_string(),
        region: Region::new(spec.region),
        shift: spec.shift,
        contract: spec.contract,
        hourly_rate: HourlyRange::new(spec.rate.0, spec.rate.1)?,
        salary: format!("NOK {} / hour", spec.rate.0),
        language: spec.language.to_string(),
        posted: "Posted today".to_string(),
        description: "Stock shelves and keep the warehouse tidy.".to_string(),
        responsibilities: vec!["Restock aisles".to_string()],
        benefits: vec!["Pension".to_string()],
        tags: spec.tags.iter().map(|t| Tag::new(*t)).collect(),
        apply_url: format!("https://jobs.example.no/{}", spec.id),
    })
}

/// Job A: Oslo night stocker that accepts English.
pub fn oslo_night() -> Result<JobPosting, InvertedRange> {
    job(JobSpec {
        id: "a",
        title: "Night Stocker",
        region: "Oslo",
        shift: Shift::Night,
        contract: Contract::FullTime,
        rate: (180, 200),
        language: "English required",
        tags: &["Forklift", "Cold storage"],
    })
}

/// Job B: Bergen day stocker, Norwegian only.
pub fn bergen_day() -> Result<JobPosting, InvertedRange> {
    job(JobSpec {
        id: "b",
        title: "Retail Stocker",
        region: "Bergen",
        shift: Shift::Day,
        contract: Contract::PartTime,
        rate: (160, 180),
        language: "Norwegian only",
        tags: &["Retail"],
    })
}

/// Job C: Rogaland automation role, English working language.
pub fn rogaland_automation() -> Result<JobPosting, InvertedRange> {
    job(JobSpec {
        id: "c",
        title: "AutoStore Operator",
        region: "Rogaland",
        shift: Shift::Rotating,
        contract: Contract::FullTime,
        rate: (215, 251),
        language: "ENGLISH working language",
        tags: &["Automation", "WMS"],
    })
}

pub fn sample_jobs() -> Result<Vec<JobPosting>, InvertedRange> {
    Ok(vec![oslo_night()?, bergen_day()?, rogaland_automation()?])
}
