//! Human-readable feedback for a composed match score.

/// Lower bound (inclusive) of the "excellent fit" tier.
pub const EXCELLENT_THRESHOLD: f64 = 85.0;
/// Lower bound (inclusive) of the "good fit" tier.
pub const GOOD_THRESHOLD: f64 = 65.0;
/// Lower bound (inclusive) of the "partial fit" tier.
pub const PARTIAL_THRESHOLD: f64 = 40.0;

/// How many missing keywords are spelled out before the message switches to a count.
const MAX_LISTED_MISSING: usize = 8;

pub const EXCELLENT_FIT: &str =
    "Excellent fit — the resume is highly aligned with the job description.";
pub const GOOD_FIT: &str = "Good fit — candidate is a strong match with a few improvement areas.";
pub const PARTIAL_FIT: &str =
    "Partial fit — some relevant skills present but there are notable gaps.";
pub const LOW_FIT: &str = "Low fit — there are significant gaps in alignment with this role.";
pub const NO_MISSING: &str = "No major JD keywords appear to be missing in the resume.";
pub const TAILORING_ADVICE: &str = "Consider tailoring the resume by explicitly mentioning relevant tools, technologies, and responsibilities from the JD.";
pub const INTERVIEW_READY: &str =
    "Candidate looks ready for this role. Focus the interview on depth and real projects.";

/// Score band used to pick the opening message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitTier {
    Excellent,
    Good,
    Partial,
    Low,
}

impl FitTier {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            FitTier::Excellent
        } else if score >= GOOD_THRESHOLD {
            FitTier::Good
        } else if score >= PARTIAL_THRESHOLD {
            FitTier::Partial
        } else {
            FitTier::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FitTier::Excellent => EXCELLENT_FIT,
            FitTier::Good => GOOD_FIT,
            FitTier::Partial => PARTIAL_FIT,
            FitTier::Low => LOW_FIT,
        }
    }
}

/// Builds the ordered feedback list: tier, missing keywords, closing advice.
pub fn build_feedback(score: f64, missing: &[String]) -> Vec<String> {
    let tier = FitTier::from_score(score);

    let missing_message = if missing.is_empty() {
        NO_MISSING.to_string()
    } else if missing.len() <= MAX_LISTED_MISSING {
        format!("Missing important keywords/skills: {}.", missing.join(", "))
    } else {
        format!(
            "Missing {} JD keywords. Key missing skills: {}.",
            missing.len(),
            missing[..MAX_LISTED_MISSING].join(", ")
        )
    };

    let closing = if tier == FitTier::Excellent {
        INTERVIEW_READY
    } else {
        TAILORING_ADVICE
    };

    vec![tier.message().to_string(), missing_message, closing.to_string()]
}
