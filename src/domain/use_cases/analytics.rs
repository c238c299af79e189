use serde::Serialize;

use crate::{
    constants::{MID_LEVEL_CUTOFF, SENIOR_CUTOFF, TOP_SKILLS_LIMIT},
    entities::skill::{Skill, SkillCategory},
    errors::AppError,
    repositories::skills::SkillRepository,
};

/// Per-category skill counts, the only state the analytics read.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCounts {
    pub frontend: i64,
    pub backend: i64,
    pub devops: i64,
}

impl CategoryCounts {
    pub fn from_pairs(pairs: Vec<(SkillCategory, i64)>) -> Self {
        let mut counts = CategoryCounts::default();
        for (category, count) in pairs {
            match category {
                SkillCategory::Frontend => counts.frontend = count,
                SkillCategory::Backend => counts.backend = count,
                SkillCategory::Devops => counts.devops = count,
            }
        }
        counts
    }

    pub fn get(&self, category: SkillCategory) -> i64 {
        match category {
            SkillCategory::Frontend => self.frontend,
            SkillCategory::Backend => self.backend,
            SkillCategory::Devops => self.devops,
        }
    }

    pub fn total(&self) -> i64 {
        self.frontend + self.backend + self.devops
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsDistribution {
    pub labels: Vec<&'static str>,
    pub counts: Vec<i64>,
    pub percentages: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct CategoryScores {
    pub frontend: f64,
    pub backend: f64,
    pub devops: f64,
    pub overall: f64,
}

#[derive(Debug, Serialize)]
pub struct SeniorityAnalysis {
    pub scores: CategoryScores,
    pub level: &'static str,
    pub weakest_area: &'static str,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct SkillAnalyticsResponse {
    pub total_skills: i64,
    pub skills_distribution: SkillsDistribution,
    pub top_skills: Vec<Skill>,
    pub senior_level_analysis: SeniorityAnalysis,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of each non-empty category, rounded to one decimal.
/// With no skills at all every vector is empty.
pub fn distribution(counts: &CategoryCounts) -> SkillsDistribution {
    let total = counts.total();

    let mut labels = Vec::new();
    let mut category_counts = Vec::new();
    let mut percentages = Vec::new();

    if total == 0 {
        return SkillsDistribution {
            labels,
            counts: category_counts,
            percentages,
        };
    }

    for category in SkillCategory::ALL {
        let count = counts.get(category);
        if count == 0 {
            continue;
        }
        labels.push(category.label());
        category_counts.push(count);
        percentages.push(round1(count as f64 / total as f64 * 100.0));
    }

    SkillsDistribution {
        labels,
        counts: category_counts,
        percentages,
    }
}

fn category_score(count: i64, target: i64) -> f64 {
    (count as f64 / target as f64 * 100.0).min(100.0)
}

/// Weighted seniority estimate. Each category is scored against its
/// target count, clamped at 100, then combined with fixed weights.
pub fn seniority(counts: &CategoryCounts) -> SeniorityAnalysis {
    let mut overall = 0.0;
    let mut weakest = SkillCategory::Frontend;
    let mut weakest_score = f64::INFINITY;
    let mut scores = [0.0f64; 3];

    for (i, category) in SkillCategory::ALL.into_iter().enumerate() {
        let score = category_score(counts.get(category), category.target());
        scores[i] = score;
        overall += score * category.weight();
        // Strict comparison keeps the first category on ties.
        if score < weakest_score {
            weakest_score = score;
            weakest = category;
        }
    }

    let level = if overall >= SENIOR_CUTOFF {
        "Senior"
    } else if overall >= MID_LEVEL_CUTOFF {
        "Mid-level"
    } else {
        "Junior"
    };

    let summary = match level {
        "Senior" => "Broad, well-balanced coverage across the stack.",
        "Mid-level" => "Solid foundation with clear room to deepen.",
        _ => "Early-stage breadth; keep building out the basics.",
    };
    let analysis = format!(
        "{} profile at {:.1}/100. {} The thinnest area right now is {}.",
        level,
        overall,
        summary,
        weakest.label()
    );

    SeniorityAnalysis {
        scores: CategoryScores {
            frontend: scores[0],
            backend: scores[1],
            devops: scores[2],
            overall,
        },
        level,
        weakest_area: weakest.label(),
        analysis,
    }
}

pub struct SkillAnalyticsHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillAnalyticsHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillAnalyticsHandler { skill_repo }
    }

    /// Recomputes the whole analytics projection from current repository
    /// state. Nothing is cached or persisted.
    pub async fn skill_analytics(&self) -> Result<SkillAnalyticsResponse, AppError> {
        let counts = CategoryCounts::from_pairs(self.skill_repo.count_by_category().await?);
        let top_skills = self.skill_repo.top_skills(TOP_SKILLS_LIMIT).await?;

        Ok(SkillAnalyticsResponse {
            total_skills: counts.total(),
            skills_distribution: distribution(&counts),
            top_skills,
            senior_level_analysis: seniority(&counts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(frontend: i64, backend: i64, devops: i64) -> CategoryCounts {
        CategoryCounts {
            frontend,
            backend,
            devops,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn full_targets_score_senior_at_exactly_100() {
        let analysis = seniority(&counts(5, 5, 3));
        assert_close(analysis.scores.frontend, 100.0);
        assert_close(analysis.scores.backend, 100.0);
        assert_close(analysis.scores.devops, 100.0);
        assert_close(analysis.scores.overall, 100.0);
        assert_eq!(analysis.level, "Senior");
    }

    #[test]
    fn sparse_portfolio_scores_junior_with_devops_weakest() {
        let analysis = seniority(&counts(2, 1, 0));
        assert_close(analysis.scores.frontend, 40.0);
        assert_close(analysis.scores.backend, 20.0);
        assert_close(analysis.scores.devops, 0.0);
        assert_close(analysis.scores.overall, 21.0);
        assert_eq!(analysis.level, "Junior");
        assert_eq!(analysis.weakest_area, "devops");
    }

    #[test]
    fn category_scores_clamp_at_100() {
        let analysis = seniority(&counts(50, 50, 50));
        assert_close(analysis.scores.frontend, 100.0);
        assert_close(analysis.scores.overall, 100.0);
    }

    #[test]
    fn overall_is_weighted_sum_of_category_scores() {
        let analysis = seniority(&counts(5, 3, 1));
        let expected = 0.35 * 100.0 + 0.35 * 60.0 + 0.30 * (100.0 / 3.0);
        assert_close(analysis.scores.overall, expected);
    }

    #[test]
    fn weakest_area_ties_resolve_frontend_first() {
        // frontend and backend both hit 20.0; frontend wins the tie.
        let analysis = seniority(&counts(1, 1, 1));
        assert_eq!(analysis.weakest_area, "frontend");
    }

    #[test]
    fn distribution_percentages_sum_to_100() {
        let dist = distribution(&counts(2, 1, 4));
        let sum: f64 = dist.percentages.iter().sum();
        assert!((sum - 100.0).abs() < 0.2, "sum was {sum}");
    }

    #[test]
    fn distribution_skips_empty_categories() {
        let dist = distribution(&counts(2, 0, 1));
        assert_eq!(dist.labels, vec!["frontend", "devops"]);
        assert_eq!(dist.counts, vec![2, 1]);
        assert_close(dist.percentages[0], 66.7);
        assert_close(dist.percentages[1], 33.3);
    }

    #[test]
    fn zero_skills_yields_empty_distribution() {
        let dist = distribution(&counts(0, 0, 0));
        assert!(dist.labels.is_empty());
        assert!(dist.counts.is_empty());
        assert!(dist.percentages.is_empty());
    }

    #[test]
    fn zero_skills_seniority_is_junior_without_panicking() {
        let analysis = seniority(&counts(0, 0, 0));
        assert_close(analysis.scores.overall, 0.0);
        assert_eq!(analysis.level, "Junior");
        assert_eq!(analysis.weakest_area, "frontend");
    }

    #[test]
    fn mid_level_band_starts_at_60() {
        // 3/5, 3/5, 2/3 -> 0.35*60 + 0.35*60 + 0.30*66.66 = 62.0
        let analysis = seniority(&counts(3, 3, 2));
        assert_eq!(analysis.level, "Mid-level");
    }
}
