use crate::model::format_amount;
use crate::scoring::{ScoreBreakdown, ScoredRecipe};

/// Formats scored recipes into human-readable explanations.
pub struct ScoreFormatter;

impl ScoreFormatter {
    /// Explains how a score was reached, e.g.
    /// `2/3 ingredients (67) + quick (8) + favorite (10) = 85`.
    pub fn format_breakdown(scored: &ScoredRecipe<'_>) -> String {
        let mut parts = vec![format!(
            "{}/{} ingredients ({})",
            scored.have_count,
            scored.required_count,
            Self::format_points(scored.breakdown.coverage)
        )];
        Self::push_bonus(&mut parts, "quick", &scored.breakdown, |b| b.time_bonus);
        Self::push_bonus(&mut parts, "favorite", &scored.breakdown, |b| b.favorite_bonus);
        format!("{} = {}", parts.join(" + "), scored.score)
    }

    /// One summary line per recipe, with the missing ingredients if any.
    pub fn format_line(scored: &ScoredRecipe<'_>) -> String {
        let recipe = scored.recipe;
        let mut line = format!(
            "{:>4}  {} ({} min, {})",
            scored.score, recipe.name, recipe.time_minutes, recipe.difficulty
        );
        if !scored.missing.is_empty() {
            line.push_str(&format!("  missing: {}", scored.missing.join(", ")));
        }
        line
    }

    fn push_bonus<F>(parts: &mut Vec<String>, label: &str, breakdown: &ScoreBreakdown, pick: F)
    where
        F: Fn(&ScoreBreakdown) -> f64,
    {
        let value = pick(breakdown);
        if value != 0.0 {
            parts.push(format!("{} ({})", label, Self::format_points(value)));
        }
    }

    fn format_points(value: f64) -> String {
        format_amount(value.round())
    }
}
