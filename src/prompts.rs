/// The single region every recommendation is scoped to.
pub const DESTINATION_REGION: &str = "Himachal Pradesh";

pub const RECOMMENDATIONS: &str = include_str!("../data/prompts/recommendations.txt");

/// Shown whenever the text-generation call cannot be completed.
pub const FALLBACK_RECOMMENDATIONS: &str = "- Manali: Popular hill station with adventure sports
- Shimla: Scenic capital with colonial architecture
- Dharamshala: Tibetan cultural hub with mountain views
Safety: Check weather forecasts regularly";

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Describe when the visitor plans to travel, e.g. `Winter month December`.
///
/// Empty (or whitespace-only) parts are skipped.
pub fn travel_context(season: &str, month: &str) -> String {
    let season = season.trim();
    let month = month.trim();

    let mut context = Vec::new();
    if !season.is_empty() {
        context.push(season.to_string());
    }
    if !month.is_empty() {
        context.push(format!("month {}", month));
    }
    context.join(" ")
}

pub fn recommendation_prompt(context: &str) -> String {
    render(
        RECOMMENDATIONS,
        &[("region", DESTINATION_REGION), ("context", context)],
    )
}
