use askama::Template;

use crate::flash::FlashMessage;
use crate::prompts::DESTINATION_REGION;

#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct IndexTemplate<'a> {
    pub region: &'a str,
    pub flash: Option<&'a FlashMessage>,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(flash: Option<&'a FlashMessage>) -> Self {
        Self {
            region: DESTINATION_REGION,
            flash,
        }
    }
}

#[derive(Template)]
#[template(path = "success.html")]
pub(crate) struct SuccessTemplate<'a> {
    pub region: &'a str,
    pub season: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub recommendations: &'a str,
    pub lines: Vec<RecommendationLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Safety,
    Text,
}

/// One displayable line of recommendation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationLine {
    pub kind: LineKind,
    /// Location name for bullets, `Safety` for the tip, empty otherwise.
    pub label: String,
    pub text: String,
}

impl RecommendationLine {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if let Some(tip) = line.strip_prefix("Safety:") {
            return Self {
                kind: LineKind::Safety,
                label: "Safety".to_string(),
                text: tip.trim().to_string(),
            };
        }

        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            let item = item.trim();
            return match item.split_once(':') {
                Some((location, description)) => Self {
                    kind: LineKind::Bullet,
                    label: location.trim().trim_matches('*').trim().to_string(),
                    text: description.trim().to_string(),
                },
                None => Self {
                    kind: LineKind::Bullet,
                    label: String::new(),
                    text: item.to_string(),
                },
            };
        }

        Self {
            kind: LineKind::Text,
            label: String::new(),
            text: line.to_string(),
        }
    }

    /// Non-blank lines of `text`, in order.
    pub fn parse_all(text: &str) -> Vec<Self> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            LineKind::Bullet => "recommendation",
            LineKind::Safety => "safety",
            LineKind::Text => "note",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::FlashMessage;
    use crate::prompts::FALLBACK_RECOMMENDATIONS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fallback_block() {
        let lines = RecommendationLine::parse_all(FALLBACK_RECOMMENDATIONS);

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            RecommendationLine {
                kind: LineKind::Bullet,
                label: "Manali".to_string(),
                text: "Popular hill station with adventure sports".to_string(),
            }
        );
        assert_eq!(lines[3].kind, LineKind::Safety);
        assert_eq!(lines[3].text, "Check weather forecasts regularly");
    }

    #[test]
    fn test_parse_markdown_bold_location() {
        let line = RecommendationLine::parse("* **Kasol**: Riverside camping");
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.label, "Kasol");
        assert_eq!(line.text, "Riverside camping");
    }

    #[test]
    fn test_parse_plain_text_and_blank_lines() {
        let lines = RecommendationLine::parse_all("Here you go:\n\n- Spiti without colon\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Text);
        assert_eq!(lines[1].kind, LineKind::Bullet);
        assert_eq!(lines[1].label, "");
    }

    #[test]
    fn test_index_renders_flash_escaped() {
        let flash = FlashMessage::error("<b>Please fill at least one field!</b>");
        let html = IndexTemplate::new(Some(&flash)).render().unwrap();

        assert!(html.contains("&lt;b&gt;Please fill at least one field!"));
        assert!(html.contains("name=\"season\""));
        assert!(html.contains("name=\"time\""));
    }

    #[test]
    fn test_success_renders_values() {
        let text = "- Manali: Snow & skiing\nSafety: Watch for icy roads";
        let html = SuccessTemplate {
            region: DESTINATION_REGION,
            season: "Winter",
            month: "",
            year: "2024",
            date: "",
            time: "",
            recommendations: text,
            lines: RecommendationLine::parse_all(text),
        }
        .render()
        .unwrap();

        assert!(html.contains("Winter"));
        assert!(html.contains("2024"));
        assert!(html.contains("Snow &amp; skiing"));
        assert!(html.contains("Safety:"));
    }
}
