use serde::{Deserialize, Serialize};
use wellpath_core::models::context::TemplateVariant;

/// Boilerplate copy for a report.
///
/// Titles and bodies are Tera templates rendered with `first_name`,
/// `report_date`, `bmi`, `bmi_band`, `triggers` and `cognition` in scope.
/// Every field has a default, so a JSON override may name only the fields
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCopyConfig {
    pub default: VariantCopy,
    pub prevention: VariantCopy,
    pub symptom: VariantCopy,
    pub recommendations_title: String,
    pub labs_title: String,
    /// Title prefix for recommendations supplied without one ("Recommendation 3").
    pub recommendation_title_prefix: String,
    /// Greeting name used when neither the payload nor the intake has one.
    pub fallback_first_name: String,
    pub global_disclaimer: String,
    pub footer_banner: String,
}

/// Intro letter and summary copy for one narrative variant. An override
/// replaces the whole variant, so all four fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantCopy {
    pub intro_title: String,
    pub intro_body: String,
    pub summary_title: String,
    pub summary_body: String,
}

impl ReportCopyConfig {
    pub fn variant(&self, variant: TemplateVariant) -> &VariantCopy {
        match variant {
            TemplateVariant::Default => &self.default,
            TemplateVariant::Prevention => &self.prevention,
            TemplateVariant::Symptom => &self.symptom,
        }
    }
}

const BMI_SENTENCE: &str = "{% if bmi %}Your body-mass index is {{ bmi }}\
{% if bmi_band == \"low\" %}, within the range associated with the lowest long-term risk.\
{% elif bmi_band == \"normal_highrisk\" %}, in the normal range but above the level associated with the lowest long-term risk.\
{% else %}, above the range associated with the lowest long-term risk.{% endif %} {% endif %}";

impl Default for ReportCopyConfig {
    fn default() -> Self {
        Self {
            default: VariantCopy {
                intro_title: "Your Wellness Report".to_string(),
                intro_body: "Dear {{ first_name }},\n\nThank you for completing your health \
                    questionnaire. This report brings together what you shared with us and the \
                    lab results we reviewed, with recommendations to support your long-term \
                    brain and body health."
                    .to_string(),
                summary_title: "Summary".to_string(),
                summary_body: format!(
                    "{BMI_SENTENCE}The recommendations that follow are based on your answers \
                     and your most recent lab results."
                ),
            },
            prevention: VariantCopy {
                intro_title: "Your Prevention Plan".to_string(),
                intro_body: "Dear {{ first_name }},\n\nYou told us you want to stay ahead of \
                    your health. This report focuses on prevention: the habits and screenings \
                    that do the most to protect your memory and overall health over the years \
                    ahead."
                    .to_string(),
                summary_title: "Where You Stand Today".to_string(),
                summary_body: format!(
                    "{BMI_SENTENCE}Small, steady changes now have the greatest long-term \
                     effect. The recommendations below are ordered to help you start with the \
                     most impactful steps."
                ),
            },
            symptom: VariantCopy {
                intro_title: "Understanding Your Symptoms".to_string(),
                intro_body: "Dear {{ first_name }},\n\nYou told us you have noticed changes \
                    that concern you. This report focuses on understanding those symptoms: \
                    which findings may contribute, what to discuss with your clinician, and \
                    the next steps that can help."
                    .to_string(),
                summary_title: "What We Found".to_string(),
                summary_body: format!(
                    "{BMI_SENTENCE}Several factors can contribute to the changes you \
                     described, and many of them are treatable. Please review the \
                     recommendations below with your clinician."
                ),
            },
            recommendations_title: "Recommendations".to_string(),
            labs_title: "Suggested Lab Tests".to_string(),
            recommendation_title_prefix: "Recommendation".to_string(),
            fallback_first_name: "there".to_string(),
            global_disclaimer: "This report is for educational purposes only and is not a \
                substitute for professional medical advice, diagnosis, or treatment. Always \
                consult your physician about your individual situation."
                .to_string(),
            footer_banner: "Confidential health information".to_string(),
        }
    }
}
