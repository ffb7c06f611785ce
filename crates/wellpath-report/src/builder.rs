use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;
use wellpath_core::models::context::{ReportContext, ReportSection, SectionContent, TemplateVariant};
use wellpath_core::models::metrics::{CognitionBands, DerivedMetrics, Triggers};
use wellpath_intake::{IntakeOutcome, process_intake};

use crate::copy::{ReportCopyConfig, VariantCopy};
use crate::error::ReportError;
use crate::normalize::{normalize_labs, normalize_recommendations};
use crate::payload::{AssemblyPayload, CustomSectionInput};

const VARIANTS: [TemplateVariant; 3] = [
    TemplateVariant::Default,
    TemplateVariant::Prevention,
    TemplateVariant::Symptom,
];

/// Builds [`ReportContext`]s from assembly payloads.
///
/// Copy templates are compiled once in [`ContextBuilder::new`]; `build` is
/// a pure function of its payload apart from the default report date.
pub struct ContextBuilder {
    copy: ReportCopyConfig,
    tera: Tera,
}

/// Values available to copy templates.
#[derive(Serialize)]
struct CopyContext<'a> {
    first_name: &'a str,
    report_date: &'a str,
    bmi: Option<f64>,
    bmi_band: Option<&'static str>,
    triggers: &'a Triggers,
    cognition: &'a CognitionBands,
}

/// A section before its position and footer are settled.
struct PendingSection {
    id: String,
    title: String,
    content: SectionContent,
    footer: Option<String>,
}

impl ContextBuilder {
    pub fn new(copy: ReportCopyConfig) -> Result<Self, ReportError> {
        let mut tera = Tera::default();
        for variant in VARIANTS {
            let variant_copy = copy.variant(variant);
            for (field, source) in copy_fields(variant_copy) {
                let name = template_name(variant, field);
                tera.add_raw_template(&name, source)
                    .map_err(|e| ReportError::TemplateParse {
                        name: name.clone(),
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(Self { copy, tera })
    }

    pub fn build(&self, payload: &AssemblyPayload) -> Result<ReportContext, ReportError> {
        let outcome: Option<IntakeOutcome> = payload.intake.as_ref().map(process_intake);
        let metrics = payload
            .derived
            .clone()
            .or_else(|| outcome.as_ref().map(|o| o.metrics.clone()))
            .unwrap_or_default();

        let first_name = payload
            .first_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                outcome
                    .as_ref()
                    .map(|o| o.intake.first_name.as_str())
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or(self.copy.fallback_first_name.as_str())
            .to_string();

        let report_date = payload
            .report_date
            .clone()
            .unwrap_or_else(|| jiff::Zoned::now().date().to_string());

        let variant = select_variant(&metrics.triggers);
        let rendered = self.render_copy(variant, &first_name, &report_date, &metrics)?;

        let recommendations = normalize_recommendations(
            &payload.recommendations,
            &self.copy.recommendation_title_prefix,
        );
        let labs = normalize_labs(&payload.labs);

        let mut pending = vec![
            PendingSection {
                id: "intro".to_string(),
                title: rendered.intro_title,
                content: SectionContent::Text {
                    body: rendered.intro_body,
                },
                footer: None,
            },
            PendingSection {
                id: "summary".to_string(),
                title: rendered.summary_title,
                content: SectionContent::Text {
                    body: rendered.summary_body,
                },
                footer: None,
            },
        ];
        if !recommendations.is_empty() {
            pending.push(PendingSection {
                id: "recommendations".to_string(),
                title: self.copy.recommendations_title.clone(),
                content: SectionContent::Recommendations {
                    items: recommendations.clone(),
                },
                footer: None,
            });
        }
        if !labs.is_empty() {
            pending.push(PendingSection {
                id: "labs".to_string(),
                title: self.copy.labs_title.clone(),
                content: SectionContent::Bullets {
                    items: labs.clone(),
                },
                footer: None,
            });
        }
        pending.extend(
            payload
                .custom_sections
                .iter()
                .enumerate()
                .map(|(i, custom)| custom_section(i, custom)),
        );

        let footer_banner = payload
            .footer_banner
            .clone()
            .unwrap_or_else(|| self.copy.footer_banner.clone());
        let sections = settle_sections(pending, &footer_banner, payload);

        debug!(
            ?variant,
            sections = sections.len(),
            recommendations = recommendations.len(),
            labs = labs.len(),
            "assembled report context"
        );

        Ok(ReportContext {
            first_name,
            report_date,
            is_draft: payload.is_draft,
            variant,
            triggers: metrics.triggers,
            global_disclaimer: payload
                .global_disclaimer
                .clone()
                .unwrap_or_else(|| self.copy.global_disclaimer.clone()),
            footer_banner,
            sections,
            recommendations,
            labs,
        })
    }

    fn render_copy(
        &self,
        variant: TemplateVariant,
        first_name: &str,
        report_date: &str,
        metrics: &DerivedMetrics,
    ) -> Result<VariantCopy, ReportError> {
        let context = Context::from_serialize(CopyContext {
            first_name,
            report_date,
            bmi: metrics.bmi,
            bmi_band: metrics.bmi_band.map(|b| b.as_str()),
            triggers: &metrics.triggers,
            cognition: &metrics.cognition_bands,
        })?;
        let render = |field: &str| self.tera.render(&template_name(variant, field), &context);

        Ok(VariantCopy {
            intro_title: render("intro_title")?,
            intro_body: render("intro_body")?,
            summary_title: render("summary_title")?,
            summary_body: render("summary_body")?,
        })
    }
}

/// Pick the copy variant. Symptom mode wins over prevention mode.
pub fn select_variant(triggers: &Triggers) -> TemplateVariant {
    if triggers.is_symptom_mode {
        TemplateVariant::Symptom
    } else if triggers.is_prevention_mode {
        TemplateVariant::Prevention
    } else {
        TemplateVariant::Default
    }
}

fn copy_fields(copy: &VariantCopy) -> [(&'static str, &str); 4] {
    [
        ("intro_title", copy.intro_title.as_str()),
        ("intro_body", copy.intro_body.as_str()),
        ("summary_title", copy.summary_title.as_str()),
        ("summary_body", copy.summary_body.as_str()),
    ]
}

fn template_name(variant: TemplateVariant, field: &str) -> String {
    let variant = match variant {
        TemplateVariant::Default => "default",
        TemplateVariant::Prevention => "prevention",
        TemplateVariant::Symptom => "symptom",
    };
    format!("{variant}.{field}")
}

fn custom_section(index: usize, custom: &CustomSectionInput) -> PendingSection {
    let content = match &custom.items {
        Some(items) => SectionContent::Bullets {
            items: items.clone(),
        },
        None => SectionContent::Text {
            body: custom.body.clone().unwrap_or_default(),
        },
    };
    PendingSection {
        id: custom
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("custom-{}", index + 1)),
        title: custom.title.clone(),
        content,
        footer: custom.footer.clone(),
    }
}

/// Assign final positions and footers. A section's own footer wins, then a
/// payload override for its id, then the report-wide banner.
fn settle_sections(
    pending: Vec<PendingSection>,
    footer_banner: &str,
    payload: &AssemblyPayload,
) -> Vec<ReportSection> {
    pending
        .into_iter()
        .enumerate()
        .map(|(order, section)| {
            let footer = section
                .footer
                .or_else(|| payload.section_footers.get(&section.id).cloned())
                .unwrap_or_else(|| footer_banner.to_string());
            ReportSection {
                id: section.id,
                title: section.title,
                content: section.content,
                footer,
                order,
            }
        })
        .collect()
}
