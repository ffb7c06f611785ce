use tera::{Context, Tera};
use wellpath_core::models::context::ReportContext;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "report.md";

/// Built-in layout for a report context. Sections are separated by page
/// breaks (`---`); each carries its own footer line unless the footer is
/// empty.
pub const DEFAULT_REPORT_TEMPLATE: &str = r#"{% if isDraft %}**DRAFT**

{% endif %}# Wellness Report for {{ firstName }}

{{ reportDate }}

{% for section in sections %}## {{ section.title }}

{% if section.content.type == "text" %}{{ section.content.body }}
{% elif section.content.type == "recommendations" %}{% for item in section.content.items %}- **{{ item.title }}**{% if item.description %} {{ item.description }}{% endif %}
{% endfor %}{% else %}{% for item in section.content.items %}- {{ item }}
{% endfor %}{% endif %}{% if section.footer %}
_{{ section.footer }}_
{% endif %}
{% if not loop.last %}---

{% endif %}{% endfor %}{{ globalDisclaimer }}
"#;

/// Render a report context into the Markdown subset understood by
/// [`generate_docx`](crate::docx::generate_docx).
///
/// `template` is raw Tera source; `None` uses [`DEFAULT_REPORT_TEMPLATE`].
/// The context's JSON field names (`firstName`, `sections`, ...) are the
/// template variables. Sections are always passed in `order` sequence.
pub fn render_markdown(context: &ReportContext, template: Option<&str>) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template.unwrap_or(DEFAULT_REPORT_TEMPLATE))
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut ordered = context.clone();
    ordered.sections.sort_by_key(|s| s.order);

    let value = serde_json::to_value(&ordered)?;
    let context = Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}
