use wellpath_core::models::context::{
    Recommendation, ReportContext, ReportSection, SectionContent, TemplateVariant,
};
use wellpath_core::models::metrics::Triggers;
use wellpath_export::docx::{Block, generate_docx, parse_blocks};
use wellpath_export::render::render_markdown;
use wellpath_export::styles::DocumentStyles;

fn section(id: &str, title: &str, content: SectionContent, order: usize) -> ReportSection {
    ReportSection {
        id: id.to_string(),
        title: title.to_string(),
        content,
        footer: format!("{id} footer"),
        order,
    }
}

fn context() -> ReportContext {
    let recommendation = Recommendation {
        title: "Walk daily".to_string(),
        description: "Thirty minutes.".to_string(),
    };
    ReportContext {
        first_name: "Maya".to_string(),
        report_date: "2024-05-01".to_string(),
        is_draft: true,
        variant: TemplateVariant::Default,
        triggers: Triggers::default(),
        global_disclaimer: "Not medical advice.".to_string(),
        footer_banner: "Confidential".to_string(),
        // deliberately out of order
        sections: vec![
            section(
                "labs",
                "Labs",
                SectionContent::Bullets {
                    items: vec!["Lipid Panel".to_string()],
                },
                2,
            ),
            section(
                "intro",
                "Welcome",
                SectionContent::Text {
                    body: "Hello Maya.".to_string(),
                },
                0,
            ),
            section(
                "recommendations",
                "Recommendations",
                SectionContent::Recommendations {
                    items: vec![recommendation.clone()],
                },
                1,
            ),
        ],
        recommendations: vec![recommendation],
        labs: vec!["Lipid Panel".to_string()],
    }
}

#[test]
fn default_template_renders_sections_in_order() {
    let md = render_markdown(&context(), None).unwrap();

    assert!(md.starts_with("**DRAFT**"));
    assert!(md.contains("# Wellness Report for Maya"));
    assert!(md.contains("- **Walk daily** Thirty minutes."));
    assert!(md.contains("- Lipid Panel"));
    assert!(md.contains("_intro footer_"));
    assert!(md.trim_end().ends_with("Not medical advice."));

    let intro = md.find("## Welcome").unwrap();
    let recs = md.find("## Recommendations").unwrap();
    let labs = md.find("## Labs").unwrap();
    assert!(intro < recs && recs < labs);
    assert_eq!(md.matches("\n---\n").count(), 2);
}

#[test]
fn final_report_has_no_draft_marker() {
    let mut context = context();
    context.is_draft = false;
    let md = render_markdown(&context, None).unwrap();
    assert!(!md.contains("DRAFT"));
}

#[test]
fn custom_template_sees_camel_case_fields() {
    let template = "{{ firstName }}|{% for s in sections %}{{ s.id }},{% endfor %}";
    let md = render_markdown(&context(), Some(template)).unwrap();
    assert_eq!(md, "Maya|intro,recommendations,labs,");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_markdown(&context(), Some("{% for %}")).unwrap_err();
    assert!(err.to_string().contains("template parse error"));
}

#[test]
fn markdown_lines_classify_into_blocks() {
    let blocks = parse_blocks("# Title\n## Part\n- item\n_footer_\n---\n\nbody **bold**");
    assert_eq!(
        blocks,
        vec![
            Block::Heading { level: 1, text: "Title" },
            Block::Heading { level: 2, text: "Part" },
            Block::Bullet("item"),
            Block::Note("footer"),
            Block::PageBreak,
            Block::Blank,
            Block::Text("body **bold**"),
        ]
    );
}

#[test]
fn rendered_report_packs_into_docx() {
    let md = render_markdown(&context(), None).unwrap();
    let bytes = generate_docx(&md, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_footer_emits_no_note_line() {
    let mut context = context();
    for section in &mut context.sections {
        section.footer.clear();
    }

    let md = render_markdown(&context, None).unwrap();
    assert!(!md.contains("__"));

    let blocks = parse_blocks(&md);
    assert!(!blocks.iter().any(|b| matches!(b, Block::Note(_))));
    assert!(!blocks.iter().any(|b| matches!(b, Block::Text(t) if t.contains('_'))));
    assert!(blocks.contains(&Block::Text("Hello Maya.")));
}
