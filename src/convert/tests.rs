//! End-to-end tests for document conversion
//!
//! These tests build small documents by hand and check the rendered markup
//! and stylesheet together.

use super::*;
use crate::common::{Error, FontColor, RGBColor};
use crate::document::{BodyElement, ParagraphInfo, RunFormatting, RunInfo, StyleRecord, StyleTable};
use crate::html::{ClassSeparator, render};

const RED: RGBColor = RGBColor::new(255, 0, 0);
const BLUE: RGBColor = RGBColor::new(0, 0, 255);

fn normal_styles() -> StyleTable {
    StyleTable::build(vec![
        StyleRecord::paragraph("Normal")
            .with_font_color(RED)
            .with_font_size(24),
    ])
    .unwrap()
}

#[test]
fn test_hello_document() {
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("Hello")).into()],
        normal_styles(),
    );

    let converted = doc.convert().unwrap();
    assert_eq!(
        converted.html,
        r##"<article><p class="Normal" style="white-space:nowrap;"><span style="color:#FF0000; font-size:24px;">Hello</span></p></article>"##
    );
    assert!(converted.css.contains(".Normal {"));
    assert!(converted.css.contains("color: #FF0000;"));
    assert!(converted.css.contains("font-size: 24px;"));
}

#[test]
fn test_direct_size_overrides_paragraph_style() {
    let styles = StyleTable::build(vec![StyleRecord::paragraph("Body").with_font_size(12)]).unwrap();
    let body = vec![
        ParagraphInfo::new(Some("Body"))
            .with_run(RunInfo::new("big").with_font_size(20))
            .with_run(RunInfo::new("small"))
            .into(),
    ];

    let options = HtmlOptions::default();
    let tree = DocumentConverter::new(&styles, &options)
        .convert_to_markup(&body, "article")
        .unwrap();

    let paragraph = &tree.children()[0];
    assert_eq!(paragraph.children()[0].style_property("font-size"), Some("20px"));
    assert_eq!(paragraph.children()[1].style_property("font-size"), Some("12px"));
    assert!(render(&tree).contains(r#"<span style="font-size:20px;">big</span>"#));
}

#[test]
fn test_character_style_sits_between_run_and_paragraph() {
    let styles = StyleTable::build(vec![
        StyleRecord::paragraph("Normal").with_font_color(RED).with_font_size(24),
        StyleRecord::character("Accent").with_font_color(BLUE),
    ])
    .unwrap()
    .with_defaults(RunFormatting::new().with_font_color(RGBColor::new(0, 0, 0)));

    let body = vec![
        ParagraphInfo::new(Some("Normal"))
            .with_run(RunInfo::new("accent").with_style("Accent"))
            .with_run(RunInfo::new("direct").with_style("Accent").with_font_color(FontColor::Auto))
            .into(),
    ];

    let options = HtmlOptions::default();
    let tree = DocumentConverter::new(&styles, &options)
        .convert_to_markup(&body, "div")
        .unwrap();
    let runs = tree.children()[0].children();

    assert_eq!(runs[0].class_names(), ["Accent"]);
    assert_eq!(runs[0].style_property("color"), Some("#0000FF"));
    assert_eq!(runs[0].style_property("font-size"), Some("24px"));
    // Auto color set directly on the run leaves no color declaration.
    assert_eq!(runs[1].style_property("color"), None);
}

#[test]
fn test_paragraph_without_style() {
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(None).with_run(RunInfo::new("plain")).into()],
        StyleTable::default(),
    );

    assert_eq!(
        doc.to_html().unwrap(),
        r#"<article><p style="white-space:nowrap;"><span>plain</span></p></article>"#
    );
}

#[test]
fn test_blank_style_ids_mean_no_style() {
    let doc = WordDocument::new(
        vec![
            ParagraphInfo::new(Some("  "))
                .with_run(RunInfo::new("plain").with_style(""))
                .into(),
        ],
        StyleTable::default().with_defaults(RunFormatting::new().with_bold(true)),
    );
    let options = HtmlOptions::new().with_no_wrap(false);

    assert_eq!(
        doc.to_html_with_options(&options).unwrap(),
        r#"<article><p><span style="font-weight:bold;">plain</span></p></article>"#
    );
}

#[test]
fn test_document_defaults_apply_to_unstyled_paragraphs() {
    let styles = StyleTable::default().with_defaults(RunFormatting::new().with_font_size(22));
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(None).with_run(RunInfo::new("x")).into()],
        styles,
    );

    assert!(doc.to_html().unwrap().contains(r#"<span style="font-size:22px;">x</span>"#));
}

#[test]
fn test_empty_paragraph_and_skipped_elements() {
    let doc = WordDocument::new(
        vec![
            BodyElement::Other { tag: "tbl".to_string() },
            ParagraphInfo::new(Some("Normal")).into(),
            BodyElement::Other { tag: "sectPr".to_string() },
        ],
        normal_styles(),
    );

    let options = HtmlOptions::new().with_no_wrap(false);
    assert_eq!(
        doc.to_html_with_options(&options).unwrap(),
        r#"<article><p class="Normal"/></article>"#
    );
}

#[test]
fn test_empty_run_is_self_closing() {
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("")).into()],
        normal_styles(),
    );

    assert!(doc.to_html().unwrap().contains(
        r##"<span style="color:#FF0000; font-size:24px;"/>"##
    ));
}

#[test]
fn test_custom_tags_and_separator() {
    let styles = StyleTable::build(vec![
        StyleRecord::paragraph("Normal"),
        StyleRecord::character("Strong").with_formatting(RunFormatting::new().with_bold(true)),
    ])
    .unwrap();
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("b").with_style("Strong")).into()],
        styles,
    );

    let options = HtmlOptions::new()
        .with_root_tag("section")
        .with_paragraph_tag("div")
        .with_run_tag("em")
        .with_class_separator(ClassSeparator::Space)
        .with_no_wrap(false);
    let converted = doc.convert_with_options(&options).unwrap();

    assert_eq!(
        converted.html,
        r#"<section><div class="Normal"><em class="Strong" style="font-weight:bold;">b</em></div></section>"#
    );
    assert_eq!(
        converted.css,
        ".Normal {\n}\n\n.Strong {\n  font-weight: bold;\n}\n"
    );
}

#[test]
fn test_text_is_escaped_by_default() {
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(None).with_run(RunInfo::new("a<b & c")).into()],
        StyleTable::default(),
    );
    let options = HtmlOptions::new().with_no_wrap(false);

    assert_eq!(
        doc.to_html_with_options(&options).unwrap(),
        "<article><p><span>a&lt;b &amp; c</span></p></article>"
    );
    assert_eq!(
        doc.to_html_with_options(&options.clone().with_escaping(false)).unwrap(),
        "<article><p><span>a<b & c</span></p></article>"
    );
}

#[test]
fn test_cyclic_styles_fail_conversion() {
    let styles = StyleTable::build(vec![
        StyleRecord::paragraph("C").based_on("D"),
        StyleRecord::paragraph("D").based_on("C"),
    ])
    .unwrap();
    let doc = WordDocument::new(vec![ParagraphInfo::new(Some("D")).into()], styles);

    assert!(matches!(doc.convert(), Err(Error::CyclicStyleChain { .. })));
    assert!(matches!(doc.to_css(), Err(Error::CyclicStyleChain { .. })));
}

#[test]
fn test_unknown_paragraph_style_fails_conversion() {
    let doc = WordDocument::new(
        vec![ParagraphInfo::new(Some("Ghost")).into()],
        normal_styles(),
    );

    assert_eq!(
        doc.to_html(),
        Err(Error::UnknownStyleReference {
            style_id: "Ghost".to_string(),
            referenced_by: None,
        })
    );
}

#[test]
fn test_invalid_root_tag() {
    let options = HtmlOptions::default();
    let styles = StyleTable::default();
    let converter = DocumentConverter::new(&styles, &options);
    assert!(matches!(
        converter.convert_to_markup(&[], " "),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_rendering_twice_is_identical() {
    let doc = WordDocument::new(
        vec![
            ParagraphInfo::new(Some("Normal"))
                .with_run(RunInfo::new("one"))
                .with_run(RunInfo::new("two").with_bold(true).with_italic(false))
                .into(),
        ],
        normal_styles(),
    );

    assert_eq!(doc.convert().unwrap(), doc.convert().unwrap());
}
