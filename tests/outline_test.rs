//! Integration tests for the HTML to outline pipeline.

use docdeck::{
    outline_bytes, parse_html, to_outline, to_outline_with_options, Depth, OutlineBuilder,
    OutlineOptions,
};

/// A trimmed-down published page: a title, class stylesheet, prose, a card
/// table, a comment region and navigation links.
const PAGE: &str = concat!(
    r#"<html><head><meta content="text/html; charset=UTF-8" http-equiv="content-type">"#,
    r#"<style type="text/css">.c0{color:#000000;font-weight:400}.c4{font-weight:700}"#,
    r#".c7{color:#ff0000;font-style:italic}.c12{text-decoration:underline}</style></head>"#,
    r#"<body class="c0"><div id="header"><div id="title">Geography</div></div>"#,
    r#"<div id="contents">"#,
    r#"<p class="c1"><span class="c0">Capitals of Europe</span></p>"#,
    r#"<p class="c1"><span class="c0"></span></p>"#,
    r#"<table class="c5"><tbody>"#,
    r#"<tr class="c2"><td class="c3" colspan="1" rowspan="1"><p class="c1"><span class="c4">Capitals</span></p></td>"#,
    r#"<td class="c3"><p class="c1"><span class="c0">ignored</span></p></td></tr>"#,
    r#"<tr class="c2"><td class="c3"><p class="c1"><span class="c0">France -&gt; $$Paris$$</span></p></td></tr>"#,
    r#"<tr class="c2"><td class="c3"><p class="c1"><span class="c7">Spain</span><span class="c0"> -&gt; $$Madrid$$</span></p></td></tr>"#,
    r#"<tr class="c2"><td class="c3"><p class="c1"><span style="overflow: hidden; display: inline-block; width: 200.00px; height: 100.00px;">"#,
    r#"<img alt="" src="https://lh3.example.com/map.png" style="width: 200.00px; height: 100.00px; margin-left: 0.00px;" title="">"#,
    r#"</span></p></td></tr>"#,
    r#"</tbody></table>"#,
    r#"<p class="c1"><span class="c0">#MultilineCommentStart</span></p>"#,
    r#"<p class="c1"><span class="c0">Draft notes</span></p>"#,
    r#"<table><tbody><tr><td><p><span>Hidden</span></p></td></tr></tbody></table>"#,
    r#"<p class="c1"><span class="c0">#multiline commentend</span></p>"#,
    r#"<p class="c1"><span class="c0">See </span><span class="c12"><a href="https://example.com/atlas">the atlas</a></span></p>"#,
    r##"<p class="c1"><span class="c12"><a href="#top">Back to top</a></span></p>"##,
    r#"</div></body></html>"#,
);

#[test]
fn test_full_page_outline() {
    let outline = to_outline(PAGE).unwrap();

    assert_eq!(outline.title, "Geography");
    assert_eq!(
        outline.to_lines(),
        vec![
            "Capitals of Europe",
            r#"* <span style="font-weight:700; ">Capitals</span>"#,
            "** France -> {{c1::Paris}}",
            r#"** <p><span style="color:#ff0000; font-style:italic; ">Spain</span> -> {{c1::Madrid}}</p>"#,
            "** [image=https://lh3.example.com/map.png, height=100.00px, width=200.00px]",
            "See the atlas",
        ]
    );
}

#[test]
fn test_depths_follow_block_kinds() {
    let outline = to_outline(PAGE).unwrap();
    let depths: Vec<Depth> = outline.lines.iter().map(|line| line.depth).collect();

    assert_eq!(
        depths,
        vec![
            Depth::Body,
            Depth::Heading,
            Depth::SubHeading,
            Depth::SubHeading,
            Depth::SubHeading,
            Depth::Body,
        ]
    );
}

#[test]
fn test_cloze_numbering_across_cells() {
    let html = concat!(
        r#"<div id="title">Deck</div><table><tbody>"#,
        r#"<tr><td>Head</td></tr>"#,
        r#"<tr><td>$$A$$ and $2$B$$</td></tr>"#,
        r#"<tr><td>$3$C$$ then $$D$$</td></tr>"#,
        r#"</tbody></table>"#,
    );
    let outline = to_outline(html).unwrap();

    // Each cell numbers its aliases from 1.
    assert_eq!(
        outline.to_lines(),
        vec![
            "* Head",
            "** {{c1::A}} and {{c2::B}}",
            "** {{c3::C}} then {{c2::D}}",
        ]
    );
}

#[test]
fn test_unterminated_comment_region() {
    let html = concat!(
        r#"<div id="title">Deck</div>"#,
        r#"<p><span>Kept</span></p>"#,
        r#"<p><span>#multilinecommentstart</span></p>"#,
        r#"<p><span>Lost</span></p>"#,
        r#"<table><tbody><tr><td>Lost too</td></tr></tbody></table>"#,
    );
    let outline = to_outline(html).unwrap();
    assert_eq!(outline.to_lines(), vec!["Kept"]);
}

#[test]
fn test_table_sentinel_not_recognized() {
    let html = concat!(
        r#"<div id="title">Deck</div>"#,
        r#"<table><tbody><tr><td>#multilinecommentstart</td></tr></tbody></table>"#,
        r#"<p><span>Still here</span></p>"#,
    );
    let outline = to_outline(html).unwrap();
    assert_eq!(
        outline.to_lines(),
        vec!["* #multilinecommentstart", "Still here"]
    );
}

#[test]
fn test_stray_end_marker_is_plain_paragraph() {
    let html = concat!(
        r#"<div id="title">Deck</div>"#,
        r#"<p><span>#multilinecommentend</span></p>"#,
        r#"<p><span>After</span></p>"#,
    );
    let outline = to_outline(html).unwrap();
    assert_eq!(outline.to_lines(), vec!["#multilinecommentend", "After"]);
}

#[test]
fn test_custom_options() {
    let options = OutlineOptions::new()
        .with_comment_markers("%% hide", "%% show")
        .with_images(false)
        .with_cloze(false);
    let html = concat!(
        r#"<div id="title">Deck</div>"#,
        r#"<p><span>%%HIDE</span></p><p><span>gone</span></p><p><span>%% show</span></p>"#,
        r#"<table><tbody><tr><td>$$kept$$</td></tr>"#,
        r#"<tr><td><img src="a.png"></td></tr></tbody></table>"#,
    );
    let outline = to_outline_with_options(html, &options).unwrap();
    assert_eq!(
        outline.to_lines(),
        vec!["* $$kept$$", r#"** <img src="a.png"/>"#]
    );
}

#[test]
fn test_empty_document() {
    let outline = to_outline("").unwrap();
    assert_eq!(outline.title, "");
    assert!(outline.is_empty());
}

#[test]
fn test_builder_reused_across_documents() {
    let builder = OutlineBuilder::new();
    let first = builder.build(parse_html(PAGE).unwrap());
    let second = builder.build(parse_html(PAGE).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_outline_bytes_matches_text() {
    let from_bytes = outline_bytes(PAGE.as_bytes()).unwrap();
    let from_text = to_outline(PAGE).unwrap();
    assert_eq!(from_bytes, from_text);
}
