use crate::{compile_page, CompileOptions};
use codeframe_parser::parse;

fn body_only() -> CompileOptions {
    CompileOptions {
        standalone: false,
        ..Default::default()
    }
}

#[test]
fn test_markup_passes_through_verbatim() {
    let doc = parse("<h1>Title</h1>\n<p>prose &amp; entities</p>\n").unwrap();
    let html = compile_page(&doc, body_only());
    assert_eq!(html, "<h1>Title</h1>\n<p>prose &amp; entities</p>\n");
}

#[test]
fn test_widget_is_replaced_in_place() {
    let source = concat!(
        "before\n",
        "{{ preview }}{{ snippet lang=\"html\" }}<b>x</b>{{ /snippet }}{{ /preview }}\n",
        "after\n",
    );
    let doc = parse(source).unwrap();
    let html = compile_page(&doc, body_only());

    assert!(html.starts_with("before\n"));
    assert!(html.ends_with("\nafter\n"));
    assert!(html.contains("code-preview__frame"));
    // The widget source tags never reach the output
    assert!(!html.contains("{{ preview }}"));
}

#[test]
fn test_standalone_shell() {
    let doc = parse("<p>hi</p>").unwrap();
    let options = CompileOptions {
        title: Some("My Post".to_string()),
        stylesheet: Some("/css/site.css".to_string()),
        ..Default::default()
    };
    let html = compile_page(&doc, options);

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>My Post</title>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"/css/site.css\">"));
    assert!(html.contains("<p>hi</p>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_title_is_escaped_in_shell() {
    let doc = parse("x").unwrap();
    let options = CompileOptions {
        title: Some("a < b".to_string()),
        ..Default::default()
    };
    let html = compile_page(&doc, options);
    assert!(html.contains("<title>a &lt; b</title>"));
}

#[test]
fn test_preview_title_becomes_frame_title() {
    let source =
        "{{ preview title=\"Demo widget\" }}{{ snippet lang=\"html\" }}<i>x</i>{{ /snippet }}{{ /preview }}";
    let doc = parse(source).unwrap();
    let html = compile_page(&doc, body_only());
    assert!(html.contains("title=\"Demo widget\""));
}

#[test]
fn test_multiple_widgets_compile_independently() {
    let source = concat!(
        "{{ preview }}{{ snippet lang=\"css\" }}.a{}{{ /snippet }}{{ /preview }}",
        "{{ preview }}{{ snippet lang=\"css\" }}.b{}{{ /snippet }}{{ /preview }}",
    );
    let doc = parse(source).unwrap();
    let html = compile_page(&doc, body_only());

    assert_eq!(html.matches("<iframe").count(), 2);
    let first_frame = html.split("srcdoc=\"").nth(1).unwrap();
    let second_frame = html.split("srcdoc=\"").nth(2).unwrap();
    assert!(first_frame.contains(".a"));
    assert!(!second_frame
        .split('"')
        .next()
        .unwrap()
        .contains(".a"));
}
