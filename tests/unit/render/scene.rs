use super::*;

#[test]
fn objective_labels_use_subscript_digits() {
    assert_eq!(objective_label(1), "f₁");
    assert_eq!(objective_label(4), "f₄");
    assert_eq!(objective_label(12), "f₁₂");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");

    let mut canvas = FigureCanvas::new(10, 10, Rgba8::WHITE);
    canvas.text(Point::new(1.0, 1.0), "<front>", &TextStyle::new(4.0));
    let svg = canvas.to_svg();
    assert!(svg.contains("&lt;front&gt;"));
    assert!(!svg.contains("<front>"));
}

#[test]
fn canvas_starts_with_an_opaque_background() {
    let canvas = FigureCanvas::new(40, 20, Rgba8::WHITE);
    let svg = canvas.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="40" height="20""#));
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert_eq!(canvas.width(), 40.0);
    assert_eq!(canvas.height(), 20.0);
}

#[test]
fn stroke_patterns_emit_dash_arrays() {
    let mut canvas = FigureCanvas::new(10, 10, Rgba8::WHITE);
    let a = Point::new(0.0, 0.0);
    let b = Point::new(5.0, 5.0);
    canvas.line(a, b, &Stroke::solid(Rgba8::BLACK, 1.0));
    canvas.line(a, b, &Stroke::dashed(Rgba8::BLACK, 1.0));
    canvas.line(a, b, &Stroke::dotted(Rgba8::GRAY, 1.0));
    let svg = canvas.to_svg();
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains(r#"stroke-dasharray="3.70 1.60""#));
    assert!(svg.contains(r#"stroke-dasharray="1.00 1.65""#));
}

#[test]
fn degenerate_shapes_are_skipped() {
    let mut canvas = FigureCanvas::new(10, 10, Rgba8::WHITE);
    let before = canvas.to_svg();
    canvas.circle(Point::new(1.0, 1.0), 0.0, Rgba8::BLACK);
    canvas.circle(Point::new(1.0, 1.0), f64::NAN, Rgba8::BLACK);
    canvas.polyline(&[Point::new(1.0, 1.0)], &Stroke::solid(Rgba8::BLACK, 1.0));
    canvas.text(Point::ZERO, "", &TextStyle::new(3.0));
    assert_eq!(canvas.to_svg(), before);
}

#[test]
fn rotated_bold_text_attributes() {
    let mut canvas = FigureCanvas::new(10, 10, Rgba8::WHITE);
    let style = TextStyle::new(5.0)
        .anchor(Anchor::End)
        .bold()
        .italic()
        .monospace()
        .rotate(-90.0);
    canvas.text(Point::new(2.0, 3.0), "f₂", &style);
    let svg = canvas.to_svg();
    assert!(svg.contains(r#"text-anchor="end""#));
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"font-style="italic""#));
    assert!(svg.contains(r#"font-family="monospace""#));
    assert!(svg.contains(r#"transform="rotate(-90.00 2.00 3.00)""#));
}
