use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VizError::MissingData
            .to_string()
            .contains("provide a dataset or an input file")
    );
    assert!(
        VizError::unsupported_chart("pie")
            .to_string()
            .contains("unsupported chart type: pie")
    );
    assert!(VizError::data("x").to_string().contains("data error:"));
    assert!(
        VizError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VizError::render("x").to_string().contains("render error:"));
    assert!(
        VizError::animation("x")
            .to_string()
            .contains("animation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VizError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
