//! Inline CSS for a property bag.
//!
//! The host writes these pairs with `style.setProperty`. Transform channels
//! compose into a single `transform` declaration in a fixed order so the
//! same bag always yields the same string.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::props::{Prop, Props};

/// CSS declarations for `props`, in a stable order.
#[must_use]
pub fn css(props: &Props) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(transform) = transform(props) {
        out.push(("transform", transform));
    }

    if let Some(alpha) = props.get(Prop::AutoAlpha) {
        out.push(("opacity", number(alpha)));
        let visibility = if alpha <= 0.0 { "hidden" } else { "inherit" };
        out.push(("visibility", visibility.to_string()));
    } else if let Some(opacity) = props.get(Prop::Opacity) {
        out.push(("opacity", number(opacity)));
    }

    if let Some(blur) = props.get(Prop::Blur) {
        out.push(("filter", format!("blur({}px)", number(blur))));
    }
    out
}

fn transform(props: &Props) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(p) = props.get(Prop::Perspective).filter(|p| *p > 0.0) {
        parts.push(format!("perspective({}px)", number(p)));
    }
    if props.contains(Prop::X) || props.contains(Prop::Y) {
        parts.push(format!(
            "translate({}px, {}px)",
            number(props.get_or_rest(Prop::X)),
            number(props.get_or_rest(Prop::Y))
        ));
    }
    if props.contains(Prop::XPercent) || props.contains(Prop::YPercent) {
        parts.push(format!(
            "translate({}%, {}%)",
            number(props.get_or_rest(Prop::XPercent)),
            number(props.get_or_rest(Prop::YPercent))
        ));
    }
    if let Some(deg) = props.get(Prop::RotationX) {
        parts.push(format!("rotateX({}deg)", number(deg)));
    }
    if let Some(deg) = props.get(Prop::RotationY) {
        parts.push(format!("rotateY({}deg)", number(deg)));
    }
    if let Some(scale) = props.get(Prop::Scale) {
        parts.push(format!("scale({})", number(scale)));
    }
    if parts.is_empty() { None } else { Some(parts.join(" ")) }
}

/// Round to four decimals and drop trailing zeros; CSS does not need more
/// and it keeps `-0` and float noise out of the output.
fn number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
