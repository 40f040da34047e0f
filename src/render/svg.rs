//! SVG output for the proportional size diagram

use crate::layout::{PlacedBody, SizeComparison};
use crate::render::RenderConfig;

/// Fill of the fixed Earth reference circle
pub const EARTH_COLOR: &str = "#3b82f6";

const GRID_SIZE: f64 = 20.0;
const GRID_STROKE: &str = "rgba(100, 116, 139, 0.1)";
const SEPARATOR_STROKE: &str = "rgba(100, 116, 139, 0.2)";
const OUTLINE_STROKE: &str = "rgba(255, 255, 255, 0.3)";

/// Render a laid-out size comparison as a standalone SVG document
pub fn render_size_comparison(layout: &SizeComparison, config: &RenderConfig) -> String {
    let mut svg = String::with_capacity(2048 + layout.bodies.len() * 512);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = fmt_num(layout.width),
        h = fmt_num(layout.height)
    ));

    if config.glow_effects {
        svg.push_str("<defs>\n");
        svg.push_str("<filter id=\"glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\n");
        svg.push_str("<feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"7.5\" result=\"blur\"/>\n");
        svg.push_str("<feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n");
        svg.push_str("</filter>\n");
        svg.push_str("</defs>\n");
    }

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        config.theme.background()
    ));

    if config.background_grid {
        push_grid(&mut svg, layout.width, layout.height);
    }

    push_body(&mut svg, &layout.earth, EARTH_COLOR, config);

    let sep = &layout.separator;
    svg.push_str(&format!(
        "<line x1=\"{x}\" y1=\"{y1}\" x2=\"{x}\" y2=\"{y2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        SEPARATOR_STROKE,
        x = fmt_num(sep.x),
        y1 = fmt_num(sep.y1),
        y2 = fmt_num(sep.y2)
    ));

    for body in &layout.bodies {
        let fill = body.band.map(|b| b.hsl()).unwrap_or(EARTH_COLOR);
        push_body(&mut svg, body, fill, config);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_grid(svg: &mut String, width: f64, height: f64) {
    let mut path = String::new();

    let mut y = 0.0;
    while y < height {
        path.push_str(&format!("M0 {} H{} ", fmt_num(y), fmt_num(width)));
        y += GRID_SIZE;
    }
    let mut x = 0.0;
    while x < width {
        path.push_str(&format!("M{} 0 V{} ", fmt_num(x), fmt_num(height)));
        x += GRID_SIZE;
    }

    svg.push_str(&format!(
        "<path d=\"{}\" stroke=\"{}\" stroke-width=\"1\" fill=\"none\"/>\n",
        path.trim_end(),
        GRID_STROKE
    ));
}

fn push_body(svg: &mut String, body: &PlacedBody, fill: &str, config: &RenderConfig) {
    let cx = fmt_num(body.center_x);
    let cy = fmt_num(body.center_y);
    let r = fmt_num(body.radius_px);

    svg.push_str("<g class=\"planet\">\n");

    let filter = if config.glow_effects { " filter=\"url(#glow)\"" } else { "" };
    if config.animation {
        svg.push_str(&format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"{filter}><animate attributeName=\"r\" from=\"0\" to=\"{r}\" dur=\"0.6s\" fill=\"freeze\"/></circle>\n"
        ));
    } else {
        svg.push_str(&format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"{filter}/>\n"
        ));
    }

    svg.push_str(&format!(
        "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        OUTLINE_STROKE
    ));

    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\" fill=\"{}\">{}</text>\n",
        fmt_num(body.name_label.x),
        fmt_num(body.name_label.y),
        config.theme.foreground(),
        escape_xml(&body.name_label.text)
    ));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"10\" text-anchor=\"middle\" fill=\"{}\">{}</text>\n",
        fmt_num(body.caption.x),
        fmt_num(body.caption.y),
        config.theme.muted(),
        escape_xml(&body.caption.text)
    ));

    svg.push_str("</g>\n");
}

/// Two decimals at most, trailing zeros trimmed
fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_size_comparison, LayoutConfig};
    use crate::record::ExoplanetRecord;
    use crate::render::Theme;
    use crate::utils::color_bands::ColorBand;

    fn sample_layout() -> SizeComparison {
        let records = vec![
            ExoplanetRecord {
                pl_rade: Some(1.0),
                habitability_score: Some(0.9),
                ..ExoplanetRecord::named("Earth-2")
            },
            ExoplanetRecord {
                pl_rade: Some(12.0),
                habitability_score: Some(0.1),
                ..ExoplanetRecord::named("Gas <world>")
            },
        ];
        layout_size_comparison(&records, &LayoutConfig::default())
    }

    #[test]
    fn test_contains_bodies_and_reference() {
        let svg = render_size_comparison(&sample_layout(), &RenderConfig::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("fill=\"#3b82f6\""));
        assert!(svg.contains(ColorBand::Emerald.hsl()));
        assert!(svg.contains(ColorBand::Red.hsl()));
        assert!(svg.contains(">Earth</text>"));
        assert!(svg.contains(">1.00×</text>"));
        assert!(svg.contains(">12.00×</text>"));
        assert!(svg.contains("x1=\"70\" y1=\"40\" x2=\"70\" y2=\"360\""));
    }

    #[test]
    fn test_names_escaped() {
        let svg = render_size_comparison(&sample_layout(), &RenderConfig::default());
        assert!(svg.contains("Gas &lt;world&gt;"));
        assert!(!svg.contains("Gas <world>"));
    }

    #[test]
    fn test_toggles() {
        let plain = RenderConfig {
            theme: Theme::Light,
            glow_effects: false,
            animation: false,
            background_grid: false,
        };
        let svg = render_size_comparison(&sample_layout(), &plain);

        assert!(!svg.contains("<filter"));
        assert!(!svg.contains("<animate"));
        assert!(!svg.contains(GRID_STROKE));
        assert!(svg.contains(Theme::Light.foreground()));

        let full = render_size_comparison(&sample_layout(), &RenderConfig::default());
        assert!(full.contains("url(#glow)"));
        assert!(full.contains("<animate"));
        assert!(full.contains(GRID_STROKE));
    }

    #[test]
    fn test_render_is_stateless() {
        let layout = sample_layout();
        let config = RenderConfig::default();
        assert_eq!(
            render_size_comparison(&layout, &config),
            render_size_comparison(&layout, &config)
        );
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(70.0), "70");
        assert_eq!(fmt_num(16.666666), "16.67");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.001), "0");
    }
}
