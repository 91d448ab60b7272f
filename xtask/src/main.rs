use camino::{Utf8Path, Utf8PathBuf};
use drawingml_geom::facet_svg::SVG_NS;
use drawingml_geom::render::registry;
use drawingml_geom::{
    Border, LineEnd, LineEndKind, PaintToken, PresetKind, RenderContext, ShapeDescriptor, render_shape,
};
use rayon::prelude::*;
use std::fs;
use tracing_subscriber::EnvFilter;

const CELL_W: f64 = 120.0;
const CELL_H: f64 = 80.0;
const MARGIN: f64 = 10.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [out.html]    Render every preset kind into one HTML page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let out = match args.get(2) {
                Some(path) => Utf8PathBuf::from(path),
                None => Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../gallery.html"),
            };
            gallery(&out);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One rendered preset for the page.
struct Card {
    index: usize,
    kind: PresetKind,
    svg: String,
    issues: Vec<String>,
}

fn gallery_paint() -> PaintToken {
    PaintToken::solid("#9dc3e6").with_border(
        Border::solid("#1f3864", 1.5)
            .with_head(LineEnd::new(LineEndKind::Oval))
            .with_tail(LineEnd::new(LineEndKind::Triangle)),
    )
}

fn render_card(ctx: &mut RenderContext, index: usize, kind: PresetKind) -> Card {
    let before = ctx.diagnostics().len();
    let shape = ShapeDescriptor::preset(format!("shape-{}", kind.name()), kind, CELL_W, CELL_H)
        .with_paint(gallery_paint());
    let rendered = render_shape(ctx, &shape);
    let mut issues: Vec<String> = ctx.diagnostics()[before..].iter().map(|i| i.to_string()).collect();
    let svg = rendered.to_svg().unwrap_or_else(|e| {
        issues.push(e.to_string());
        String::new()
    });
    Card {
        index,
        kind,
        svg,
        issues,
    }
}

fn gallery(out: &Utf8Path) {
    // one context per worker, folded together at the end
    let (ctx, mut cards) = PresetKind::ALL
        .par_iter()
        .enumerate()
        .fold(
            || (RenderContext::new(), Vec::new()),
            |(mut ctx, mut cards), (index, &kind)| {
                cards.push(render_card(&mut ctx, index, kind));
                (ctx, cards)
            },
        )
        .reduce(
            || (RenderContext::new(), Vec::new()),
            |(mut a, mut cards_a), (b, cards_b)| {
                a.merge(b);
                cards_a.extend(cards_b);
                (a, cards_a)
            },
        );
    cards.sort_by_key(|c| c.index);

    let supported = cards.iter().filter(|c| registry::is_supported(c.kind)).count();
    eprintln!(
        "Rendered {} kinds ({} tabled), {} diagnostics",
        cards.len(),
        supported,
        ctx.diagnostics().len()
    );

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Preset shape gallery</title>
    <style>
        body {
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }
        h1 {
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
            gap: 12px;
        }
        .card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            padding: 8px;
        }
        .card.unsupported {
            background: #fee2e2;
        }
        .name {
            font-size: 12px;
            font-weight: 600;
        }
        .issue {
            font-size: 11px;
            color: #991b1b;
        }
        svg {
            width: 100%;
            height: auto;
        }
    </style>
</head>
<body>
"#,
    );
    html.push_str(&format!(
        "<h1>Preset shapes: {} of {} tabled</h1>\n<div class=\"grid\">\n",
        supported,
        cards.len()
    ));
    for card in &cards {
        let class = if card.issues.is_empty() { "card" } else { "card unsupported" };
        html.push_str(&format!(
            "<div class=\"{class}\"><div class=\"name\">{}</div>\
             <svg viewBox=\"{} {} {} {}\" xmlns=\"{SVG_NS}\">{}</svg>",
            card.kind.name(),
            -MARGIN,
            -MARGIN,
            CELL_W + 2.0 * MARGIN,
            CELL_H + 2.0 * MARGIN,
            card.svg
        ));
        for issue in &card.issues {
            html.push_str(&format!("<div class=\"issue\">{}</div>", escape_html(issue)));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");

    if let Err(e) = fs::write(out, html) {
        eprintln!("Failed to write {out}: {e}");
        std::process::exit(1);
    }
    eprintln!("Wrote {out}");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
