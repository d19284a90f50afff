//! Catalog document: one tissue, all its active colors.

use crate::escape::escape_html;
use crate::{BRAND, COMPOSITION_PLACEHOLDER};
use std::collections::HashMap;
use std::fmt::Write;
use trama_types::{LinkDetail, LinkId, Rgb, Tissue};

const CATALOG_STYLE: &str = "\
@page{size:A4;margin:12mm}\
*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:Helvetica,Arial,sans-serif;color:#111;background:#fff}\
.page{min-height:100vh;display:flex;flex-direction:column;padding:5mm 0;page-break-inside:avoid}\
.header{text-align:center;padding-bottom:6mm;border-bottom:2px solid #111;margin-bottom:6mm}\
.brand{font-size:11pt;letter-spacing:3px;font-weight:bold;margin-bottom:3mm}\
.title{font-size:24pt;font-weight:300;margin-bottom:3mm}\
.meta{font-size:9pt;color:#666}\
.meta span{margin:0 2mm}\
.grid{flex:1;display:grid;grid-template-columns:repeat(3,1fr);gap:5mm;align-content:start}\
.card{text-align:center;page-break-inside:avoid}\
.card .img-box{width:100%;aspect-ratio:1;border-radius:3mm;overflow:hidden;margin-bottom:2mm}\
.card img{width:100%;height:100%;object-fit:cover;display:block}\
.swatch{width:100%;height:100%}\
.color-name{font-size:11pt;font-weight:bold;color:#1e3a5f}\
.color-sku{font-size:9pt;color:#666;letter-spacing:1px}\
.color-hex{font-size:8pt;color:#999;font-family:monospace}\
.footer{text-align:center;font-size:8pt;color:#aaa;margin-top:auto;padding-top:4mm}";

/// Renders the catalog for a tissue. `images` maps link IDs to prepared
/// data URIs; links without an entry get a flat swatch in the color's
/// hex. Cards land on fixed-size pages of `per_page` with explicit page
/// boundaries.
pub fn catalog_html(
    tissue: &Tissue,
    links: &[LinkDetail],
    images: &HashMap<LinkId, String>,
    per_page: usize,
) -> String {
    let per_page = per_page.max(1);
    let mut body = String::new();

    for (page_index, page_links) in links.chunks(per_page).enumerate() {
        let break_style = if page_index == 0 {
            ""
        } else {
            " style=\"page-break-before:always\""
        };
        let _ = write!(body, "<div class=\"page\"{}>", break_style);
        body.push_str(&header_html(tissue, links.len()));
        body.push_str("<div class=\"grid\">");
        for detail in page_links {
            body.push_str(&card_html(detail, images.get(&detail.link.id)));
        }
        body.push_str("</div>");
        let _ = write!(
            body,
            "<div class=\"footer\">{} \u{2022} {}</div>",
            escape_html(&tissue.name),
            BRAND
        );
        body.push_str("</div>\n");
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{}</style></head><body>\n{}</body></html>",
        CATALOG_STYLE, body
    )
}

fn header_html(tissue: &Tissue, color_count: usize) -> String {
    let composition = tissue
        .composition
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(COMPOSITION_PLACEHOLDER);
    format!(
        "<div class=\"header\">\
<div class=\"brand\">{brand}</div>\
<h1 class=\"title\">{name}</h1>\
<div class=\"meta\">\
<span>{width}cm</span><span>\u{2022}</span>\
<span>{composition}</span><span>\u{2022}</span>\
<span>{sku}</span><span>\u{2022}</span>\
<span>{count} colors</span>\
</div></div>",
        brand = BRAND,
        name = escape_html(&tissue.name),
        width = format_width(tissue.width_cm),
        composition = escape_html(composition),
        sku = escape_html(&tissue.sku),
        count = color_count,
    )
}

fn card_html(detail: &LinkDetail, image: Option<&String>) -> String {
    let hex = swatch_hex(detail);
    let color_name = if detail.color.name.is_empty() {
        "Unnamed"
    } else {
        detail.color.name.as_str()
    };
    let visual = match image {
        Some(data_uri) => format!(
            "<img src=\"{}\" alt=\"{}\"/>",
            data_uri,
            escape_html(color_name)
        ),
        None => format!("<div class=\"swatch\" style=\"background:{}\"></div>", hex),
    };
    format!(
        "<div class=\"card\">\
<div class=\"img-box\">{visual}</div>\
<div class=\"color-name\">{name}</div>\
<div class=\"color-sku\">{sku}</div>\
<div class=\"color-hex\">{hex}</div>\
</div>",
        visual = visual,
        name = escape_html(color_name),
        sku = escape_html(&detail.link.child_sku),
        hex = hex,
    )
}

pub(crate) fn swatch_hex(detail: &LinkDetail) -> String {
    detail
        .color
        .hex
        .as_deref()
        .and_then(|h| Rgb::parse_hex(h).ok())
        .unwrap_or_default()
        .css_hex()
}

pub(crate) fn format_width(width_cm: f32) -> String {
    if width_cm.fract() == 0.0 {
        format!("{:.0}", width_cm)
    } else {
        format!("{}", width_cm)
    }
}
