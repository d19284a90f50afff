//! Single-link product sheet: one tissue-color pairing on one page.

use crate::catalog::{format_width, swatch_hex};
use crate::escape::escape_html;
use crate::{BRAND, COMPOSITION_PLACEHOLDER};
use trama_types::LinkDetail;

const SHEET_STYLE: &str = "\
@page{size:A4;margin:12mm}\
*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:Helvetica,Arial,sans-serif;color:#111;background:#fff;min-height:100vh;display:flex;flex-direction:column;padding:10mm 0}\
.header{text-align:center;padding-bottom:8mm;border-bottom:2px solid #111;margin-bottom:8mm}\
.brand{font-size:11pt;letter-spacing:3px;font-weight:bold;margin-bottom:3mm}\
.title{font-size:26pt;font-weight:300;margin-bottom:3mm}\
.subtitle{font-size:16pt;font-weight:600;color:#333}\
.content{flex:1;display:flex;flex-direction:column;align-items:center;justify-content:center}\
.img-box{width:100%;max-width:130mm;aspect-ratio:1;border-radius:4mm;overflow:hidden;margin-bottom:8mm}\
.img-box img{width:100%;height:100%;object-fit:cover;display:block}\
.swatch{width:100%;height:100%}\
.sku-badge{background:#f5f5f5;padding:3mm 6mm;border-radius:2mm;font-family:monospace;font-size:14pt;letter-spacing:2px;margin-bottom:8mm}\
.details{width:100%;display:grid;grid-template-columns:1fr 1fr;gap:5mm;border-top:1px solid #eee;padding-top:8mm}\
.label{font-size:8pt;text-transform:uppercase;color:#666;letter-spacing:1px;margin-bottom:1mm}\
.value{font-size:12pt;font-weight:500}\
.footer{text-align:center;font-size:8pt;color:#aaa;margin-top:auto;padding-top:8mm}";

/// Renders a one-page sheet for a single link. `image` is a prepared
/// data URI; without one the sheet shows the color swatch.
pub fn sheet_html(detail: &LinkDetail, image: Option<&str>) -> String {
    let hex = swatch_hex(detail);
    let visual = match image {
        Some(data_uri) => format!(
            "<img src=\"{}\" alt=\"{}\"/>",
            data_uri,
            escape_html(&detail.color.name)
        ),
        None => format!("<div class=\"swatch\" style=\"background:{}\"></div>", hex),
    };
    let composition = detail
        .tissue
        .composition
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(COMPOSITION_PLACEHOLDER);
    let family = detail.color.family.as_deref().unwrap_or("\u{2014}");

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{style}</style></head><body>\
<div class=\"header\">\
<div class=\"brand\">{brand}</div>\
<h1 class=\"title\">{tissue_name}</h1>\
<div class=\"subtitle\">{color_name}</div>\
</div>\
<div class=\"content\">\
<div class=\"img-box\">{visual}</div>\
<div class=\"sku-badge\">{child_sku}</div>\
<div class=\"details\">\
<div><div class=\"label\">Width</div><div class=\"value\">{width} cm</div></div>\
<div><div class=\"label\">Composition</div><div class=\"value\">{composition}</div></div>\
<div><div class=\"label\">Family</div><div class=\"value\">{family}</div></div>\
<div><div class=\"label\">Base SKU</div><div class=\"value\">{base_sku}</div></div>\
</div>\
</div>\
<div class=\"footer\">{tissue_name} \u{2022} {color_name} \u{2022} {brand}</div>\
</body></html>",
        style = SHEET_STYLE,
        brand = BRAND,
        tissue_name = escape_html(&detail.tissue.name),
        color_name = escape_html(&detail.color.name),
        visual = visual,
        child_sku = escape_html(&detail.link.child_sku),
        width = format_width(detail.tissue.width_cm),
        composition = escape_html(composition),
        family = escape_html(family),
        base_sku = escape_html(&detail.tissue.sku),
    )
}
