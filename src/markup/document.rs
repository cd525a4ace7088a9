use std::fmt::Write as _;

use crate::foundation::error::WordcycleResult;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One CSS declaration, `property: value`.
pub type Declaration = (String, String);

#[derive(Clone, Debug, PartialEq)]
/// A `selector { ... }` rule in the document style block.
pub struct StyleRule {
    /// CSS selector.
    pub selector: String,
    /// Declarations in output order.
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq)]
/// One `N% { ... }` stop of a keyframes rule.
pub struct KeyframeStop {
    /// Offset in percent, `0..=100`.
    pub offset_pct: f64,
    /// Declarations applied at this offset.
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq)]
/// An `@keyframes` rule.
pub struct KeyframesRule {
    /// Animation name referenced by style rules.
    pub name: String,
    /// Stops in ascending offset order.
    pub stops: Vec<KeyframeStop>,
}

impl KeyframesRule {
    /// Empty rule named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stops: Vec::new(),
        }
    }

    /// Append a stop; a stop at the same offset as the previous one replaces it.
    pub fn stop(mut self, offset_pct: f64, declarations: Vec<Declaration>) -> Self {
        if self.stops.last().is_some_and(|s| s.offset_pct == offset_pct) {
            self.stops.pop();
        }
        self.stops.push(KeyframeStop {
            offset_pct,
            declarations,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
/// An inline `<tspan>` run.
pub struct TextRun {
    /// Style class of the run.
    pub class: String,
    /// Raw (unescaped) text.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
/// A `<text>` element made of runs.
pub struct TextElement {
    /// Style class of the element.
    pub class: String,
    /// Anchor x in user units.
    pub x: f64,
    /// Anchor y in user units.
    pub y: f64,
    /// Inline style declarations.
    pub style: Vec<Declaration>,
    /// Child runs in order.
    pub runs: Vec<TextRun>,
}

#[derive(Clone, Debug, PartialEq)]
/// Structured SVG document: a style block plus text elements, serialized once.
pub struct SvgDocument {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Keyframe rules, emitted first in the style block.
    pub keyframes: Vec<KeyframesRule>,
    /// Style rules, emitted after keyframes.
    pub rules: Vec<StyleRule>,
    /// Text elements in paint order.
    pub elements: Vec<TextElement>,
}

impl SvgDocument {
    /// Empty document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            keyframes: Vec::new(),
            rules: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Serialize to markup.
    pub fn to_markup(&self) -> WordcycleResult<String> {
        let mut out = String::new();
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;

        writeln!(out, "  <style>")?;
        for kf in &self.keyframes {
            writeln!(out, "    @keyframes {} {{", escape_text(&kf.name))?;
            for stop in &kf.stops {
                writeln!(
                    out,
                    "      {}% {{ {} }}",
                    fmt_num(stop.offset_pct),
                    escape_text(&declarations(&stop.declarations))
                )?;
            }
            writeln!(out, "    }}")?;
        }
        for rule in &self.rules {
            writeln!(
                out,
                "    {} {{ {} }}",
                escape_text(&rule.selector),
                escape_text(&declarations(&rule.declarations))
            )?;
        }
        writeln!(out, "  </style>")?;

        for el in &self.elements {
            write!(
                out,
                r#"  <text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle""#,
                escape_attr(&el.class),
                fmt_num(el.x),
                fmt_num(el.y)
            )?;
            if !el.style.is_empty() {
                write!(out, r#" style="{}""#, escape_attr(&declarations(&el.style)))?;
            }
            write!(out, ">")?;
            for run in &el.runs {
                write!(
                    out,
                    r#"<tspan class="{}">{}</tspan>"#,
                    escape_attr(&run.class),
                    escape_text(&run.text)
                )?;
            }
            writeln!(out, "</text>")?;
        }

        writeln!(out, "</svg>")?;
        Ok(out)
    }
}

fn declarations(decls: &[Declaration]) -> String {
    decls
        .iter()
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shortest round-trip decimal form; integral values print without a fraction.
pub fn fmt_num(v: f64) -> String {
    format!("{v}")
}

/// Whether `c` may appear in an XML 1.0 document at all, escaped or not.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape `&`, `<` and `>` for element content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/markup/document.rs"]
mod tests;
