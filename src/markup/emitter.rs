use crate::{
    config::options::AnimationConfig,
    foundation::error::{WordcycleError, WordcycleResult},
    markup::document::{
        Declaration, KeyframesRule, StyleRule, SvgDocument, TextElement, TextRun, fmt_num,
    },
    text::segments::segments,
    timing::timeline::Timeline,
    words::filter::MatchIndices,
};

/// Name of the shared `@keyframes` rule.
pub const ANIMATION_NAME: &str = "wordcycle";
/// Class carried by every word element.
pub const WORD_CLASS: &str = "word";
/// Class of emphasized letter runs.
pub const EMPHASIS_CLASS: &str = "em";
/// Class of plain runs.
pub const MUTED_CLASS: &str = "dim";

fn decl(property: &str, value: impl Into<String>) -> Declaration {
    (property.to_owned(), value.into())
}

fn opacity(v: &str) -> Vec<Declaration> {
    vec![decl("opacity", v)]
}

/// Build the document for an already ordered word list.
///
/// `matches[i]` must locate the target letters of `words[i]`, and `timeline` must have been
/// computed for `words.len()` words.
pub fn build_document(
    words: &[String],
    matches: &[MatchIndices],
    timeline: &Timeline,
    config: &AnimationConfig,
) -> WordcycleResult<SvgDocument> {
    if words.len() != matches.len() || words.len() != timeline.word_count() {
        return Err(WordcycleError::invalid_input(format!(
            "word list ({}), match list ({}) and timeline ({}) disagree on length",
            words.len(),
            matches.len(),
            timeline.word_count()
        )));
    }

    let mut doc = SvgDocument::new(config.width, config.height);

    doc.keyframes.push(
        KeyframesRule::new(ANIMATION_NAME)
            .stop(0.0, opacity("1"))
            .stop(timeline.opaque_until_percentage(), opacity("1"))
            .stop(timeline.visible_percentage, opacity("0"))
            .stop(100.0, opacity("0")),
    );

    doc.rules = vec![
        StyleRule {
            selector: format!(".{WORD_CLASS}"),
            declarations: vec![
                decl("opacity", "0"),
                decl("font-family", config.font_family.as_str()),
                decl("font-size", format!("{}px", fmt_num(config.font_size))),
                decl(
                    "animation",
                    format!(
                        "{ANIMATION_NAME} {}s linear infinite",
                        fmt_num(timeline.total_duration_s)
                    ),
                ),
            ],
        },
        StyleRule {
            selector: format!(".{EMPHASIS_CLASS}"),
            declarations: vec![
                decl("font-weight", "bold"),
                decl("fill", config.ink_color.as_str()),
            ],
        },
        StyleRule {
            selector: format!(".{MUTED_CLASS}"),
            declarations: vec![
                decl("font-weight", "normal"),
                decl("fill", config.muted_color.as_str()),
            ],
        },
    ];

    let (cx, cy) = (config.width / 2.0, config.height / 2.0);
    for ((word, indices), delay) in words.iter().zip(matches).zip(&timeline.delays_s) {
        let runs = segments(word, indices)
            .into_iter()
            .map(|seg| {
                let class = if seg.emphasized {
                    EMPHASIS_CLASS
                } else {
                    MUTED_CLASS
                };
                TextRun {
                    class: class.to_owned(),
                    text: seg.text.to_owned(),
                }
            })
            .collect();
        doc.elements.push(TextElement {
            class: WORD_CLASS.to_owned(),
            x: cx,
            y: cy,
            style: vec![decl("animation-delay", format!("{}s", fmt_num(*delay)))],
            runs,
        });
    }

    Ok(doc)
}

/// Build and serialize the document in one step.
pub fn emit_markup(
    words: &[String],
    matches: &[MatchIndices],
    timeline: &Timeline,
    config: &AnimationConfig,
) -> WordcycleResult<String> {
    build_document(words, matches, timeline, config)?.to_markup()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/emitter.rs"]
mod tests;
