use comrak::nodes::NodeValue;
use comrak::{Arena, ComrakOptions, markdown_to_html, parse_document};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
});

/// A message body split at fenced code blocks: prose stays markdown, code
/// goes to the dedicated code-block component.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Prose(String),
    Code {
        language: Option<String>,
        code: String,
    },
}

/// Splits a message at fenced code blocks (backtick or tilde), walking the
/// markdown AST so inline code spans and indented code stay prose. The code
/// text is trimmed of leading/trailing whitespace; an unclosed fence at end
/// of input still yields a code segment.
pub fn split_message(text: &str) -> Vec<Segment> {
    let arena = Arena::new();
    let root = parse_document(&arena, text, &MARKDOWN_OPTIONS);
    let lines: Vec<&str> = text.lines().collect();

    let mut segments = Vec::new();
    let mut pending: Option<(usize, usize)> = None;

    for node in root.children() {
        let data = node.data.borrow();
        if let NodeValue::CodeBlock(block) = &data.value
            && block.fenced
        {
            flush_prose(&mut segments, &lines, pending.take());
            segments.push(Segment::Code {
                language: block.info.split_whitespace().next().map(str::to_string),
                code: block.literal.trim().to_string(),
            });
            continue;
        }

        let start = data.sourcepos.start.line;
        let end = data.sourcepos.end.line;
        pending = match pending {
            Some((first, _)) => Some((first, end)),
            None => Some((start, end)),
        };
    }
    flush_prose(&mut segments, &lines, pending);
    segments
}

/// Re-slices the original source for a run of prose nodes so comrak renders
/// it later with its block structure intact. Line numbers are 1-based.
fn flush_prose(segments: &mut Vec<Segment>, lines: &[&str], range: Option<(usize, usize)>) {
    let Some((start, end)) = range else { return };
    let end = end.min(lines.len());
    if start == 0 || start > end {
        return;
    }
    let prose = lines[start - 1..end].join("\n");
    if !prose.trim().is_empty() {
        segments.push(Segment::Prose(prose));
    }
}

/// GFM rendering for the prose segments.
pub fn prose_to_html(md: &str) -> String {
    markdown_to_html(md, &MARKDOWN_OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_block_keeps_language_and_trimmed_body() {
        let segments = split_message("```js\nconsole.log(1)\n```");
        assert_eq!(
            segments,
            vec![Segment::Code {
                language: Some("js".to_string()),
                code: "console.log(1)".to_string(),
            }]
        );
    }

    #[test]
    fn prose_around_code_is_preserved_in_order() {
        let segments = split_message("before\n```\nlet x = 1;\n```\nafter");
        assert_eq!(segments.len(), 3);
        assert!(matches!(&segments[0], Segment::Prose(p) if p.trim() == "before"));
        assert_eq!(
            segments[1],
            Segment::Code {
                language: None,
                code: "let x = 1;".to_string(),
            }
        );
        assert!(matches!(&segments[2], Segment::Prose(p) if p.trim() == "after"));
    }

    #[test]
    fn unclosed_fence_is_still_code() {
        let segments = split_message("```python\nprint(1)");
        assert_eq!(
            segments,
            vec![Segment::Code {
                language: Some("python".to_string()),
                code: "print(1)".to_string(),
            }]
        );
    }

    #[test]
    fn inline_code_span_with_backticks_is_not_a_fence() {
        // A backtick fence's info string may not contain backticks, so this
        // whole line is a paragraph with an inline code span, and the line
        // after it must stay prose rather than being swallowed into an
        // unclosed code block.
        let segments = split_message("``` `x` ``` is inline code\nplain prose after");
        assert_eq!(segments.len(), 1);
        match &segments[0] {
            Segment::Prose(prose) => {
                assert!(prose.contains("is inline code"));
                assert!(prose.contains("plain prose after"));
            }
            Segment::Code { .. } => panic!("inline code span must not open a fence"),
        }
    }

    #[test]
    fn tilde_fence_is_routed_to_code() {
        let segments = split_message("~~~rust\nlet a = 1;\n~~~");
        assert_eq!(
            segments,
            vec![Segment::Code {
                language: Some("rust".to_string()),
                code: "let a = 1;".to_string(),
            }]
        );
    }

    #[test]
    fn indented_code_stays_in_the_prose_path() {
        let segments = split_message("a paragraph\n\n    indented code");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Prose(_)));
    }

    #[test]
    fn plain_text_is_one_prose_segment() {
        let segments = split_message("just **bold** text");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Prose(_)));
    }

    #[test]
    fn gfm_tables_render() {
        let html = prose_to_html("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table"));
    }

    #[test]
    fn gfm_strikethrough_renders() {
        let html = prose_to_html("~~gone~~");
        assert!(html.contains("<del>"));
    }
}
