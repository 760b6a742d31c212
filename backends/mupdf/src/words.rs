use glossa_types::{BoundingBox, Word};
use mupdf::text_page::TextBlockType;
use mupdf::{Page, Quad, TextPageFlags};

/// One extracted character with its page-space box
#[derive(Debug, Clone, Copy)]
pub(crate) struct Glyph {
    pub c: char,
    pub bbox: BoundingBox,
}

/// Words of a page, numbered like MuPDF's own word list: `block_no` counts
/// every block (image blocks included), `line_no` restarts per block and
/// `word_no` per line.
pub(crate) fn extract_words(page: &Page) -> Result<Vec<Word>, mupdf::error::Error> {
    let text_page = page.to_text_page(TextPageFlags::empty())?;
    let mut words = Vec::new();

    for (block_no, block) in text_page.blocks().enumerate() {
        if block.r#type() != TextBlockType::Text {
            continue;
        }

        for (line_no, line) in block.lines().enumerate() {
            let glyphs = line.chars().filter_map(|ch| {
                ch.char().map(|c| Glyph {
                    c,
                    bbox: quad_bounds(&ch.quad()),
                })
            });
            words.extend(line_words(block_no as u32, line_no as u32, glyphs));
        }
    }

    Ok(words)
}

fn quad_bounds(quad: &Quad) -> BoundingBox {
    let xs = [quad.ul.x, quad.ur.x, quad.ll.x, quad.lr.x];
    let ys = [quad.ul.y, quad.ur.y, quad.ll.y, quad.lr.y];
    BoundingBox::new(
        xs.iter().copied().fold(f32::INFINITY, f32::min),
        ys.iter().copied().fold(f32::INFINITY, f32::min),
        xs.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        ys.iter().copied().fold(f32::NEG_INFINITY, f32::max),
    )
}

/// Split one text line into whitespace-delimited words
pub(crate) fn line_words<I>(block_no: u32, line_no: u32, glyphs: I) -> Vec<Word>
where
    I: IntoIterator<Item = Glyph>,
{
    let mut words = Vec::new();
    let mut current: Option<(String, BoundingBox)> = None;

    let flush = |current: &mut Option<(String, BoundingBox)>, words: &mut Vec<Word>| {
        if let Some((text, bbox)) = current.take() {
            words.push(Word {
                bbox,
                text,
                block_no,
                line_no,
                word_no: words.len() as u32,
            });
        }
    };

    for glyph in glyphs {
        if glyph.c.is_whitespace() {
            flush(&mut current, &mut words);
            continue;
        }

        match current.as_mut() {
            Some((text, bbox)) => {
                text.push(glyph.c);
                *bbox = bbox.union(&glyph.bbox);
            }
            None => current = Some((glyph.c.to_string(), glyph.bbox)),
        }
    }
    flush(&mut current, &mut words);

    words
}
