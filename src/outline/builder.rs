//! Document to outline transformation.

use super::comment::{CommentRegionFilter, RegionState, Verdict};
use super::OutlineOptions;
use crate::model::serialize::inner_html;
use crate::model::{Block, Document, Element, Outline, OutlineLine, Tag};
use crate::rewrite::{rewrite_cloze_aliases, rewrite_images};
use crate::style::{StyleApplier, StyleMap};
use rayon::prelude::*;

/// Builds an outline from a parsed document.
///
/// Paragraphs become bare lines. Each table becomes a heading from its first
/// row followed by one sub-heading per later row, built from the first cell
/// of each row.
///
/// # Example
///
/// ```
/// use docdeck::outline::OutlineBuilder;
/// use docdeck::parser::parse_html;
///
/// let html = "<div id=\"title\">Geo</div>\
///     <table><tr><td>Capitals</td></tr><tr><td>France -> Paris</td></tr></table>";
/// let outline = OutlineBuilder::new().build(parse_html(html).unwrap());
/// assert_eq!(outline.to_lines(), vec!["* Capitals", "** France -> Paris"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    options: OutlineOptions,
}

impl OutlineBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Build the outline, consuming the document.
    ///
    /// Cells are rewritten in place, so a document can only be built once.
    /// Comment regions are resolved in document order first; the admitted
    /// blocks are then converted independently.
    pub fn build(&self, document: Document) -> Outline {
        let styles = StyleMap::from_stylesheets(&document.stylesheets);
        let admitted = self.admitted_blocks(document.blocks);

        let lines: Vec<Vec<OutlineLine>> = if self.options.parallel {
            admitted
                .into_par_iter()
                .map(|block| self.block_lines(block, &styles))
                .collect()
        } else {
            admitted
                .into_iter()
                .map(|block| self.block_lines(block, &styles))
                .collect()
        };

        let mut outline = Outline::new(document.title);
        for line in lines.into_iter().flatten() {
            outline.push(line);
        }
        log::debug!("Built outline \"{}\": {} lines", outline.title, outline.len());

        outline
    }

    /// Drop the blocks that fall inside comment regions.
    fn admitted_blocks(&self, blocks: Vec<Block>) -> Vec<Block> {
        let mut filter =
            CommentRegionFilter::new(&self.options.comment_start, &self.options.comment_end);
        let total = blocks.len();
        let admitted: Vec<Block> = blocks
            .into_iter()
            .filter(|block| filter.admit(block) == Verdict::Process)
            .collect();

        if filter.state() == RegionState::Inside {
            log::warn!("Comment region is never closed; the rest of the document was skipped");
        }
        log::debug!("{} of {} blocks suppressed", total - admitted.len(), total);

        admitted
    }

    fn block_lines(&self, block: Block, styles: &StyleMap) -> Vec<OutlineLine> {
        match block {
            Block::Paragraph(p) => paragraph_line(&p).into_iter().collect(),
            Block::Table(mut table) => self.table_lines(&mut table, styles),
        }
    }

    /// Lines for one table: the first row as heading, the rest as sub-headings.
    fn table_lines(&self, table: &mut Element, styles: &StyleMap) -> Vec<OutlineLine> {
        let mut contents = Vec::new();
        table.for_each_mut(&Tag::Row, &mut |row: &mut Element| {
            let content = match first_cell(row) {
                Some(cell) => cell_content(cell, styles, &self.options),
                None => {
                    log::debug!("Table row has no cell, using empty content");
                    String::new()
                }
            };
            contents.push(content);
        });
        log::debug!("Table with {} rows", contents.len());

        contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| {
                if i == 0 {
                    OutlineLine::heading(content)
                } else {
                    OutlineLine::sub_heading(content)
                }
            })
            .collect()
    }
}

/// Line for a paragraph, unless it is empty or a bare link.
///
/// The line is the concatenated text of every span. A paragraph whose span
/// text equals its link text is navigation and produces nothing.
pub fn paragraph_line(p: &Element) -> Option<OutlineLine> {
    let line = p.descendant_text(&Tag::Span);
    let link_text = p.descendant_text(&Tag::Link);
    if line.is_empty() || line == link_text {
        return None;
    }
    Some(OutlineLine::body(line))
}

/// Rewrite a cell and serialize its content.
///
/// Styles are inlined and images replaced on the tree; cloze aliases are
/// rewritten on the serialized markup.
pub fn cell_content(cell: &mut Element, styles: &StyleMap, options: &OutlineOptions) -> String {
    StyleApplier::new(styles).apply(cell);
    if options.rewrite_images {
        rewrite_images(cell);
    }
    let markup = inner_html(cell);
    if options.rewrite_cloze {
        rewrite_cloze_aliases(&markup)
    } else {
        markup
    }
}

/// First `<td>` of a row, or its first `<th>` when it has none.
fn first_cell(row: &mut Element) -> Option<&mut Element> {
    let has_data_cell = !row.descendants(&Tag::Cell).is_empty();
    if has_data_cell {
        row.find_mut(&|el: &Element| el.tag == Tag::Cell)
    } else {
        row.find_mut(&|el: &Element| el.tag.is("th"))
    }
}
