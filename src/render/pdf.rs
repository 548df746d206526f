//! Minimal PDF 1.4 writer for itineraries.
//!
//! Only the standard Helvetica faces are used, so no fonts are embedded and
//! every string is folded to ASCII first.

use tracing::debug;

use super::ascii::to_ascii;
use super::metrics;
use super::text::{day_header, format_focus_text};
use crate::types::ItineraryPlan;

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
/// 15 mm.
pub const MARGIN: f32 = 42.52;

const LINE_SPACING: f32 = 1.35;
const INDENT: f32 = 14.0;
const FIRST_PAGE_OBJECT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Italic,
}

impl Face {
    const ALL: [Face; 3] = [Face::Regular, Face::Bold, Face::Italic];

    fn resource(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Italic => "F3",
        }
    }

    /// Measured width in points. Oblique shares the regular widths.
    fn text_width(self, text: &str, size: f32) -> f32 {
        metrics::text_width(self == Face::Bold, text, size)
    }

    fn base_font(self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Italic => "Helvetica-Oblique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    face: Face,
    size: f32,
    x: f32,
    y: f32,
    text: String,
}

/// Positioned text split across pages.
#[derive(Debug, Clone)]
pub struct PdfLayout {
    pages: Vec<Vec<PlacedLine>>,
    cursor_y: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfLayout {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor_y: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every placed line, page by page.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.iter().map(|line| line.text.as_str()))
    }

    fn paragraph(&mut self, text: &str, face: Face, size: f32, align: Align, indent: f32) {
        let usable = PAGE_WIDTH - 2.0 * MARGIN - indent;
        let line_height = size * LINE_SPACING;

        for line in wrap(&to_ascii(text), face, size, usable) {
            if self.cursor_y - line_height < MARGIN {
                self.pages.push(Vec::new());
                self.cursor_y = PAGE_HEIGHT - MARGIN;
            }
            self.cursor_y -= line_height;

            let x = match align {
                Align::Left => MARGIN + indent,
                Align::Center => {
                    let width = face.text_width(&line, size);
                    ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
                }
            };
            let placed = PlacedLine {
                face,
                size,
                x,
                y: self.cursor_y,
                text: line,
            };
            if let Some(page) = self.pages.last_mut() {
                page.push(placed);
            }
        }
    }

    fn gap(&mut self, points: f32) {
        self.cursor_y -= points;
    }

    /// Serialize the layout as a PDF document.
    pub fn to_bytes(&self) -> Vec<u8> {
        let page_count = self.pages.len();
        let mut objects: Vec<String> = Vec::with_capacity(FIRST_PAGE_OBJECT + 2 * page_count);

        let kids = (0..page_count)
            .map(|idx| format!("{} 0 R", page_object_id(idx)))
            .collect::<Vec<_>>()
            .join(" ");
        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        objects.push(format!(
            "<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"
        ));
        for face in Face::ALL {
            objects.push(format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                face.base_font()
            ));
        }

        let fonts = Face::ALL
            .iter()
            .enumerate()
            .map(|(idx, face)| format!("/{} {} 0 R", face.resource(), idx + 3))
            .collect::<Vec<_>>()
            .join(" ");
        for (idx, page) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
                 /Resources << /Font << {fonts} >> >> /Contents {} 0 R >>",
                page_object_id(idx) + 1
            ));
            let stream = content_stream(page);
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}endstream",
                stream.len()
            ));
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (idx, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", idx + 1));
        }

        let xref_offset = out.len();
        out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            out.push_str(&format!("{offset:010} 00000 n \n"));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        out.into_bytes()
    }
}

fn page_object_id(page_index: usize) -> usize {
    FIRST_PAGE_OBJECT + 2 * page_index
}

fn content_stream(lines: &[PlacedLine]) -> String {
    let mut stream = String::new();
    for line in lines {
        stream.push_str(&format!(
            "BT\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            line.face.resource(),
            line.size,
            line.x,
            line.y,
            escape(&line.text)
        ));
    }
    stream
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ch if ch.is_ascii_control() => escaped.push(' '),
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// Greedy word wrap by measured width; words wider than a line are split.
fn wrap(text: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    let fits = |candidate: &str| face.text_width(candidate, size) <= max_width;
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(candidate.as_str()) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                current.push(ch);
                if current.chars().count() > 1 && !fits(current.as_str()) {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, ch.to_string()));
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Lay out a plan page by page.
pub fn layout_itinerary(plan: &ItineraryPlan) -> PdfLayout {
    let mut layout = PdfLayout::new();

    layout.paragraph(
        &format!("{} Travel Plan", plan.destination),
        Face::Bold,
        18.0,
        Align::Center,
        0.0,
    );
    layout.paragraph(
        &format!(
            "Focus: {}",
            format_focus_text(&plan.interests, Some(&plan.highlight_text))
        ),
        Face::Regular,
        12.0,
        Align::Center,
        0.0,
    );
    layout.paragraph(&plan.guardrail_message, Face::Regular, 11.0, Align::Center, 0.0);
    layout.paragraph(
        &format!("Trip length: {} day(s)", plan.days.len()),
        Face::Regular,
        11.0,
        Align::Center,
        0.0,
    );

    for day in &plan.days {
        layout.gap(10.0);
        layout.paragraph(
            &day_header(&plan.destination, day),
            Face::Bold,
            13.0,
            Align::Left,
            0.0,
        );
        layout.paragraph(&day.daily_tip, Face::Regular, 10.0, Align::Left, 0.0);
        for (idx, item) in day.items.iter().enumerate() {
            layout.gap(3.0);
            layout.paragraph(
                &format!("{}. {}: {}", idx + 1, item.slot, item.name),
                Face::Bold,
                11.0,
                Align::Left,
                0.0,
            );
            layout.paragraph(&item.description, Face::Regular, 10.0, Align::Left, INDENT);
            layout.paragraph(
                &format!("Tip: {}", item.tip),
                Face::Italic,
                10.0,
                Align::Left,
                INDENT,
            );
        }
    }

    if let Some(summary) = plan.ai_summary.as_deref() {
        layout.gap(10.0);
        layout.paragraph("AI insight", Face::Bold, 13.0, Align::Left, 0.0);
        layout.paragraph(summary, Face::Regular, 10.0, Align::Left, 0.0);
    }

    layout
}

/// Render a plan to PDF bytes.
pub fn build_itinerary_pdf(plan: &ItineraryPlan) -> Vec<u8> {
    let layout = layout_itinerary(plan);
    debug!(
        target: "travel_planner::render",
        pages = layout.page_count(),
        destination = %plan.destination,
        "rendering itinerary PDF"
    );
    layout.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_itinerary;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap(
            "the quick brown fox jumps over the lazy dog",
            Face::Regular,
            10.0,
            50.0,
        );
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines
            .iter()
            .all(|line| Face::Regular.text_width(line, 10.0) <= 50.0));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(
            wrap("WWWWWWWWWW xy", Face::Regular, 10.0, 30.0),
            vec!["WWW", "WWW", "WWW", "W xy"]
        );
        assert!(wrap("   ", Face::Regular, 10.0, 30.0).is_empty());
    }

    #[test]
    fn test_wide_glyphs_stay_inside_the_margin() {
        let wide = "W".repeat(80);
        let plan = generate_itinerary(&wide, 2, &["Art"], &[wide.as_str(), "MMMM WWWW MMMM"]);
        let layout = layout_itinerary(&plan);

        let right_edge = PAGE_WIDTH - MARGIN + 0.01;
        for line in layout.pages.iter().flatten() {
            let end = line.x + line.face.text_width(&line.text, line.size);
            assert!(end <= right_edge, "{:?} ends at {end}", line.text);
            assert!(line.x >= MARGIN);
        }
        assert!(layout.lines().filter(|line| line.starts_with("WWW")).count() > 2);
    }

    #[test]
    fn test_escape_parentheses() {
        assert_eq!(escape(r"a (b) \c"), r"a \(b\) \\c");
    }

    #[test]
    fn test_document_structure() {
        let plan = generate_itinerary("São Paulo", 1, &["Food"], &["No late nights"]);
        let bytes = build_itinerary_pdf(&plan);
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.is_ascii());
        assert!(text.contains("(Sao Paulo Travel Plan) Tj"));
        assert!(text.contains("/BaseFont /Helvetica-Oblique"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let plan = generate_itinerary("Oslo", 2, &["Nature"], &[] as &[&str]);
        let text = String::from_utf8(build_itinerary_pdf(&plan)).unwrap();

        let xref_at: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|line| line.parse().ok())
            .unwrap();
        assert!(text[xref_at..].starts_with("xref\n"));

        let entries: Vec<usize> = text[xref_at..]
            .lines()
            .skip(3)
            .take_while(|line| line.ends_with(" n "))
            .map(|line| line[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 5 + 2 * 1);
        for (idx, offset) in entries.iter().enumerate() {
            assert!(text[*offset..].starts_with(&format!("{} 0 obj", idx + 1)));
        }
    }

    #[test]
    fn test_long_trip_paginates() {
        let plan = generate_itinerary("Lisbon", 30, &["History", "Food"], &[] as &[&str]);
        let layout = layout_itinerary(&plan);

        assert!(layout.page_count() > 1);
        assert!(layout.lines().any(|line| line == "Day 30 - Lisbon (Food)"));
        for page in &layout.pages {
            assert!(page.iter().all(|line| line.y >= MARGIN));
        }
    }
}
