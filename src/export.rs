// src/export.rs
//
// Exporta el resumen a un PDF paginado: A4, márgenes fijos, título centrado.
// Sólo Helvetica estándar, así que el texto se reduce a ASCII imprimible.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub leading: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 56.69, // 20 mm
            title_size: 16.0,
            body_size: 11.0,
            leading: 1.4,
        }
    }
}

impl PageSetup {
    fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Caracteres por línea con el ancho medio de Helvetica.
    fn chars_per_line(&self) -> usize {
        ((self.text_width() / approx_char_width(self.body_size)) as usize).max(1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

fn approx_char_width(size: f32) -> f32 {
    size * 0.5
}

/// Aviso para el usuario cuando el resumen pierde caracteres al exportarse.
pub const SUBSTITUTION_NOTE: &str = "characters outside basic Latin were replaced with '?'";

fn pdf_char(c: char) -> Option<char> {
    match c {
        '\u{2018}' | '\u{2019}' => Some('\''),
        '\u{201C}' | '\u{201D}' => Some('"'),
        '\u{2013}' | '\u{2014}' => Some('-'),
        '\t' => Some(' '),
        '\n' | '\r' => Some(c),
        c if c.is_ascii() && !c.is_ascii_control() => Some(c),
        _ => None,
    }
}

fn to_pdf_text(input: &str) -> String {
    input.chars().map(|c| pdf_char(c).unwrap_or('?')).collect()
}

/// `true` si algún carácter del texto acabará como `?` en el PDF.
pub fn needs_substitution(text: &str) -> bool {
    text.chars().any(|c| pdf_char(c).is_none())
}

/// Ajuste de línea por palabras; las palabras más largas que la línea se cortan.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let mut word = word.to_string();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word);
            word = rest;
        }
        if current.is_empty() {
            current = word;
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn layout(title: &str, text: &str, setup: &PageSetup) -> Vec<Page> {
    let body_step = setup.body_size * setup.leading;
    let top = setup.height - setup.margin;

    let title = to_pdf_text(title.trim());
    let title_width = title.len() as f32 * approx_char_width(setup.title_size);
    let mut page = Page::default();
    page.lines.push(PlacedLine {
        x: ((setup.width - title_width) / 2.0).max(setup.margin),
        y: top - setup.title_size,
        size: setup.title_size,
        bold: true,
        text: title,
    });

    let mut pages = Vec::new();
    let mut y = top - setup.title_size - setup.title_size * setup.leading;

    let text = to_pdf_text(&text.replace("\r\n", "\n"));
    for (i, paragraph) in text.split("\n\n").enumerate() {
        let wrapped = wrap(paragraph, setup.chars_per_line());
        if wrapped.is_empty() {
            continue;
        }
        if i > 0 {
            y -= body_step / 2.0;
        }
        for line in wrapped {
            y -= body_step;
            if y < setup.margin {
                pages.push(std::mem::take(&mut page));
                y = top - setup.body_size;
            }
            page.lines.push(PlacedLine {
                x: setup.margin,
                y,
                size: setup.body_size,
                bold: false,
                text: line,
            });
        }
    }
    pages.push(page);
    pages
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn content_stream(page: &Page) -> String {
    let mut stream = String::new();
    for line in &page.lines {
        let font = if line.bold { "F2" } else { "F1" };
        let _ = writeln!(
            stream,
            "BT /{font} {:.1} Tf {:.2} {:.2} Td ({}) Tj ET",
            line.size,
            line.x,
            line.y,
            escape(&line.text)
        );
    }
    stream
}

pub fn render_pdf(pages: &[Page], setup: &PageSetup) -> Vec<u8> {
    // 1 catálogo, 2 páginas, 3-4 fuentes, luego (página, contenido) por página
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 5 + 2 * i))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string());

    for (i, page) in pages.iter().enumerate() {
        let content_id = 6 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_id} 0 R >>",
            setup.width, setup.height
        ));
        let stream = content_stream(page);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}endstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", i + 1);
    }

    let xref = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(out, "{offset:010} 00000 n \n");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    );
    out.into_bytes()
}

pub fn export_summary_pdf(title: &str, summary: &str) -> Vec<u8> {
    let setup = PageSetup::default();
    let pages = layout(title, summary, &setup);
    log::info!("exporting summary: {} page(s)", pages.len());
    render_pdf(&pages, &setup)
}
