use std::fs;
use std::io;
use std::path::Path;

pub(crate) const GLYPH_ROWS: usize = 6;

const SPACE_GLYPH_ROW: &str = "     ";

// Glyphs start at `!`. A line with `@@` ends a glyph; a row ends at its first `@`.
#[derive(Debug, Clone, Default)]
pub(crate) struct BigFont {
    glyphs: Vec<Vec<String>>,
}

impl BigFont {
    pub(crate) fn load(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    pub(crate) fn parse(raw: &str) -> Self {
        let mut glyphs = vec![Vec::new(); usize::from(b'!')];
        let mut next = Vec::new();
        for line in raw.lines() {
            if line.contains("@@") {
                glyphs.push(std::mem::take(&mut next));
            } else {
                let row = line.split('@').next().unwrap_or_default();
                next.push(row.to_string());
            }
        }
        Self { glyphs }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.glyphs.len() <= usize::from(b'!')
    }

    pub(crate) fn render(&self, text: &str) -> Vec<String> {
        if self.is_empty() {
            return vec![text.to_string()];
        }

        (0..GLYPH_ROWS)
            .map(|row| {
                let mut line = String::new();
                for ch in text.chars() {
                    let piece = if ch == ' ' {
                        SPACE_GLYPH_ROW
                    } else {
                        match self.glyphs.get(ch as usize) {
                            Some(glyph) => glyph.get(row).map_or("", String::as_str),
                            None => continue,
                        }
                    };
                    line.push_str(piece);
                    line.push(' ');
                }
                line
            })
            .collect()
    }
}
