use crate::{
    metrics::{GlyphEncoder, TextMetrics},
    refs::{ObjectReferences, RefType},
    OverlayError, Pt,
};
use log::debug;
use owned_ttf_parser::{name_id, AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::path::Path;

/// The name the overlay font is registered under in the page resources
pub(crate) const RESOURCE_NAME: &str = "F0";

/// A parsed TrueType or OpenType font. It measures text for layout and is embedded
/// in its entirety in generated PDFs, so large CJK fonts will make for large files.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, OverlayError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, OverlayError> {
        let path = path.as_ref();
        debug!("loading font from {}", path.display());
        Font::load(std::fs::read(path)?)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(name_id::FAMILY)
    }

    /// The PostScript name of the font, if it has one
    pub fn postscript_name(&self) -> Option<String> {
        self.name_entry(name_id::POST_SCRIPT_NAME)
    }

    /// Name written as the `BaseFont` of the embedded font. PostScript names are limited
    /// to printable ASCII without delimiters; fonts without a usable one fall back to
    /// the resource name.
    fn base_font(&self) -> String {
        self.postscript_name()
            .filter(|name| {
                !name.is_empty()
                    && name.bytes().all(|b| {
                        b.is_ascii_graphic() && !b"()<>[]{}/%#".contains(&b)
                    })
            })
            .unwrap_or_else(|| RESOURCE_NAME.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font at the given size. Usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// The font's natural distance between two baselines at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        self.scaling(size) * (face.line_gap() as f32 + face.ascender() as f32 - face.descender() as f32)
    }

    /// Horizontal advance of `ch` in font units
    fn advance(&self, ch: char) -> Result<u16, OverlayError> {
        let face = self.face.as_face_ref();
        let gid = face
            .glyph_index(ch)
            .ok_or(OverlayError::MissingGlyph { ch })?;
        Ok(face.glyph_hor_advance(gid).unwrap_or_default())
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let base_font = self.base_font();
        debug!("embedding {base_font} with {} used glyphs", glyphs.len());

        let font_id = refs.alloc(RefType::Font);
        let cid_font_id = self.write_cid(refs, &base_font, glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        font.finish();

        font_id
    }

    /// Width of a glyph in the 1/1000 text space units PDF expects
    fn glyph_width(&self, gid: u16) -> f32 {
        let face = self.face.as_face_ref();
        let advance = face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default();
        advance as f32 * 1000.0 / face.units_per_em() as f32
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, base_font, writer);
        let id = refs.alloc(RefType::CidFont);

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);

        // only the glyphs that are actually painted need widths; group them into runs
        // of consecutive ids
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for &gid in glyphs.keys() {
            let width = self.glyph_width(gid);
            if let Some((start, widths)) = runs.last_mut() {
                if *start as usize + widths.len() == gid as usize {
                    widths.push(width);
                    continue;
                }
            }
            runs.push((gid, vec![width]));
        }

        let mut widths = cid_font.widths();
        for (start, run) in runs {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        base_font: &str,
        writer: &mut Pdf,
    ) -> Ref {
        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let data_id = refs.alloc(RefType::FontData);
        writer
            .stream(data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let id = refs.alloc(RefType::FontDescriptor);
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(face.ascender() as f32 * scaling),
        );
        // TODO: derive the stem width from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.alloc(RefType::ToUnicode);

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries each
        let entries: Vec<(&u16, &char)> = glyphs.iter().collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block {
                let mut units = [0u16; 2];
                let hex: String = ch
                    .encode_utf16(&mut units)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{hex}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

impl TextMetrics for Font {
    /// Sums the horizontal advances of each character. Fails on the first character the
    /// font has no glyph for.
    fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, OverlayError> {
        let mut units: u64 = 0;
        for ch in text.chars() {
            units += u64::from(self.advance(ch)?);
        }
        Ok(self.scaling(size) * units as f32)
    }
}

impl GlyphEncoder for Font {
    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|gid| gid.0)
    }
}
