use crate::{
    canvas::PageCanvas,
    font::{Font, RESOURCE_NAME},
    info::Info,
    layout::{Layout, LayoutConfig},
    placed::PlacedText,
    refs::{ObjectReferences, RefType},
    render, OverlayError,
};
use log::debug;
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// Everything needed to lay text out onto one template page and paint it: the font,
/// the template's page dimensions and the layout constants.
///
/// ```no_run
/// use pdf_overlay::{pagesize, Font, Group, Overlay, Pt};
///
/// let font = Font::open("NotoSansSC-Regular.ttf")?;
/// let overlay = Overlay::new(font, pagesize::A4);
///
/// let layout = overlay.layout();
/// let mut placed = vec![layout.align_center(Pt(18.0), "Certificate", Pt(780.0), true)?];
/// let details = Group::from_json_str(r#"{ "Name": "Ada", "Date": "1843-07-10" }"#)?;
/// layout.layout_group(&details, Pt(12.0), Pt(400.0), Pt(700.0), Pt(24.0), &mut placed)?;
///
/// overlay.write(&placed, std::fs::File::create("certificate.pdf")?)?;
/// # Ok::<(), pdf_overlay::OverlayError>(())
/// ```
pub struct Overlay {
    pub font: Font,
    pub canvas: PageCanvas,
    pub config: LayoutConfig,
    pub info: Option<Info>,
}

impl Overlay {
    pub fn new(font: Font, canvas: PageCanvas) -> Overlay {
        Overlay {
            font,
            canvas,
            config: LayoutConfig::default(),
            info: None,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// A layout engine measuring with this overlay's font on this overlay's canvas
    pub fn layout(&self) -> Layout<'_, Font> {
        Layout::new(&self.canvas, &self.font).with_config(self.config)
    }

    /// Render placed text into a content stream to append to the template page. The
    /// page must register this overlay's font under the `/F0` resource name.
    pub fn content_stream(&self, placed: &[PlacedText]) -> Result<Vec<u8>, OverlayError> {
        render::content_stream(placed, &self.font)
    }

    /// Write a complete single-page PDF whose page has the canvas' dimensions and carries
    /// the placed text, with the font embedded.
    ///
    /// The document is assembled in memory before anything is written to `w`.
    pub fn write<W: Write>(&self, placed: &[PlacedText], mut w: W) -> Result<(), OverlayError> {
        debug!(
            "writing {} placed runs onto a {} x {} page",
            placed.len(),
            self.canvas.width,
            self.canvas.height
        );

        let content = self.content_stream(placed)?;
        let glyphs = render::used_glyphs(placed, &self.font)?;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.alloc(RefType::Catalog);
        let page_tree_id = refs.alloc(RefType::PageTree);
        let page_id = refs.alloc(RefType::Page);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        writer.catalog(catalog_id).pages(page_tree_id);
        writer.pages(page_tree_id).kids([page_id]).count(1);

        let font_id = self.font.write(&mut refs, &glyphs, &mut writer);
        let content_id = refs.alloc(RefType::Content);

        let mut page = writer.page(page_id);
        page.media_box(self.canvas.media_box());
        page.parent(page_tree_id);
        page.contents(content_id);
        let mut resources = page.resources();
        resources.fonts().pair(Name(RESOURCE_NAME.as_bytes()), font_id);
        resources.finish();
        page.finish();

        writer.stream(content_id, content.as_slice());

        w.write_all(writer.finish().as_slice())?;
        Ok(())
    }
}
