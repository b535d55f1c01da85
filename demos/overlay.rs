//! Lays a JSON job out onto an A4 page and writes it as a PDF.
//!
//! ```text
//! cargo run --example overlay -- <font.ttf> <job.json> [out.pdf]
//! ```
//!
//! A job looks like:
//!
//! ```json
//! {
//!     "requests": [{ "align": "center", "text": "Certificate", "font_size": 20, "y": 780, "emphasis": true }],
//!     "tree": { "Name": "Ada", "Address": { "City": "London" } },
//!     "font_size": 12, "right_margin": 400, "start_y": 700, "row_height": 24
//! }
//! ```

use pdf_overlay::{pagesize, Font, Group, Info, LayoutConfig, Overlay, Pt, TextRequest};
use serde::Deserialize;

#[derive(Deserialize)]
struct Job {
    #[serde(default)]
    requests: Vec<TextRequest>,
    #[serde(default)]
    tree: serde_json::Value,
    font_size: Pt,
    right_margin: Pt,
    start_y: Pt,
    row_height: Pt,
    #[serde(default)]
    config: LayoutConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(font_path), Some(job_path)) = (args.next(), args.next()) else {
        return Err("usage: overlay <font.ttf> <job.json> [out.pdf]".into());
    };
    let out_path = args.next().unwrap_or_else(|| "overlay.pdf".to_string());

    let job: Job = serde_json::from_str(&std::fs::read_to_string(job_path)?)?;

    let mut overlay = Overlay::new(Font::open(font_path)?, pagesize::A4);
    if let Some(name) = overlay.font.name() {
        log::info!("using {name}");
    }
    overlay.set_config(job.config);
    let mut info = Info::new();
    info.title("Overlay demo").created_now();
    overlay.set_info(info);

    let layout = overlay.layout();
    log::debug!(
        "laying out on {} x {} with {:?}",
        layout.canvas().width,
        layout.canvas().height,
        layout.config()
    );
    let mut placed = Vec::new();
    layout.place_all(&job.requests, &mut placed)?;

    if !job.tree.is_null() {
        let tree = Group::from_json(&job.tree)?;
        let last_y = layout.layout_group(
            &tree,
            job.font_size,
            job.right_margin,
            job.start_y,
            job.row_height,
            &mut placed,
        )?;
        log::info!("tree finished at y = {last_y}");
    }

    let out = std::fs::File::create(&out_path)?;
    overlay.write(&placed, out)?;
    log::info!("wrote {} runs to {out_path}", placed.len());
    Ok(())
}
