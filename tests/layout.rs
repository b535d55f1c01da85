use pdf_overlay::{
    FixedAdvance, Group, Layout, LayoutConfig, OverlayError, PageCanvas, PlacedText, Pt,
    TextMetrics, TextRequest,
};

/// Glyph widths that vary per character, so alignment is checked against something
/// less forgiving than a fixed pitch
struct Proportional;

impl TextMetrics for Proportional {
    fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, OverlayError> {
        Ok(text
            .chars()
            .map(|ch| size * ((ch as u32 % 7 + 3) as f32 / 10.0))
            .sum())
    }
}

/// Fixed-pitch metrics for a font that lacks a snowman
struct NoSnowman;

impl TextMetrics for NoSnowman {
    fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, OverlayError> {
        match text.chars().find(|&ch| ch == '☃') {
            Some(ch) => Err(OverlayError::MissingGlyph { ch }),
            None => FixedAdvance(Pt(10.0)).width_of_text(text, size),
        }
    }
}

fn page() -> PageCanvas {
    PageCanvas::new(Pt(600.0), Pt(800.0))
}

fn assert_close(actual: Pt, expected: Pt) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn alignment_invariants_hold_for_varied_widths() {
    let canvas = page();
    let layout = Layout::new(&canvas, &Proportional);

    for text in ["", "Name", "Invoice total", "W", "lorem ipsum dolor sit amet"] {
        for size in [Pt(8.0), Pt(12.0), Pt(30.0)] {
            let width = Proportional
                .width_of_text(text, size)
                .expect("never fails");

            let centred = layout
                .align_center(size, text, Pt(100.0), false)
                .expect("never fails");
            assert_close(centred.x + width / 2.0, canvas.width / 2.0);

            let right = layout
                .align_right(size, text, Pt(35.0), Pt(100.0), true)
                .expect("never fails");
            assert_close(right.x + width + Pt(35.0), canvas.width);
            assert!(right.emphasis);
        }
    }
}

#[test]
fn zero_width_column_never_holds_two_characters() {
    let canvas = page();
    let layout = Layout::new(&canvas, &Proportional);
    let text = lipsum::lipsum(40);

    let (lines, last_y) = layout
        .wrap(&text, Pt(10.0), Pt(0.0), (Pt(20.0), Pt(780.0)))
        .expect("never fails");

    assert_eq!(lines.len(), text.chars().count());
    assert!(lines.iter().all(|line| line.content.chars().count() == 1));
    assert_eq!(last_y, lines.last().expect("text is not empty").y);
}

#[test]
fn wrapped_lines_fit_and_reassemble() {
    let canvas = page();
    let layout = Layout::new(&canvas, &Proportional);
    let text = lipsum::lipsum(120);
    let max_width = Pt(250.0);

    let (lines, _) = layout
        .wrap(&text, Pt(11.0), max_width, (Pt(50.0), Pt(750.0)))
        .expect("never fails");

    let rejoined: String = lines.iter().map(|line| line.content.as_str()).collect();
    assert_eq!(rejoined, text);
    for (i, line) in lines.iter().enumerate() {
        let width = Proportional
            .width_of_text(&line.content, Pt(11.0))
            .expect("never fails");
        assert!(width <= max_width + Pt(1e-3), "line {i} is {width} wide");
        assert_eq!(line.x, Pt(50.0));
        assert_close(line.y, Pt(750.0) - Pt(11.0) * i as f32 * 1.5);
    }
}

#[test]
fn key_and_paragraph_scenario() {
    let canvas = page();
    let metrics = FixedAdvance(Pt(10.0));
    let layout = Layout::new(&canvas, &metrics);

    let mut placed = Vec::new();
    let last_y = layout
        .layout_group(
            &Group::new().with("Note", "ABCDE"),
            Pt(12.0),
            Pt(50.0),
            Pt(700.0),
            Pt(20.0),
            &mut placed,
        )
        .expect("never fails");

    let mut expected = vec![PlacedText::new("Note", Pt(510.0), Pt(700.0), Pt(12.0), false)];
    for (i, ch) in "ABCDE".chars().enumerate() {
        expected.push(PlacedText::new(
            ch.to_string(),
            Pt(600.0),
            Pt(700.0) - Pt(12.0) * i as f32 * 1.5,
            Pt(12.0),
            false,
        ));
    }
    assert_eq!(placed, expected);
    assert_eq!(last_y, expected[5].y - Pt(20.0));
}

#[test]
fn json_tree_lays_out_in_source_order() {
    let canvas = page();
    let metrics = FixedAdvance(Pt(10.0));
    let layout = Layout::new(&canvas, &metrics);

    let tree = Group::from_json_str(
        r#"{
            "Zulu": "z",
            "Alpha": { "Inner": "i" },
            "Mike": "m"
        }"#,
    )
    .expect("valid tree");

    let mut placed = Vec::new();
    layout
        .layout_group(&tree, Pt(12.0), Pt(50.0), Pt(700.0), Pt(20.0), &mut placed)
        .expect("never fails");

    let contents: Vec<&str> = placed.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, ["Zulu", "z", "Alpha", "Inner", "i", "Mike", "m"]);
}

#[test]
fn wider_pages_keep_paragraphs_on_one_line() {
    let canvas = PageCanvas::new(Pt(1684.0), Pt(1191.0));
    let metrics = FixedAdvance(Pt(10.0));
    let layout = Layout::new(&canvas, &metrics);

    let mut placed = Vec::new();
    let last_y = layout
        .layout_group(
            &Group::new().with("Remarks", "all good"),
            Pt(12.0),
            Pt(900.0),
            Pt(1000.0),
            Pt(30.0),
            &mut placed,
        )
        .expect("never fails");

    // 1684 - 1300 leaves 384pt, room for the whole 80pt paragraph
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[1].content, "all good");
    assert_eq!(placed[1].x, Pt(1684.0 - 900.0 + 50.0));
    assert_eq!(last_y, Pt(970.0));
}

#[test]
fn custom_config_moves_the_value_column() {
    let canvas = page();
    let metrics = FixedAdvance(Pt(10.0));
    let mut config = LayoutConfig::new();
    config.value_column_offset(Pt(10.0)).wrap_inset(Pt(0.0));
    let layout = Layout::new(&canvas, &metrics).with_config(config);

    let mut placed = Vec::new();
    layout
        .layout_group(
            &Group::new().with("Key", "value"),
            Pt(12.0),
            Pt(300.0),
            Pt(500.0),
            Pt(20.0),
            &mut placed,
        )
        .expect("never fails");

    assert_eq!(placed[1].coords(), (Pt(310.0), Pt(500.0)));
    assert_eq!(placed[1].content, "value");
    assert_eq!(layout.config(), &config);
    assert_eq!(layout.canvas(), &canvas);
}

#[test]
fn metrics_failures_propagate_and_keep_earlier_output() {
    let canvas = page();
    let layout = Layout::new(&canvas, &NoSnowman);
    let tree = Group::new()
        .with("First", "abc")
        .with("Second", "snow ☃ man")
        .with("Third", "never reached");

    let mut placed = Vec::new();
    let result = layout.layout_group(&tree, Pt(12.0), Pt(50.0), Pt(700.0), Pt(20.0), &mut placed);

    assert!(matches!(result, Err(OverlayError::MissingGlyph { ch: '☃' })));
    let contents: Vec<&str> = placed.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, ["First", "a", "b", "c", "Second"]);

    let requests = [
        TextRequest::Center {
            text: "fine".into(),
            font_size: Pt(12.0),
            y: Pt(10.0),
            emphasis: false,
        },
        TextRequest::Right {
            text: "☃".into(),
            font_size: Pt(12.0),
            right_margin: Pt(10.0),
            y: Pt(10.0),
            emphasis: false,
        },
    ];
    let mut placed = Vec::new();
    assert!(layout.place_all(&requests, &mut placed).is_err());
    assert_eq!(placed.len(), 1);
}

#[test]
fn repeated_passes_are_identical() {
    let canvas = page();
    let layout = Layout::new(&canvas, &Proportional);
    let tree = Group::new()
        .with("Summary", lipsum::lipsum(30))
        .with(
            "Details",
            Group::new()
                .with("Owner", "someone")
                .with("Nested", Group::new().with("Deep", "value")),
        )
        .with("Closing", "done");

    let run = || {
        let mut placed = Vec::new();
        placed.push(
            layout
                .align_center(Pt(20.0), "Report", Pt(780.0), true)
                .expect("never fails"),
        );
        let y = layout
            .layout_group(&tree, Pt(12.0), Pt(120.0), Pt(740.0), Pt(24.0), &mut placed)
            .expect("never fails");
        (placed, y)
    };

    let (first, first_y) = run();
    let (second, second_y) = run();
    assert_eq!(first, second);
    assert_eq!(first_y.0.to_bits(), second_y.0.to_bits());
    assert_eq!(
        serde_json::to_string(&first).expect("serializable"),
        serde_json::to_string(&second).expect("serializable")
    );
}
