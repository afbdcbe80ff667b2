use copybook::layout::{hit_regions, paginate, page_height_px, PageGeometry, PAGE_WIDTH_PX};
use copybook::model::{parse_text, StrokeCache};
use copybook::render::FontStore;
use copybook::{render_pages, Settings};

use kurbo::BezPath;

/// A layout where exactly thirteen characters fit on one page: 20mm cells
/// with both bands hidden and no row spacing inside 10mm margins.
fn thirteen_per_page() -> Settings {
    Settings {
        show_stroke: false,
        show_pinyin: false,
        grid_size_mm: 20.0,
        row_spacing_mm: 0.0,
        ..Settings::default()
    }
}

#[test]
fn test_parse_text_keeps_hanzi_only() {
    let characters = parse_text("你好, hello 世界!\n123");

    assert_eq!(characters.len(), 4);
    let text: String = characters.iter().map(|c| c.ch).collect();
    assert_eq!(text, "你好世界");

    // Every character carries a selected reading.
    for c in &characters {
        assert!(!c.selected_pinyin.is_empty());
        assert!(c.pinyin.contains(&c.selected_pinyin));
    }
}

#[test]
fn test_pagination_fills_pages_in_order() {
    let characters: Vec<_> = parse_text(&"你".repeat(20));
    let settings = thirteen_per_page();

    let pages = paginate(&characters, &settings);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].range, 0..13);
    assert_eq!(pages[1].range, 13..20);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[1].number, 2);
    assert_eq!(pages[1].total, 2);
}

#[test]
fn test_empty_row_halves_page_capacity() {
    let characters: Vec<_> = parse_text(&"你".repeat(20));
    let settings = Settings {
        insert_empty_row: true,
        ..thirteen_per_page()
    };

    let pages = paginate(&characters, &settings);
    assert_eq!(pages[0].range, 0..6);
}

#[test]
fn test_oversize_character_still_gets_a_page() {
    let characters = parse_text("你好");
    let settings = Settings {
        grid_size_mm: 400.0,
        ..Settings::default()
    };

    // A row taller than the page can never fit, but each character must
    // still land somewhere.
    let pages = paginate(&characters, &settings);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].range, 0..1);
    assert_eq!(pages[1].range, 1..2);
}

#[test]
fn test_render_pages_produces_a4_surfaces() {
    let characters = parse_text("你好世");
    let settings = Settings::default();

    let pages = render_pages(&characters, &settings, &StrokeCache::new(), &FontStore::new())
        .expect("rendering failed");

    assert_eq!(pages.len(), 1);
    for page in &pages {
        assert_eq!(page.width(), 794);
        assert_eq!(page.height(), 1123);
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let characters = parse_text("春眠不觉晓");
    let settings = Settings::default();

    let first = render_pages(&characters, &settings, &StrokeCache::new(), &FontStore::new())
        .expect("rendering failed");
    let second = render_pages(&characters, &settings, &StrokeCache::new(), &FontStore::new())
        .expect("rendering failed");

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.data(), b.data());
    }
}

#[test]
fn test_grid_renders_without_any_fonts() {
    let characters = parse_text("你");
    let settings = Settings::default();

    let pages = render_pages(&characters, &settings, &StrokeCache::new(), &FontStore::new())
        .expect("rendering failed");

    // The page is white with grid ink on it even though no label could draw.
    let page = &pages[0];
    let pixels = page.pixels();
    assert!(pixels.iter().any(|p| p.red() == 255 && p.green() == 255));
    assert!(pixels.iter().any(|p| p.red() < 255));
}

#[test]
fn test_stroke_data_changes_rendered_output() {
    let characters = parse_text("一");
    let settings = Settings::default();

    let mut strokes = StrokeCache::new();
    strokes.insert(
        '一',
        vec![BezPath::from_svg("M 64 448 L 960 448 L 960 576 L 64 576 Z").unwrap()],
    );

    let without = render_pages(&characters, &settings, &StrokeCache::new(), &FontStore::new())
        .expect("rendering failed");
    let with = render_pages(&characters, &settings, &strokes, &FontStore::new())
        .expect("rendering failed");

    assert_ne!(without[0].data(), with[0].data());
}

#[test]
fn test_hit_regions_agree_with_page_geometry() {
    let characters = parse_text("好");
    assert!(
        characters[0].is_ambiguous(),
        "好 should have multiple readings"
    );
    let settings = Settings::default();
    let pages = paginate(&characters, &settings);

    let regions = hit_regions(
        &characters,
        &pages[0],
        &settings,
        (PAGE_WIDTH_PX, page_height_px()),
    );

    // At 1:1 display scale the region is exactly the drawn head pinyin cell.
    let geom = PageGeometry::new(&settings);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].rect, geom.pinyin_rect(0, 0));
    assert_eq!(regions[0].selected, characters[0].selected_pinyin);
}

#[test]
fn test_every_character_is_paginated_exactly_once() {
    let characters: Vec<_> = parse_text(&"你好世界春眠不觉晓".repeat(5));
    let settings = Settings {
        insert_empty_row: true,
        ..Settings::default()
    };

    let pages = paginate(&characters, &settings);
    let mut covered = 0;
    for page in &pages {
        assert_eq!(page.range.start, covered);
        assert!(!page.is_empty());
        covered = page.range.end;
    }
    assert_eq!(covered, characters.len());
}
