use std::path::Path;

use console::Style;
use pixview_core::engine::ViewportEngine;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_fit_summary(file: &Path, engine: &ViewportEngine) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!("  {:<14}{}", s.label.apply_to("File"), s.path.apply_to(file.display()));
    if let Some(size) = engine.image_size() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Dimensions"),
            s.value.apply_to(format!("{}x{}", size.width, size.height))
        );
    }
    if let Some(rect) = engine.viewport_rect() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Viewport"),
            s.value.apply_to(format!("{}x{}", rect.width, rect.height))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Fit scale"),
        s.value.apply_to(format!("{:.1}%", engine.scale() * 100.0))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Min scale"),
        s.value.apply_to(format!("{:.2}%", engine.min_scale() * 100.0))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Placement"),
        s.value.apply_to(engine.placement())
    );
    println!();
}
