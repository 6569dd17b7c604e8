use std::path::Path;

use console::Style;
use roundel_core::export::ExportWarning;
use roundel_core::geometry::Placement;
use roundel_core::session::Session;
use roundel_core::template::TemplateStatus;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_session_summary(session: &Session, photo: &Path, output: Option<&Path>) {
    let s = Styles::new();
    let geometry = session.geometry();
    let state = session.state();

    println!();
    println!("  {}", s.title.apply_to("Roundel Badge"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    // Input / Output / Template
    println!(
        "  {:<14}{}",
        s.label.apply_to("Photo"),
        s.path.apply_to(photo.display())
    );
    if let Some(source) = session.source() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Size"),
            s.value.apply_to(format!("{}x{}", source.width(), source.height()))
        );
    }
    match session.template_status() {
        TemplateStatus::Ready(asset) => println!(
            "  {:<14}{}",
            s.label.apply_to("Template"),
            s.method.apply_to(format!("{}x{}", asset.width(), asset.height()))
        ),
        TemplateStatus::Pending => println!(
            "  {:<14}{}",
            s.label.apply_to("Template"),
            s.disabled.apply_to("still loading, fallback")
        ),
        TemplateStatus::Failed(reason) => println!(
            "  {:<14}{}",
            s.label.apply_to("Template"),
            s.disabled.apply_to(format!("fallback ({reason})"))
        ),
    }
    if let Some(output) = output {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(output.display())
        );
    }
    println!();

    // Framing
    println!("  {}", s.header.apply_to("Framing"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{}%", state.zoom_slider_position()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rotation"),
        s.value.apply_to(format!("{}\u{b0}", state.rotation_degrees()))
    );
    let t = state.translation();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("{:+.1}, {:+.1}", t.x, t.y))
    );
    println!();

    // Geometry
    println!("  {}", s.header.apply_to("Geometry"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Preview"),
        s.value.apply_to(format!("\u{2300}{}", geometry.preview_diameter))
    );
    let export = geometry.export_viewport();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Export"),
        s.value.apply_to(format!(
            "\u{2300}{} at ({}, {}) on {}x{}",
            geometry.export_diameter,
            export.center_x,
            export.center_y,
            geometry.template_width,
            geometry.template_height
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Factor"),
        s.method.apply_to(format!("{:.4}", geometry.scale_factor()))
    );
    println!();
}

pub fn print_placements(session: &Session) {
    let s = Styles::new();
    let Some(source) = session.source() else {
        return;
    };
    let geometry = session.geometry();

    let preview = Placement::new(
        session.state(),
        source.size(),
        &geometry.preview_viewport(),
        1.0,
    );
    let export = Placement::new(
        session.state(),
        source.size(),
        &geometry.export_viewport(),
        geometry.scale_factor(),
    );

    println!("  {}", s.header.apply_to("Placement"));
    for (name, p) in [("Preview", preview), ("Export", export)] {
        let (cx, cy) = p.image_center();
        println!(
            "    {:<12}{}",
            s.label.apply_to(name),
            s.value.apply_to(format!(
                "{:.1}x{:.1} centered at ({:.2}, {:.2})",
                p.width, p.height, cx, cy
            ))
        );
    }
    println!();
}

pub fn print_warnings(warnings: &[ExportWarning]) {
    let s = Styles::new();
    for warning in warnings {
        eprintln!("  {} {}", s.disabled.apply_to("warning:"), warning);
    }
}
