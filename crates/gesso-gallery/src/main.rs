//! Gallery: paints a sheet of styled control mockups and writes PNGs.
//!
//! Usage:
//!
//! ```text
//! gesso-gallery [OUT_DIR] [--font PATH]
//! ```
//!
//! Without a font the mockups render background, border, and image layers
//! only; with one, the button row gets labels.

use anyhow::{Context, Result};

use gesso_engine::logging::{LoggingConfig, init_logging};
use gesso_ui::prelude::*;

struct Args {
    out_dir: std::path::PathBuf,
    font_path: Option<std::path::PathBuf>,
}

fn parse_args() -> Args {
    let mut out_dir = std::path::PathBuf::from("gallery-out");
    let mut font_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--font" {
            font_path = args.next().map(Into::into);
        } else {
            out_dir = arg.into();
        }
    }
    Args { out_dir, font_path }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut fonts = FontSystem::new();
    let font = match &args.font_path {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Some(fonts.load_font(&bytes)?)
        }
        None => None,
    };

    write_sheet(&args.out_dir, "buttons.png", &fonts, |surface, fonts| {
        button_row(surface, fonts, font)
    })?;
    write_sheet(&args.out_dir, "gradient-panel.png", &fonts, gradient_panel)?;
    write_sheet(&args.out_dir, "group-frame.png", &fonts, group_frame)?;
    write_sheet(&args.out_dir, "image-tile.png", &fonts, image_tile)?;

    log::info!("gallery written to {}", args.out_dir.display());
    Ok(())
}

/// Paints one sheet through `draw` and writes it out as a PNG.
fn write_sheet(
    dir: &std::path::Path,
    name: &str,
    fonts: &FontSystem,
    draw: impl FnOnce(&mut Surface, &FontSystem) -> Result<()>,
) -> Result<()> {
    let mut surface = Surface::new(480, 120)?;
    surface.clear(Color::rgb(28, 30, 34));
    draw(&mut surface, fonts)?;

    let pm = surface.into_pixmap();
    let img = image::RgbaImage::from_raw(pm.width(), pm.height(), pm.data().to_vec())
        .context("pixmap should convert to an RGBA image")?;
    let path = dir.join(name);
    img.save(&path).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// One button mockup per visual state: normal, hover, pressed, disabled.
fn button_row(surface: &mut Surface, fonts: &FontSystem, font: Option<FontId>) -> Result<()> {
    let background = ColorStateTable::new(
        Color::rgb(52, 120, 246),
        Color::rgb(70, 74, 80),
        Color::rgb(82, 144, 250),
        Color::rgb(36, 96, 214),
    );
    let border = ColorStateTable::uniform(Color::rgb(20, 60, 140))
        .disabled(Color::rgb(52, 56, 62));
    let label = ColorStateTable::uniform(Color::rgb(240, 244, 250))
        .disabled(Color::rgb(140, 144, 150));

    let states = [
        ("normal", true, InteractionState::Normal),
        ("hover", true, InteractionState::Hover),
        ("pressed", true, InteractionState::Pressed),
        ("disabled", false, InteractionState::Normal),
    ];

    for (i, (name, enabled, state)) in states.into_iter().enumerate() {
        let rect = Rect::new(16.0 + i as f32 * 116.0, 40.0, 104.0, 36.0);
        let mut req = PaintRequest::new(rect)
            .enabled(enabled)
            .state(state)
            .background_colors(background)
            .text_colors(label)
            .border(BorderSpec::rounded(1.0, border, 6.0));
        if let Some(id) = font {
            req = req.text(name, id, 14.0);
        }
        ControlPainter::paint(surface, fonts, &req)?;
    }
    Ok(())
}

/// A panel filled with a four-corner gradient.
fn gradient_panel(surface: &mut Surface, fonts: &FontSystem) -> Result<()> {
    let field = ColorField::from_corners(
        Color::rgb(250, 90, 60),
        Color::rgb(250, 200, 60),
        Color::rgb(120, 60, 200),
        Color::rgb(60, 160, 250),
    );
    let req = PaintRequest::new(Rect::new(16.0, 12.0, 448.0, 96.0))
        .background(Background::Gradient(field))
        .border(BorderSpec::rounded(1.0, ColorStateTable::uniform(Color::rgb(16, 16, 20)), 10.0));
    Ok(ControlPainter::paint(surface, fonts, &req)?)
}

/// A group-box style frame: border only, selective corner rounding.
fn group_frame(surface: &mut Surface, fonts: &FontSystem) -> Result<()> {
    let req = PaintRequest::new(Rect::new(16.0, 12.0, 448.0, 96.0))
        .border(
            BorderSpec::rounded(2.0, ColorStateTable::uniform(Color::rgb(110, 116, 126)), 8.0)
                .corners(CornerFlags { bottom_right: false, ..CornerFlags::ALL }),
        );
    Ok(ControlPainter::paint(surface, fonts, &req)?)
}

/// A tile whose background stretches a procedurally built image.
fn image_tile(surface: &mut Surface, fonts: &FontSystem) -> Result<()> {
    // Checkerboard source, stretched over the tile.
    let mut tile = Pixmap::new(8, 8)?;
    for y in 0..8 {
        for x in 0..8 {
            let c = if (x + y) % 2 == 0 {
                Color::rgb(230, 230, 235)
            } else {
                Color::rgb(60, 64, 72)
            };
            tile.set_pixel(x, y, c);
        }
    }

    let req = PaintRequest::new(Rect::new(180.0, 12.0, 120.0, 96.0))
        .background(Background::Image(tile, ImageLayout::Stretch))
        .border(BorderSpec::rounded(1.0, ColorStateTable::uniform(Color::rgb(16, 16, 20)), 6.0));
    Ok(ControlPainter::paint(surface, fonts, &req)?)
}
