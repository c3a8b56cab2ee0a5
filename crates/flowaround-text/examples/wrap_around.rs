//! Prints the line plan for a paragraph flowing around a 150px inset image.
//!
//! Usage: `cargo run -p flowaround-text --example wrap_around -- [width] [fixed height]`
//!
//! Set `RUST_LOG=flowaround=trace` to see every line decision.

use flowaround::{
    LayoutConfig, LayoutDriver, LayoutRequest, ObstacleEdge, ObstacleLayout, Overflow, Size,
    TextAlign,
};
use flowaround_text::{CosmicMeasurer, TextStyle};

const TEXT: &str = "At vero eos et accusamus et iusto odio dignissimos ducimus qui blanditiis \
praesentium voluptatum deleniti atque corrupti quos dolores et quas molestias excepturi sint \
occaecati cupiditate non provident.\n\
Similique sunt in culpa qui officia deserunt mollitia animi, id est laborum et dolorum fuga.\n\
Et harum quidem rerum facilis est et expedita distinctio. Nam libero tempore, cum soluta nobis \
est eligendi optio cumque nihil impedit quo minus id quod maxime placeat facere possimus, omnis \
voluptas assumenda est, omnis dolor repellendus.";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: f32 = args.next().and_then(|w| w.parse().ok()).unwrap_or(360.0);
    let fixed_height: Option<f32> = args.next().and_then(|h| h.parse().ok());

    let font_size = 16.0;
    let line_height = 30.0;

    let measurer = CosmicMeasurer::new(
        TextStyle::new()
            .with_font_size(font_size)
            .with_line_height(line_height)
            .italic(),
    );

    // 150px image with 10px of horizontal padding on each side
    let obstacles = match ObstacleLayout::new([Size::new(170.0, 150.0)]) {
        Ok(obstacles) => obstacles,
        Err(err) => {
            eprintln!("invalid obstacle: {err}");
            std::process::exit(1);
        }
    };

    let config = LayoutConfig::new()
        .with_edge(ObstacleEdge::Left)
        .with_text_align(TextAlign::Left)
        .with_font_size(font_size)
        .with_line_height(line_height)
        .with_paragraph_indent(20.0)
        .with_max_lines(22)
        .with_overflow(Overflow::Ellipsis);

    let request = LayoutRequest::new(TEXT, width)
        .with_obstacles(obstacles)
        .with_config(config);

    let mut driver = LayoutDriver::new(measurer);
    let result = match driver.layout(&request, fixed_height) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("layout failed: {err}");
            std::process::exit(1);
        }
    };

    for rect in request.obstacles.placements(request.config.edge, width) {
        println!(
            "obstacle at ({:.0}, {:.0}) size {:.0}x{:.0}",
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height()
        );
    }

    for line in &result.lines {
        let origin = line.origin(result.line_height);
        println!(
            "{:>2} x={:>6.1} y={:>6.1} budget={:>6.1} | {}",
            line.line_index, origin.x, origin.y, line.width, line.text
        );
    }

    println!(
        "container height {:.1} ({} lines{}{})",
        result.total_height,
        result.line_count(),
        if result.truncated { ", truncated" } else { "" },
        if result.height_limited {
            ", height limited"
        } else {
            ""
        }
    );
}
