//! Self-contained SVG weather icons.
//!
//! Each category is described as a background colour plus a list of shapes.
//! The shapes are rendered to SVG markup and percent-encoded into a
//! `data:` URI, so a front-end can display the icon without fetching assets.

use std::fmt;

use serde::Serialize;

use crate::classify::WeatherCategory;

const DATA_URI_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Rendered icon for a weather category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub category: WeatherCategory,
    pub data_uri: String,
    pub alt_text: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Stroke {
    color: &'static str,
    width: u8,
    round_caps: bool,
}

#[derive(Debug, Clone, Copy)]
struct Line(u8, u8, u8, u8);

#[derive(Debug, Clone, Copy)]
enum Shape {
    Circle {
        cx: u8,
        cy: u8,
        r: u8,
        fill: &'static str,
        stroke: Stroke,
    },
    Ellipse {
        cx: u8,
        cy: u8,
        rx: u8,
        ry: u8,
        fill: &'static str,
    },
    Polygon {
        points: &'static [(u8, u8)],
        fill: &'static str,
        stroke: Stroke,
    },
    /// Lines sharing one stroke style, rendered as a `<g>` group.
    Lines {
        stroke: Stroke,
        lines: &'static [Line],
    },
}

struct Artwork {
    background: &'static str,
    shapes: &'static [Shape],
}

const fn stroke(color: &'static str, width: u8) -> Stroke {
    Stroke {
        color,
        width,
        round_caps: false,
    }
}

const fn round_stroke(color: &'static str, width: u8) -> Stroke {
    Stroke {
        color,
        width,
        round_caps: true,
    }
}

const fn ellipse(cx: u8, cy: u8, rx: u8, ry: u8, fill: &'static str) -> Shape {
    Shape::Ellipse {
        cx,
        cy,
        rx,
        ry,
        fill,
    }
}

const CLEAR: Artwork = Artwork {
    background: "#fff7ed",
    shapes: &[
        Shape::Circle {
            cx: 32,
            cy: 32,
            r: 14,
            fill: "#fbbf24",
            stroke: stroke("#f59e0b", 3),
        },
        Shape::Lines {
            stroke: stroke("#f59e0b", 3),
            lines: &[
                Line(32, 6, 32, 16),
                Line(32, 48, 32, 58),
                Line(6, 32, 16, 32),
                Line(48, 32, 58, 32),
                Line(13, 13, 20, 20),
                Line(44, 44, 51, 51),
                Line(13, 51, 20, 44),
                Line(44, 20, 51, 13),
            ],
        },
    ],
};

const PARTLY_CLOUDY: Artwork = Artwork {
    background: "#eef2ff",
    shapes: &[
        ellipse(36, 36, 18, 12, "#cbd5e1"),
        ellipse(26, 38, 12, 10, "#e2e8f0"),
    ],
};

const RAIN_CLOUD: [Shape; 2] = [
    ellipse(34, 32, 18, 11, "#94a3b8"),
    ellipse(26, 36, 12, 9, "#cbd5e1"),
];

const LIGHT_CLOUD: [Shape; 2] = [
    ellipse(34, 32, 18, 11, "#cbd5e1"),
    ellipse(26, 36, 12, 9, "#e2e8f0"),
];

const RAIN: Artwork = Artwork {
    background: "#e0f2fe",
    shapes: &[
        RAIN_CLOUD[0],
        RAIN_CLOUD[1],
        Shape::Lines {
            stroke: round_stroke("#0ea5e9", 4),
            lines: &[
                Line(22, 44, 18, 54),
                Line(32, 44, 28, 54),
                Line(42, 44, 38, 54),
            ],
        },
    ],
};

const THUNDERSTORM: Artwork = Artwork {
    background: "#fef2f2",
    shapes: &[
        LIGHT_CLOUD[0],
        LIGHT_CLOUD[1],
        Shape::Polygon {
            points: &[(30, 40), (38, 40), (32, 52), (40, 52), (30, 64)],
            fill: "#f97316",
            stroke: stroke("#ea580c", 2),
        },
    ],
};

const SNOW: Artwork = Artwork {
    background: "#e0f2fe",
    shapes: &[
        LIGHT_CLOUD[0],
        LIGHT_CLOUD[1],
        Shape::Lines {
            stroke: round_stroke("#1e293b", 3),
            lines: &[
                Line(24, 44, 22, 54),
                Line(32, 44, 30, 54),
                Line(40, 44, 38, 54),
                Line(28, 49, 36, 49),
                Line(26, 52, 34, 52),
            ],
        },
    ],
};

const FOG: Artwork = Artwork {
    background: "#e2e8f0",
    shapes: &[Shape::Lines {
        stroke: round_stroke("#475569", 4),
        lines: &[
            Line(16, 26, 48, 26),
            Line(12, 34, 44, 34),
            Line(18, 42, 50, 42),
        ],
    }],
};

fn artwork(category: WeatherCategory) -> &'static Artwork {
    match category {
        WeatherCategory::Clear => &CLEAR,
        WeatherCategory::PartlyCloudy => &PARTLY_CLOUDY,
        WeatherCategory::Fog => &FOG,
        WeatherCategory::Rain => &RAIN,
        WeatherCategory::Snow => &SNOW,
        WeatherCategory::Thunderstorm => &THUNDERSTORM,
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"stroke="{}" stroke-width="{}""#, self.color, self.width)?;
        if self.round_caps {
            f.write_str(r#" stroke-linecap="round""#)?;
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" {stroke}/>"#)
            }
            Shape::Ellipse {
                cx,
                cy,
                rx,
                ry,
                fill,
            } => {
                write!(f, r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="{fill}"/>"#)
            }
            Shape::Polygon {
                points,
                fill,
                stroke,
            } => {
                f.write_str(r#"<polygon points=""#)?;
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{x},{y}")?;
                }
                write!(f, r#"" fill="{fill}" {stroke}/>"#)
            }
            Shape::Lines { stroke, lines } => {
                write!(f, "<g {stroke}>")?;
                for Line(x1, y1, x2, y2) in lines.iter() {
                    write!(f, r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#)?;
                }
                f.write_str("</g>")
            }
        }
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64" aria-hidden="true">"#,
        )?;
        write!(f, r#"<rect width="64" height="64" rx="14" fill="{}"/>"#, self.background)?;
        for shape in self.shapes {
            write!(f, "{shape}")?;
        }
        f.write_str("</svg>")
    }
}

/// Raw SVG markup for a category.
pub fn svg_for(category: WeatherCategory) -> String {
    artwork(category).to_string()
}

/// Icon for a category, encoded as a `data:image/svg+xml` URI.
pub fn icon_for(category: WeatherCategory) -> Icon {
    let svg = svg_for(category);
    Icon {
        category,
        data_uri: format!("{DATA_URI_PREFIX}{}", urlencoding::encode(&svg)),
        alt_text: category.alt_text(),
    }
}
