use serde::{Deserialize, Serialize};

use crate::error::InputError;

// Keep in sync with the highlight classes of the editor stylesheet.
const LIGHT_PALETTE: [u32; 42] = [
    0xa280cc, 0x375fc2, 0xca7137, 0xc27498, 0x9ec2a4, 0xbcb1c8, 0xb47d65, 0x782525, 0x111e1e,
    0xbe87a0, 0xa793ae, 0xc8c9c6, 0x91abbe, 0xacbac4, 0xcc9d9d, 0xc78e8e, 0xbe909c, 0x66b10f,
    0x99ba68, 0x00cc00, 0xa9a2b6, 0xa790a5, 0xa698a3, 0xaca3b3, 0xbcb1b9, 0xc7c9cc, 0xc0c4cc,
    0x83ab4b, 0x86b680, 0x897b86, 0x786774, 0x99becb, 0xcc9e80, 0x002a49, 0xcccb8a, 0xccc572,
    0x6c6c5f, 0x9a8e80, 0xcc6640, 0xc29657, 0x769e5b, 0x0066b5,
];

const DARK_PALETTE: [u32; 42] = [
    0xd9b3ff, 0x6b93ff, 0xffa96c, 0xffacd2, 0xdcffe4, 0xeadbf6, 0xffb695, 0xb93939, 0x1d3939,
    0xeea9c6, 0xe7d0f1, 0xfafbf8, 0xcde8ff, 0xd7e9f5, 0xffc4c4, 0xf9b1b1, 0xffcbd9, 0x9fff18,
    0xd8ff9a, 0x00ff00, 0xece4fc, 0xe9cce6, 0xe8d6e4, 0xf0e3f8, 0xecdde7, 0xf9fbff, 0xf0f5ff,
    0xbcee76, 0xc0ffb8, 0xc3b2c0, 0xae98aa, 0xc0eeff, 0xffd1c0, 0x004872, 0xfffdad, 0xfff68f,
    0x9e9e8e, 0xd8c8b7, 0xff7f50, 0xf3bb6c, 0xaadc89, 0x009aff,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    /// Colour of same-file arrows.
    pub same_file_color: u32,
    /// Colour of dependency arrows that have no assigned highlight.
    pub fallback_color: u32,
    /// Highlight colours handed out to dependency pairs.
    pub palette: Vec<u32>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            dark: false,
            same_file_color: 0x000000,
            fallback_color: 0x000000,
            palette: LIGHT_PALETTE.to_vec(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            dark: true,
            same_file_color: 0xffffff,
            fallback_color: 0x000000,
            palette: DARK_PALETTE.to_vec(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

/// Parses `#rrggbb`, `rrggbb` or `0xrrggbb`.
pub fn parse_hex_color(value: &str) -> Result<u32, InputError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);
    if digits.len() != 6 {
        return Err(InputError::InvalidColor(value.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| InputError::InvalidColor(value.to_string()))
}

pub fn format_hex_color(color: u32) -> String {
    format!("#{:06x}", color & 0xffffff)
}
