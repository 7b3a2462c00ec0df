// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contrast::contrast;
use rgb::RGB8;

pub const WHITE: RGB8 = RGB8::new(255, 255, 255);
pub const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// Used for any color name the inventory doesn't know
pub const DEFAULT_CAR_COLOR: RGB8 = RGB8::new(0x6b, 0x72, 0x80);

const CAR_COLORS: [(&str, RGB8); 10] = [
	("rojo", RGB8::new(0xdc, 0x26, 0x26)),
	("azul", RGB8::new(0x25, 0x63, 0xeb)),
	("verde", RGB8::new(0x16, 0xa3, 0x4a)),
	("negro", BLACK),
	("blanco", WHITE),
	("gris", DEFAULT_CAR_COLOR),
	("plateado", RGB8::new(0xcb, 0xd5, 0xe1)),
	("amarillo", RGB8::new(0xea, 0xb3, 0x08)),
	("naranja", RGB8::new(0xea, 0x58, 0x0c)),
	("morado", RGB8::new(0x7c, 0x3a, 0xed)),
];

/// Gets the display color for a car's color name.
pub fn car_color(name: &str) -> RGB8 {
	let name = name.trim().to_lowercase();
	CAR_COLORS
		.iter()
		.find(|(color_name, _)| *color_name == name)
		.map(|(_, color)| *color)
		.unwrap_or(DEFAULT_CAR_COLOR)
}

pub fn rgb_str_from_color(color: RGB8) -> String {
	format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

pub fn use_white_foreground(color: &RGB8) -> bool {
	let white_contrast: f64 = contrast(*color, WHITE);
	let black_contrast: f64 = contrast(*color, BLACK);

	white_contrast > black_contrast
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn color_names_ignore_case() {
		assert_eq!(rgb_str_from_color(car_color("Rojo")), "#dc2626");
		assert_eq!(rgb_str_from_color(car_color("AZUL")), "#2563eb");
		assert_eq!(rgb_str_from_color(car_color("plateado")), "#cbd5e1");
	}

	#[test]
	fn unknown_colors_are_gray() {
		assert_eq!(car_color("Turquesa"), DEFAULT_CAR_COLOR);
		assert_eq!(rgb_str_from_color(car_color("")), "#6b7280");
	}

	#[test]
	fn foreground_contrasts_with_swatch() {
		assert!(use_white_foreground(&car_color("Negro")));
		assert!(!use_white_foreground(&car_color("Blanco")));
		assert!(!use_white_foreground(&car_color("Amarillo")));
	}
}
