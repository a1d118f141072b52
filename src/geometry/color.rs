use {
  crate::error::Error,
  std::{fmt, str::FromStr}
};

/// 8-bit RGB triple.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
  pub const GREEN: Color = Color([0, 255, 0]);
  pub const MAGENTA: Color = Color([255, 0, 255]);
  pub const RED: Color = Color([255, 0, 0]);
  /// Initial pad color of the drawing.
  pub const PAD: Color = Color([53, 165, 0]);
  /// Initial pear color of the drawing.
  pub const PEAR: Color = Color([216, 56, 212]);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Color([r, g, b])
  }
}

/// Accepts `#rrggbb`, `rrggbb`, or one of `green`, `magenta`, `red`, `pad`, `pear`.
impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || Error::InvalidArgument(format!("color: {:?}", s));
    match s.to_ascii_lowercase().as_str() {
      "green" => return Ok(Color::GREEN),
      "magenta" => return Ok(Color::MAGENTA),
      "red" => return Ok(Color::RED),
      "pad" => return Ok(Color::PAD),
      "pear" => return Ok(Color::PEAR),
      _ => ()
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
      .map_err(|_| invalid());
    Ok(Color([channel(0)?, channel(2)?, channel(4)?]))
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [r, g, b] = self.0;
    write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
  }
}
