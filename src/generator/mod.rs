//! Recursive pad-and-pear fractal.
//!
//! Every circle that is neither at the last level nor too small is a *pad*: two
//! children of `radius * ratio` touch it at `±45°` from its own heading. Terminal
//! circles are *pears*. Output order is pre-order, the `+45°` subtree before the `-45°` one.

use {
  crate::{
    array::DynamicArray,
    error::{Error, Result},
    geometry::{Color, Point, Shape, ShapeKind},
    profile
  },
  euclid::{Angle, Vector2D},
  std::{
    f64::consts::{FRAC_PI_4, PI},
    fmt,
    ops::RangeInclusive,
    rc::Rc
  }
};

pub mod observer;
pub use observer::{Listener, Subject};

/// Heading of the root circle; branches grow upward from it.
pub const START_ANGLE: f64 = 3.0 * PI / 2.0;
pub const START_RADIUS: f64 = 140.0;
pub const START_X: f64 = 450.0;
pub const START_Y: f64 = 600.0;
/// Angle between a pad's heading and each child's heading.
pub const BRANCH_TURN: f64 = FRAC_PI_4;
/// Largest depth accepted, bounding both recursion and output (`2^depth - 1` shapes).
pub const MAX_DEPTH: u32 = 20;
/// Depths the drawing is tuned for.
pub const DEPTH_RANGE: RangeInclusive<u32> = 2..=10;
/// Ratios, in percent, the drawing is tuned for.
pub const PERCENT_RANGE: RangeInclusive<u32> = 40..=70;

/// One consistent set of generation parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
  pub depth: u32,
  /// Child radius over parent radius. Not validated: values outside `(0, 1)` give
  /// overlapping or inverted trees.
  pub ratio: f64,
  pub pad: Color,
  pub pear: Color,
}

impl Params {
  pub fn new(depth: u32, ratio: f64, pad: Color, pear: Color) -> Self {
    Self { depth, ratio, pad, pear }
  }

  /// `percent` is the child-to-parent ratio times 100.
  pub fn from_percent(depth: u32, percent: f64, pad: Color, pear: Color) -> Self {
    Self::new(depth, percent / 100.0, pad, pear)
  }

  fn validate(&self) -> Result<()> {
    if self.depth == 0 || self.depth > MAX_DEPTH {
      return Err(Error::InvalidArgument(
        format!("depth: {} (expected 1..={})", self.depth, MAX_DEPTH)
      ));
    }
    Ok(())
  }

  fn grow(&self, shapes: &mut DynamicArray<Shape>, depth: u32, angle: Angle<f64>, radius: f64, center: Point) {
    // written as a positive test so a NaN radius ends the branch
    if depth < 1 || !(radius >= 1.0) {
      return;
    }
    if depth == 1 || radius <= 2.0 {
      shapes.push(Shape::circle(center, radius, self.pear, ShapeKind::Pear));
      return;
    }
    shapes.push(Shape::circle(center, radius, self.pad, ShapeKind::Pad));

    let child_radius = radius * self.ratio;
    let reach = radius + child_radius;
    let turn = Angle::radians(BRANCH_TURN);
    for heading in [angle + turn, angle - turn] {
      let child_center = center + Vector2D::from_angle_and_length(heading, reach);
      self.grow(shapes, depth - 1, heading, child_radius, child_center);
    }
  }
}

/// The drawing's initial state.
impl Default for Params {
  fn default() -> Self {
    Self::from_percent(4, 50.0, Color::PAD, Color::PEAR)
  }
}

/// Holds the current [`Params`] and publishes every change to its [`Listener`]s.
pub struct FractalGenerator {
  params: Option<Params>,
  listeners: DynamicArray<Rc<dyn Listener>>,
}

impl FractalGenerator {
  pub fn new() -> Self {
    Self {
      params: None,
      listeners: DynamicArray::new()
    }
  }

  /// `None` until parameters are first set.
  pub fn params(&self) -> Option<Params> {
    self.params
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }

  /// Swaps in `params` as a whole and notifies listeners. A depth of zero or above
  /// [`MAX_DEPTH`] is rejected; then nothing changes and nobody is notified.
  pub fn replace_params(&mut self, params: Params) -> Result<()> {
    params.validate()?;
    log::debug!("parameters: {:?}", params);
    self.params = Some(params);
    self.notify_all();
    Ok(())
  }
}

impl Subject for FractalGenerator {
  fn attach(&mut self, listener: Rc<dyn Listener>) {
    self.listeners.push(listener);
    log::debug!("listener attached ({} total)", self.listeners.len());
  }

  fn detach(&mut self, listener: &Rc<dyn Listener>) -> bool {
    let index = match self.listeners.position(|l| observer::same_listener(l, listener)) {
      Some(index) => index,
      None => return false
    };
    match self.listeners.remove(index) {
      Ok(_) => {
        log::debug!("listener detached ({} left)", self.listeners.len());
        true
      }
      Err(e) => {
        log::warn!("detach: {}", e);
        false
      }
    }
  }

  fn notify_all(&self) {
    self.listeners.iter()
      .for_each(|listener| listener.update(self));
  }

  fn set_parameters(&mut self, depth: u32, ratio: f64, pad: Color, pear: Color) -> Result<()> {
    self.replace_params(Params::new(depth, ratio, pad, pear))
  }

  fn shapes(&self) -> DynamicArray<Shape> {
    let mut shapes = DynamicArray::new();
    if let Some(params) = self.params {
      profile!("generate", {
        params.grow(
          &mut shapes,
          params.depth,
          Angle::radians(START_ANGLE),
          START_RADIUS,
          Point::new(START_X, START_Y)
        )
      });
      log::debug!("generated {} shapes", shapes.len());
    }
    shapes
  }
}

impl Default for FractalGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for FractalGenerator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FractalGenerator")
      .field("params", &self.params)
      .field("listeners", &self.listeners.len())
      .finish()
  }
}
