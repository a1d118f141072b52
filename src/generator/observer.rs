use {
  crate::{
    array::DynamicArray,
    error::Result,
    geometry::{Color, Shape}
  },
  std::rc::Rc
};

/// Consumer of parameter changes.
pub trait Listener {
  /// Called synchronously after every accepted parameter change. The subject is handed
  /// in so the listener can pull the new shape list.
  fn update(&self, subject: &dyn Subject);
}

/// Publisher side: owns the parameters and an ordered set of listeners.
pub trait Subject {
  fn attach(&mut self, listener: Rc<dyn Listener>);
  /// Removes `listener`, matched by identity. Returns whether it was attached.
  fn detach(&mut self, listener: &Rc<dyn Listener>) -> bool;
  /// Calls every listener in attachment order.
  fn notify_all(&self);
  /// Replaces all four parameters at once, then notifies.
  fn set_parameters(&mut self, depth: u32, ratio: f64, pad: Color, pear: Color) -> Result<()>;
  /// Freshly generated shapes for the current parameters.
  fn shapes(&self) -> DynamicArray<Shape>;
}

pub(super) fn same_listener(a: &Rc<dyn Listener>, b: &Rc<dyn Listener>) -> bool {
  Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
