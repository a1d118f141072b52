use humansize::{FileSize, file_size_opts as options};

/// Evaluates `$body`, logging its wall time at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $body: block) => {{
    let t0 = std::time::Instant::now();
    let result = $body;
    log::debug!("{} profile: {}us", $title, t0.elapsed().as_micros());
    result
  }}
);

/// `bytes` in binary units, e.g. `1.50 KiB`.
pub(crate) fn byte_size(bytes: usize) -> String {
  bytes.file_size(options::BINARY)
    .unwrap_or_else(|e| e)
}
