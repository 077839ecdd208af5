//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions an image takes when scaled to fit a square.
///
/// The longer side becomes `size`; the shorter side is scaled proportionally
/// and rounded. A square input becomes `(size, size)` exactly. The rounding
/// introduces up to ±1 pixel of aspect distortion, which is acceptable at
/// the sizes this tool targets.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `size` - Target square dimension
///
/// # Examples
/// ```
/// # use squareset::imaging::fit_to_square;
/// // Landscape: width pinned to the target, height scaled
/// assert_eq!(fit_to_square((800, 400), 640), (640, 320));
///
/// // Portrait: height pinned, width scaled
/// assert_eq!(fit_to_square((400, 800), 640), (320, 640));
///
/// // Square: both dimensions become the target
/// assert_eq!(fit_to_square((500, 500), 640), (640, 640));
/// ```
pub fn fit_to_square(source: (u32, u32), size: u32) -> (u32, u32) {
    let (width, height) = source;

    if width > height {
        let new_height = (height as f64 * size as f64 / width as f64).round() as u32;
        (size, new_height)
    } else if height > width {
        let new_width = (width as f64 * size as f64 / height as f64).round() as u32;
        (new_width, size)
    } else {
        (size, size)
    }
}
